//! Ingredient Records

use crate::uuids::TypedUuid;

/// Ingredient UUID
pub type IngredientUuid = TypedUuid<IngredientRecord>;

/// Ingredient Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRecord {
    pub uuid: IngredientUuid,
    pub name: String,
    pub measurement_unit: String,
}
