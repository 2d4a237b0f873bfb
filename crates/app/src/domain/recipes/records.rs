//! Recipe Records

use crate::{domain::recipes::models::Recipe, uuids::TypedUuid};

/// Recipe UUID
pub type RecipeUuid = TypedUuid<Recipe>;

/// The short form of a recipe returned by collection and subscription endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub uuid: RecipeUuid,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: u32,
}
