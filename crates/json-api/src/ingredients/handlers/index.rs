//! Ingredient Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_app::domain::ingredients::records::IngredientRecord;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IngredientResponse {
    pub uuid: Uuid,
    pub name: String,
    pub measurement_unit: String,
}

impl From<IngredientRecord> for IngredientResponse {
    fn from(ingredient: IngredientRecord) -> Self {
        Self {
            uuid: ingredient.uuid.into(),
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IngredientsResponse {
    pub ingredients: Vec<IngredientResponse>,
}

/// Ingredient Index Handler
///
/// `name` is a case-insensitive prefix.
#[endpoint(tags("ingredients"), summary = "List Ingredients")]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<IngredientsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let name_prefix = name
        .into_inner()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let ingredients = state
        .app
        .ingredients
        .list_ingredients(name_prefix)
        .await
        .or_500("failed to fetch ingredients")?;

    Ok(Json(IngredientsResponse {
        ingredients: ingredients.into_iter().map(Into::into).collect(),
    }))
}
