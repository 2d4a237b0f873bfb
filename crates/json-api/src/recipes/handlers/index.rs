//! Recipe Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_app::domain::recipes::data::RecipeFilter;

use crate::{
    extensions::*,
    recipes::{errors::into_status_error, responses::RecipeResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipesResponse {
    /// Matching recipes, newest first
    pub recipes: Vec<RecipeResponse>,
}

/// Recipe Index Handler
///
/// Filters combine with AND; repeated `tags` match any of the given slugs. The two
/// collection flags only apply to signed-in viewers.
#[endpoint(
    tags("recipes"),
    summary = "List Recipes",
    responses(
        (status_code = StatusCode::OK, description = "Recipes"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed filter"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    author: QueryParam<Uuid, false>,
    tags: QueryParam<Vec<String>, false>,
    is_favorited: QueryParam<String, false>,
    is_in_shopping_cart: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<RecipesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = RecipeFilter {
        author: author.into_inner().map(Into::into),
        tags: tags.into_inner().unwrap_or_default(),
        is_favorited: parse_flag(is_favorited.into_inner().as_deref())
            .or_400("is_favorited must be 0 or 1")?,
        is_in_shopping_cart: parse_flag(is_in_shopping_cart.into_inner().as_deref())
            .or_400("is_in_shopping_cart must be 0 or 1")?,
    };

    let recipes = state
        .app
        .recipes
        .list_recipes(depot.viewer(), filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(RecipesResponse {
        recipes: recipes.into_iter().map(Into::into).collect(),
    }))
}

/// Accepts `1`/`0` and `true`/`false`; absent means false.
fn parse_flag(value: Option<&str>) -> Result<bool, String> {
    match value.map(str::trim) {
        None | Some("" | "0" | "false") => Ok(false),
        Some("1" | "true") => Ok(true),
        Some(other) => Err(format!("unexpected flag value {other:?}")),
    }
}
