//! Add To Favorites Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use larder_app::domain::collections::RecipeCollection;

use crate::recipes::responses::RecipeSummaryResponse;

/// Add a recipe to favorites.
#[endpoint(
    tags("favorites"),
    summary = "Add Recipe To Favorites",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Recipe added"),
        (status_code = StatusCode::CONFLICT, description = "Recipe already present"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RecipeSummaryResponse>, StatusError> {
    super::super::add(RecipeCollection::Favorites, recipe.into_inner(), depot, res).await
}
