//! Update Recipe Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use larder_app::domain::recipes::records::RecipeUuid;

use crate::{
    extensions::*,
    recipes::{
        errors::into_status_error, handlers::create::CreateRecipeRequest,
        responses::RecipeResponse,
    },
    state::State,
};

/// Update Recipe Handler
///
/// Replaces the recipe's ingredient lines and tags with the ones in the body. Omitting
/// `image` keeps the current one.
#[endpoint(
    tags("recipes"),
    summary = "Update Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Recipe updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid recipe payload"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the author"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "recipes.update",
    skip(recipe, json, depot),
    fields(recipe_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    json: JsonBody<CreateRecipeRequest>,
    depot: &mut Depot,
) -> Result<Json<RecipeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let author = depot.user_uuid_or_401()?;
    let recipe: RecipeUuid = recipe.into_inner().into();

    tracing::Span::current().record("recipe_uuid", tracing::field::display(recipe));

    let updated = state
        .app
        .recipes
        .update_recipe(author, recipe, json.into_inner().into_new_recipe(recipe))
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
