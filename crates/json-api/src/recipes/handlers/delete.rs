//! Delete Recipe Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, recipes::errors::into_status_error, state::State};

/// Delete Recipe Handler
#[endpoint(
    tags("recipes"),
    summary = "Delete Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Recipe deleted"),
        (status_code = StatusCode::FORBIDDEN, description = "Not the author"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let author = depot.user_uuid_or_401()?;

    state
        .app
        .recipes
        .delete_recipe(author, recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
