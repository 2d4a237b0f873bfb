//! Get Recipe Short Link Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, links::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShortLinkResponse {
    /// Absolute short URL
    #[serde(rename = "short-link")]
    pub short_link: String,
}

/// Get Recipe Short Link Handler
///
/// Issues the recipe's short link on first request and returns the same one afterwards.
#[endpoint(
    tags("recipes"),
    summary = "Get Recipe Short Link",
    responses(
        (status_code = StatusCode::OK, description = "Short link"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "No free token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ShortLinkResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let link = state
        .app
        .short_links
        .issue_for_recipe(recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ShortLinkResponse {
        short_link: link.short_url,
    }))
}
