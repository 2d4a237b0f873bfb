//! Subscriptions Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    state::State,
    users::{errors::subscription_status_error, responses::SubscriptionsResponse},
};

/// Subscriptions Index Handler
///
/// Every author the current user follows, each with up to `recipes_limit` newest recipes.
#[endpoint(
    tags("users"),
    summary = "List Subscriptions",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Followed authors"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    recipes_limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<SubscriptionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let authors = state
        .app
        .subscriptions
        .list_subscriptions(user, recipes_limit.into_inner())
        .await
        .map_err(subscription_status_error)?;

    Ok(Json(SubscriptionsResponse {
        authors: authors.into_iter().map(Into::into).collect(),
    }))
}
