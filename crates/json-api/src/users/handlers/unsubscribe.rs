//! Unsubscribe Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State, users::errors::subscription_status_error};

/// Unsubscribe Handler
#[endpoint(
    tags("users"),
    summary = "Unsubscribe From Author",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Unsubscribed"),
        (status_code = StatusCode::NOT_FOUND, description = "Not subscribed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let subscriber = depot.user_uuid_or_401()?;

    state
        .app
        .subscriptions
        .unsubscribe(subscriber, user.into_inner().into())
        .await
        .map_err(subscription_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
