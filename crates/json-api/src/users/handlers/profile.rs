//! User Profile Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    users::{errors::user_status_error, responses::UserProfileResponse},
};

/// User Profile Handler
#[endpoint(
    tags("users"),
    summary = "User Profile",
    responses(
        (status_code = StatusCode::OK, description = "The user's public profile"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let profile = state
        .app
        .users
        .get_profile(depot.viewer(), user.into_inner().into())
        .await
        .map_err(user_status_error)?;

    Ok(Json(profile.into()))
}
