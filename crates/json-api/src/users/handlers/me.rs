//! Current User Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    users::{errors::user_status_error, responses::UserResponse},
};

/// Current User Handler
#[endpoint(
    tags("users"),
    summary = "Current User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "The authenticated user"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let user = state
        .app
        .users
        .get_user(user)
        .await
        .map_err(user_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use larder_app::domain::users::{MockUsersService, records::UserRecord};

    use crate::test_helpers::{Mocks, TEST_USER_UUID, anonymous_service, member_service};

    use super::*;

    fn route() -> Router {
        Router::with_path("users/me").get(handler)
    }

    #[tokio::test]
    async fn test_me_returns_the_authenticated_user() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|uuid| {
                Ok(UserRecord {
                    uuid,
                    email: "cook@example.com".to_string(),
                    username: "cook".to_string(),
                    first_name: "Julia".to_string(),
                    last_name: "Child".to_string(),
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        users.expect_create_user().never();

        let response: UserResponse = TestClient::get("http://example.com/users/me")
            .send(&member_service(
                Mocks {
                    users,
                    ..Mocks::default()
                },
                route(),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(response.uuid, TEST_USER_UUID.into_uuid());
        assert_eq!(response.username, "cook");

        Ok(())
    }

    #[tokio::test]
    async fn test_me_without_user_returns_401() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_get_user().never();

        let res = TestClient::get("http://example.com/users/me")
            .send(&anonymous_service(
                Mocks {
                    users,
                    ..Mocks::default()
                },
                route(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
