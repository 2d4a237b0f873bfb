//! Subscribe Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    users::{errors::subscription_status_error, responses::SubscribedAuthorResponse},
};

/// Subscribe Handler
///
/// `recipes_limit` caps the recipe preview in the response.
#[endpoint(
    tags("users"),
    summary = "Subscribe To Author",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Subscribed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cannot subscribe to yourself"),
        (status_code = StatusCode::NOT_FOUND, description = "Author not found"),
        (status_code = StatusCode::CONFLICT, description = "Already subscribed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    recipes_limit: QueryParam<u32, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubscribedAuthorResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let subscriber = depot.user_uuid_or_401()?;

    let author = state
        .app
        .subscriptions
        .subscribe(subscriber, user.into_inner().into(), recipes_limit.into_inner())
        .await
        .map_err(subscription_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(author.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use larder_app::domain::{
        subscriptions::{MockSubscriptionsService, SubscriptionsServiceError},
        users::records::UserUuid,
    };

    use crate::test_helpers::{Mocks, TEST_USER_UUID, member_service};

    use super::{super::tests::make_author, *};

    fn make_service(subscriptions: MockSubscriptionsService) -> Service {
        member_service(
            Mocks {
                subscriptions,
                ..Mocks::default()
            },
            Router::with_path("users/{user}/subscribe").post(handler),
        )
    }

    #[tokio::test]
    async fn test_subscribe_returns_201_with_author() -> TestResult {
        let author = UserUuid::new();

        let mut subscriptions = MockSubscriptionsService::new();

        subscriptions
            .expect_subscribe()
            .once()
            .withf(move |user, a, limit| *user == TEST_USER_UUID && *a == author && *limit == Some(2))
            .return_once(move |_, _, _| Ok(make_author(author, 2)));

        subscriptions.expect_unsubscribe().never();
        subscriptions.expect_list_subscriptions().never();

        let mut res = TestClient::post(format!(
            "http://example.com/users/{author}/subscribe?recipes_limit=2"
        ))
        .send(&make_service(subscriptions))
        .await;

        let body: SubscribedAuthorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.uuid, author.into_uuid());
        assert!(body.is_subscribed);
        assert_eq!(body.recipes.len(), 2);
        assert_eq!(body.recipes_count, 10);

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_to_self_returns_400() -> TestResult {
        let mut subscriptions = MockSubscriptionsService::new();

        subscriptions.expect_subscribe().once().return_once(|_, _, _| {
            Err(SubscriptionsServiceError::Validation(
                "cannot subscribe to yourself".to_string(),
            ))
        });

        let res = TestClient::post(format!(
            "http://example.com/users/{TEST_USER_UUID}/subscribe"
        ))
        .send(&make_service(subscriptions))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_twice_returns_409() -> TestResult {
        let mut subscriptions = MockSubscriptionsService::new();

        subscriptions
            .expect_subscribe()
            .once()
            .return_once(|_, _, _| Err(SubscriptionsServiceError::AlreadyExists));

        let res = TestClient::post(format!(
            "http://example.com/users/{}/subscribe",
            Uuid::now_v7()
        ))
        .send(&make_service(subscriptions))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
