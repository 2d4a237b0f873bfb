//! Collection Handlers
//!
//! Each relation gets its own endpoints; both share [`add`] and [`remove`].

use std::sync::Arc;

use salvo::prelude::*;
use uuid::Uuid;

use larder_app::domain::collections::RecipeCollection;

use crate::{
    collections::errors::into_status_error, extensions::*,
    recipes::responses::RecipeSummaryResponse, state::State,
};

pub(crate) mod favorite;
pub(crate) mod shopping_cart;

async fn add(
    collection: RecipeCollection,
    recipe: Uuid,
    depot: &Depot,
    res: &mut Response,
) -> Result<Json<RecipeSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let summary = state
        .app
        .collections
        .add(collection, user, recipe.into())
        .await
        .map_err(|error| into_status_error(error, collection))?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(summary.into()))
}

async fn remove(
    collection: RecipeCollection,
    recipe: Uuid,
    depot: &Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    state
        .app
        .collections
        .remove(collection, user, recipe.into())
        .await
        .map_err(|error| into_status_error(error, collection))?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use larder_app::domain::{
        collections::{CollectionsServiceError, MockCollectionsService},
        recipes::records::{RecipeSummary, RecipeUuid},
    };

    use crate::test_helpers::{Mocks, TEST_USER_UUID, member_service};

    use super::*;

    const BOTH: [(RecipeCollection, &str); 2] = [
        (RecipeCollection::ShoppingCart, "shopping_cart"),
        (RecipeCollection::Favorites, "favorite"),
    ];

    fn route() -> Router {
        Router::with_path("recipes/{recipe}")
            .push(
                Router::with_path("shopping_cart")
                    .post(shopping_cart::add::handler)
                    .delete(shopping_cart::remove::handler),
            )
            .push(
                Router::with_path("favorite")
                    .post(favorite::add::handler)
                    .delete(favorite::remove::handler),
            )
    }

    fn make_service(collections: MockCollectionsService) -> Service {
        member_service(
            Mocks {
                collections,
                ..Mocks::default()
            },
            route(),
        )
    }

    #[tokio::test]
    async fn test_add_returns_201_with_summary() -> TestResult {
        for (collection, path) in BOTH {
            let uuid = RecipeUuid::new();

            let mut collections = MockCollectionsService::new();

            collections
                .expect_add()
                .once()
                .withf(move |c, user, recipe| {
                    *c == collection && *user == TEST_USER_UUID && *recipe == uuid
                })
                .return_once(move |_, _, _| {
                    Ok(RecipeSummary {
                        uuid,
                        name: "Pancakes".to_string(),
                        image: None,
                        cooking_time: 20,
                    })
                });

            collections.expect_remove().never();

            let mut res = TestClient::post(format!("http://example.com/recipes/{uuid}/{path}"))
                .send(&make_service(collections))
                .await;

            let body: RecipeSummaryResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::CREATED), "{collection}");
            assert_eq!(body.uuid, uuid.into_uuid());
            assert_eq!(body.cooking_time, 20);
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_add_twice_returns_409() -> TestResult {
        for (_, path) in BOTH {
            let mut collections = MockCollectionsService::new();

            collections
                .expect_add()
                .once()
                .return_once(|_, _, _| Err(CollectionsServiceError::AlreadyExists));

            let res = TestClient::post(format!("http://example.com/recipes/{}/{path}", Uuid::now_v7()))
                .send(&make_service(collections))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_recipe_returns_404() -> TestResult {
        let mut collections = MockCollectionsService::new();

        collections
            .expect_add()
            .once()
            .return_once(|_, _, _| Err(CollectionsServiceError::NotFound));

        let res = TestClient::post(format!(
            "http://example.com/recipes/{}/shopping_cart",
            Uuid::now_v7()
        ))
        .send(&make_service(collections))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_returns_204() -> TestResult {
        for (collection, path) in BOTH {
            let uuid = RecipeUuid::new();

            let mut collections = MockCollectionsService::new();

            collections
                .expect_remove()
                .once()
                .withf(move |c, user, recipe| {
                    *c == collection && *user == TEST_USER_UUID && *recipe == uuid
                })
                .return_once(|_, _, _| Ok(()));

            collections.expect_add().never();

            let res = TestClient::delete(format!("http://example.com/recipes/{uuid}/{path}"))
                .send(&make_service(collections))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT), "{collection}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_absent_entry_returns_404() -> TestResult {
        let mut collections = MockCollectionsService::new();

        collections
            .expect_remove()
            .once()
            .return_once(|_, _, _| Err(CollectionsServiceError::NotFound));

        let res = TestClient::delete(format!(
            "http://example.com/recipes/{}/favorite",
            Uuid::now_v7()
        ))
        .send(&make_service(collections))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
