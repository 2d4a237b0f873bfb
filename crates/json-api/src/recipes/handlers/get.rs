//! Get Recipe Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    recipes::{errors::into_status_error, responses::RecipeResponse},
    state::State,
};

/// Get Recipe Handler
///
/// Anonymous viewers see `is_favorited`, `is_in_shopping_cart` and `is_subscribed` as false.
#[endpoint(
    tags("recipes"),
    summary = "Get Recipe",
    responses(
        (status_code = StatusCode::OK, description = "Recipe found"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RecipeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let recipe = state
        .app
        .recipes
        .get_recipe(depot.viewer(), recipe.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(recipe.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use larder_app::domain::recipes::{MockRecipesService, RecipesServiceError, records::RecipeUuid};

    use crate::test_helpers::{Mocks, TEST_USER_UUID, anonymous_service, member_service};

    use super::{super::tests::make_recipe, *};

    fn route() -> Router {
        Router::with_path("recipes/{recipe}").get(handler)
    }

    #[tokio::test]
    async fn test_get_recipe_as_member_passes_the_viewer() -> TestResult {
        let uuid = RecipeUuid::new();

        let mut recipes = MockRecipesService::new();

        recipes
            .expect_get_recipe()
            .once()
            .withf(move |viewer, recipe| *viewer == Some(TEST_USER_UUID) && *recipe == uuid)
            .return_once(move |_, _| {
                let mut recipe = make_recipe(uuid);
                recipe.is_favorited = true;

                Ok(recipe)
            });

        let mut res = TestClient::get(format!("http://example.com/recipes/{uuid}"))
            .send(&member_service(
                Mocks {
                    recipes,
                    ..Mocks::default()
                },
                route(),
            ))
            .await;

        let body: RecipeResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert!(body.is_favorited);
        assert_eq!(body.tags.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_recipe_anonymously_has_no_viewer() -> TestResult {
        let uuid = RecipeUuid::new();

        let mut recipes = MockRecipesService::new();

        recipes
            .expect_get_recipe()
            .once()
            .withf(move |viewer, recipe| viewer.is_none() && *recipe == uuid)
            .return_once(move |_, _| Ok(make_recipe(uuid)));

        let res = TestClient::get(format!("http://example.com/recipes/{uuid}"))
            .send(&anonymous_service(
                Mocks {
                    recipes,
                    ..Mocks::default()
                },
                route(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_recipe_returns_404() -> TestResult {
        let mut recipes = MockRecipesService::new();

        recipes
            .expect_get_recipe()
            .once()
            .return_once(|_, _| Err(RecipesServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/recipes/{}", Uuid::now_v7()))
            .send(&anonymous_service(
                Mocks {
                    recipes,
                    ..Mocks::default()
                },
                route(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_recipe_invalid_uuid_returns_400() -> TestResult {
        let mut recipes = MockRecipesService::new();

        recipes.expect_get_recipe().never();

        let res = TestClient::get("http://example.com/recipes/not-a-uuid")
            .send(&anonymous_service(
                Mocks {
                    recipes,
                    ..Mocks::default()
                },
                route(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
