//! App Router

use salvo::Router;

use crate::{auth, collections, ingredients, links, recipes, shopping_list, tags, users};

/// Every application route. API routes are mounted under `api_mount_path` (empty mounts
/// them at the root); short link redirects always live at `/s/{token}`.
pub(crate) fn app_router(api_mount_path: &str) -> Router {
    let api = if api_mount_path.is_empty() {
        Router::new()
    } else {
        Router::with_path(api_mount_path)
    };

    Router::new()
        .push(Router::with_path("s/{token}").get(links::resolve::handler))
        .push(api.push(member_routes()).push(public_routes()))
}

/// Routes that need a signed-in user.
fn member_routes() -> Router {
    Router::new()
        .hoop(auth::middleware::required)
        .push(
            Router::with_path("recipes")
                .post(recipes::create::handler)
                .push(
                    Router::with_path("download_shopping_cart")
                        .get(shopping_list::download::handler),
                )
                .push(
                    Router::with_path("{recipe}")
                        .patch(recipes::update::handler)
                        .delete(recipes::delete::handler)
                        .push(
                            Router::with_path("shopping_cart")
                                .post(collections::shopping_cart::add::handler)
                                .delete(collections::shopping_cart::remove::handler),
                        )
                        .push(
                            Router::with_path("favorite")
                                .post(collections::favorite::add::handler)
                                .delete(collections::favorite::remove::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("users")
                .push(Router::with_path("me").get(users::me::handler))
                .push(Router::with_path("subscriptions").get(users::subscriptions::handler))
                .push(
                    Router::with_path("{user}/subscribe")
                        .post(users::subscribe::handler)
                        .delete(users::unsubscribe::handler),
                ),
        )
}

/// Routes open to anonymous callers; a valid token adds viewer context.
fn public_routes() -> Router {
    Router::new()
        .hoop(auth::middleware::optional)
        .push(
            Router::with_path("recipes")
                .get(recipes::index::handler)
                .push(
                    Router::with_path("{recipe}")
                        .get(recipes::get::handler)
                        .push(Router::with_path("get-link").get(links::get_link::handler)),
                ),
        )
        .push(Router::with_path("users/{user}").get(users::profile::handler))
        .push(Router::with_path("tags").get(tags::index::handler))
        .push(Router::with_path("ingredients").get(ingredients::index::handler))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::{StatusCode, header::AUTHORIZATION},
        test::{ResponseExt, TestClient},
        Service,
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use larder_app::{
        auth::AuthServiceError,
        domain::{
            recipes::records::RecipeUuid,
            shopping_list::ShoppingList,
            users::{UsersServiceError, records::UserUuid},
        },
    };

    use crate::{recipes::index::RecipesResponse, test_helpers::Mocks};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(mocks.into_state()))
                .push(app_router("api")),
        )
    }

    #[tokio::test]
    async fn test_member_routes_require_a_token() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.auth.expect_authenticate_bearer().never();
        mocks.shopping_list.expect_generate_report().never();

        let res = TestClient::get("http://example.com/api/recipes/download_shopping_cart")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_download_is_not_mistaken_for_a_recipe_uuid() -> TestResult {
        let user = UserUuid::new();
        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_authenticate_bearer()
            .once()
            .return_once(move |_| Ok(user));
        mocks
            .shopping_list
            .expect_generate_report()
            .once()
            .withf(move |u| *u == user)
            .return_once(|_| Ok(ShoppingList::default()));

        let mut res = TestClient::get("http://example.com/api/recipes/download_shopping_cart")
            .add_header(AUTHORIZATION, "Bearer lr_valid", true)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "Shopping list:\n");

        Ok(())
    }

    #[tokio::test]
    async fn test_recipe_list_is_public() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.auth.expect_authenticate_bearer().never();
        mocks
            .recipes
            .expect_list_recipes()
            .once()
            .withf(|viewer, _| viewer.is_none())
            .return_once(|_, _| Ok(vec![]));

        let response: RecipesResponse = TestClient::get("http://example.com/api/recipes")
            .send(&make_service(mocks))
            .await
            .take_json()
            .await?;

        assert!(response.recipes.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_creating_a_recipe_needs_a_valid_token() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .auth
            .expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::NotFound));
        mocks.recipes.expect_create_recipe().never();

        let res = TestClient::post("http://example.com/api/recipes")
            .add_header(AUTHORIZATION, "Bearer lr_revoked", true)
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_short_links_resolve_outside_the_api_prefix() -> TestResult {
        let recipe = RecipeUuid::new();
        let mut mocks = Mocks::default();

        mocks
            .short_links
            .expect_resolve()
            .once()
            .return_once(move |_| Ok(format!("/recipes/{recipe}/")));

        let res = TestClient::get("http://example.com/s/AbCdEfG")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_updating_a_recipe_requires_a_token() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.recipes.expect_update_recipe().never();

        let url = format!("http://example.com/api/recipes/{}", RecipeUuid::new());

        let res = TestClient::patch(url).send(&make_service(mocks)).await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_me_is_not_mistaken_for_a_profile() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.users.expect_get_profile().never();

        let res = TestClient::get("http://example.com/api/users/me")
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_user_profiles_are_public() -> TestResult {
        let user = UserUuid::new();
        let mut mocks = Mocks::default();

        mocks.auth.expect_authenticate_bearer().never();
        mocks
            .users
            .expect_get_profile()
            .once()
            .withf(move |viewer, u| viewer.is_none() && *u == user)
            .return_once(|_, _| Err(UsersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/api/users/{user}"))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_routes_return_404() -> TestResult {
        let res = TestClient::get(format!("http://example.com/api/widgets/{}", Uuid::now_v7()))
            .send(&make_service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
