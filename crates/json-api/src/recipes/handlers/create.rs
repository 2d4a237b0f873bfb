//! Create Recipe Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_app::domain::recipes::{
    data::{NewRecipe, NewRecipeIngredient},
    records::RecipeUuid,
};

use crate::{
    extensions::*,
    recipes::{errors::into_status_error, responses::RecipeResponse},
    state::State,
};

/// One ingredient line of a new recipe.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeIngredientRequest {
    /// Ingredient UUID
    pub id: Uuid,

    /// Quantity in the ingredient's measurement unit
    pub amount: u32,
}

/// Create Recipe Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRecipeRequest {
    pub name: String,
    pub text: String,

    /// Image reference
    #[serde(default)]
    pub image: Option<String>,

    /// Cooking time in minutes
    pub cooking_time: u32,
    pub ingredients: Vec<RecipeIngredientRequest>,

    /// Tag UUIDs
    pub tags: Vec<Uuid>,
}

impl CreateRecipeRequest {
    pub(crate) fn into_new_recipe(self, uuid: RecipeUuid) -> NewRecipe {
        NewRecipe {
            uuid,
            name: self.name,
            text: self.text,
            image: self.image,
            cooking_time: self.cooking_time,
            ingredients: self
                .ingredients
                .into_iter()
                .map(|line| NewRecipeIngredient {
                    ingredient: line.id.into(),
                    amount: line.amount,
                })
                .collect(),
            tags: self.tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateRecipeRequest> for NewRecipe {
    fn from(request: CreateRecipeRequest) -> Self {
        request.into_new_recipe(RecipeUuid::new())
    }
}

/// Create Recipe Handler
#[endpoint(
    tags("recipes"),
    summary = "Create Recipe",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Recipe created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid recipe payload"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRecipeRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RecipeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let author = depot.user_uuid_or_401()?;

    let recipe = state
        .app
        .recipes
        .create_recipe(author, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    let location = format!("{}/{}", req.uri().path().trim_end_matches('/'), recipe.uuid);

    res.add_header(LOCATION, location, true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(recipe.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use larder_app::domain::{
        ingredients::records::IngredientUuid,
        recipes::{MockRecipesService, RecipesServiceError},
        tags::records::TagUuid,
    };

    use crate::test_helpers::{Mocks, TEST_USER_UUID, member_service};

    use super::{super::tests::make_recipe, *};

    fn make_service(recipes: MockRecipesService) -> Service {
        member_service(
            Mocks {
                recipes,
                ..Mocks::default()
            },
            Router::with_path("recipes").post(handler),
        )
    }

    fn payload(ingredient: IngredientUuid, tag: TagUuid) -> Value {
        json!({
            "name": "Pancakes",
            "text": "Mix and fry.",
            "cooking_time": 20,
            "ingredients": [{ "id": ingredient.into_uuid(), "amount": 200 }],
            "tags": [tag.into_uuid()],
        })
    }

    #[tokio::test]
    async fn test_create_recipe_success() -> TestResult {
        let ingredient = IngredientUuid::new();
        let tag = TagUuid::new();

        let mut recipes = MockRecipesService::new();

        recipes
            .expect_create_recipe()
            .once()
            .withf(move |author, new| {
                *author == TEST_USER_UUID
                    && new.name == "Pancakes"
                    && new.image.is_none()
                    && new.ingredients
                        == vec![NewRecipeIngredient {
                            ingredient,
                            amount: 200,
                        }]
                    && new.tags == vec![tag]
            })
            .return_once(|_, new| Ok(make_recipe(new.uuid)));

        recipes.expect_get_recipe().never();
        recipes.expect_list_recipes().never();
        recipes.expect_update_recipe().never();
        recipes.expect_delete_recipe().never();

        let mut res = TestClient::post("http://example.com/recipes")
            .json(&payload(ingredient, tag))
            .send(&make_service(recipes))
            .await;

        let body: RecipeResponse = res.take_json().await?;
        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/recipes/{}", body.uuid)));
        assert_eq!(body.name, "Pancakes");
        assert_eq!(body.ingredients.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_recipe_validation_error_returns_400() -> TestResult {
        let mut recipes = MockRecipesService::new();

        recipes
            .expect_create_recipe()
            .once()
            .return_once(|_, _| {
                Err(RecipesServiceError::Validation(
                    "cooking time must be at least 1 minute".to_string(),
                ))
            });

        let mut res = TestClient::post("http://example.com/recipes")
            .json(&payload(IngredientUuid::new(), TagUuid::new()))
            .send(&make_service(recipes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.take_string()
                .await?
                .contains("cooking time must be at least 1 minute")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_recipe_oversized_numbers_return_400() -> TestResult {
        let mut recipes = MockRecipesService::new();

        recipes
            .expect_create_recipe()
            .once()
            .return_once(|_, new| new.validate().map(|()| make_recipe(new.uuid)));

        let mut body = payload(IngredientUuid::new(), TagUuid::new());

        body["cooking_time"] = json!(3_000_000_000_u32);

        let mut res = TestClient::post("http://example.com/recipes")
            .json(&body)
            .send(&make_service(recipes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(res.take_string().await?.contains("cooking time is too large"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_recipe_unknown_reference_returns_400() -> TestResult {
        let mut recipes = MockRecipesService::new();

        recipes
            .expect_create_recipe()
            .once()
            .return_once(|_, _| Err(RecipesServiceError::InvalidReference));

        let res = TestClient::post("http://example.com/recipes")
            .json(&payload(IngredientUuid::new(), TagUuid::new()))
            .send(&make_service(recipes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_recipe_malformed_body_returns_400() -> TestResult {
        let mut recipes = MockRecipesService::new();

        recipes.expect_create_recipe().never();

        let res = TestClient::post("http://example.com/recipes")
            .json(&json!({ "name": "Pancakes" }))
            .send(&make_service(recipes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
