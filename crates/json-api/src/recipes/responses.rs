//! Recipe Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_app::domain::recipes::{
    models::{Recipe, RecipeAuthor, RecipeIngredientLine},
    records::RecipeSummary,
};

use crate::tags::TagResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeAuthorResponse {
    pub uuid: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,

    /// Whether the viewer follows this author
    pub is_subscribed: bool,
}

impl From<RecipeAuthor> for RecipeAuthorResponse {
    fn from(author: RecipeAuthor) -> Self {
        Self {
            uuid: author.uuid.into(),
            email: author.email,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed: author.is_subscribed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeIngredientResponse {
    /// Ingredient UUID
    pub uuid: Uuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

impl From<RecipeIngredientLine> for RecipeIngredientResponse {
    fn from(line: RecipeIngredientLine) -> Self {
        Self {
            uuid: line.ingredient_uuid.into(),
            name: line.name,
            measurement_unit: line.measurement_unit,
            amount: line.amount,
        }
    }
}

/// Full recipe as seen by the viewer.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeResponse {
    pub uuid: Uuid,
    pub author: RecipeAuthorResponse,
    pub name: String,
    pub text: String,
    pub image: Option<String>,

    /// Cooking time in minutes
    pub cooking_time: u32,
    pub tags: Vec<TagResponse>,
    pub ingredients: Vec<RecipeIngredientResponse>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,

    /// The date and time the recipe was published
    pub created_at: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            uuid: recipe.uuid.into(),
            author: recipe.author.into(),
            name: recipe.name,
            text: recipe.text,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
            tags: recipe.tags.into_iter().map(Into::into).collect(),
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            is_favorited: recipe.is_favorited,
            is_in_shopping_cart: recipe.is_in_shopping_cart,
            created_at: recipe.created_at.to_string(),
        }
    }
}

/// Short form used by collections and subscriptions.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeSummaryResponse {
    pub uuid: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: u32,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            uuid: summary.uuid.into(),
            name: summary.name,
            image: summary.image,
            cooking_time: summary.cooking_time,
        }
    }
}
