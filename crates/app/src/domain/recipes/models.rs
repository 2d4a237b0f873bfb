//! Recipe Models

use jiff::Timestamp;

use crate::domain::{
    ingredients::records::IngredientUuid, recipes::records::RecipeUuid, tags::records::TagRecord,
    users::records::UserUuid,
};

/// Recipe author as seen by a particular viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeAuthor {
    pub uuid: UserUuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredientLine {
    pub ingredient_uuid: IngredientUuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

/// Recipe detail view.
///
/// `is_favorited`, `is_in_shopping_cart` and the author's `is_subscribed` are relative to
/// the viewer and always `false` for anonymous viewers.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub uuid: RecipeUuid,
    pub author: RecipeAuthor,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: u32,
    pub tags: Vec<TagRecord>,
    pub ingredients: Vec<RecipeIngredientLine>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub created_at: Timestamp,
}
