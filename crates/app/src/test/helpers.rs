//! Test Helpers

use crate::domain::{
    ingredients::records::IngredientUuid,
    recipes::{
        data::{NewRecipe, NewRecipeIngredient},
        records::RecipeUuid,
    },
    tags::records::TagUuid,
};

/// A valid recipe payload with a cooking time of 10 minutes.
pub(crate) fn new_recipe(
    name: &str,
    ingredients: &[(IngredientUuid, u32)],
    tags: &[TagUuid],
) -> NewRecipe {
    NewRecipe {
        uuid: RecipeUuid::new(),
        name: name.to_string(),
        text: format!("How to make {name}."),
        image: None,
        cooking_time: 10,
        ingredients: ingredients
            .iter()
            .map(|&(ingredient, amount)| NewRecipeIngredient { ingredient, amount })
            .collect(),
        tags: tags.to_vec(),
    }
}
