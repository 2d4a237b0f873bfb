//! Recipe Data

use rustc_hash::FxHashSet;

use crate::domain::{
    ingredients::records::IngredientUuid,
    recipes::{errors::RecipesServiceError, records::RecipeUuid},
    tags::records::TagUuid,
    users::records::UserUuid,
};

pub const RECIPE_NAME_MAX_LENGTH: usize = 256;

/// Largest cooking time the `INTEGER` column holds.
pub const RECIPE_COOKING_TIME_MAX: u32 = i32::MAX.unsigned_abs();

/// Largest ingredient amount the `INTEGER` column holds.
pub const INGREDIENT_AMOUNT_MAX: u32 = i32::MAX.unsigned_abs();

/// New Recipe Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub uuid: RecipeUuid,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: u32,
    pub ingredients: Vec<NewRecipeIngredient>,
    pub tags: Vec<TagUuid>,
}

/// Ingredient line of a new recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRecipeIngredient {
    pub ingredient: IngredientUuid,
    pub amount: u32,
}

impl NewRecipe {
    /// Reject malformed recipes before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`RecipesServiceError::Validation`] naming the first broken rule.
    pub fn validate(&self) -> Result<(), RecipesServiceError> {
        let name_len = self.name.trim().chars().count();

        if name_len == 0 || self.name.chars().count() > RECIPE_NAME_MAX_LENGTH {
            return Err(invalid("name must be between 1 and 256 characters"));
        }

        if self.text.trim().is_empty() {
            return Err(invalid("text must not be empty"));
        }

        if self.cooking_time < 1 {
            return Err(invalid("cooking time must be at least 1 minute"));
        }

        if self.cooking_time > RECIPE_COOKING_TIME_MAX {
            return Err(invalid("cooking time is too large"));
        }

        if self.ingredients.is_empty() {
            return Err(invalid("at least one ingredient is required"));
        }

        let mut seen_ingredients = FxHashSet::default();

        for line in &self.ingredients {
            if line.amount < 1 {
                return Err(invalid("ingredient amount must be at least 1"));
            }

            if line.amount > INGREDIENT_AMOUNT_MAX {
                return Err(invalid("ingredient amount is too large"));
            }

            if !seen_ingredients.insert(line.ingredient) {
                return Err(invalid("ingredients must not repeat"));
            }
        }

        if self.tags.is_empty() {
            return Err(invalid("at least one tag is required"));
        }

        let mut seen_tags = FxHashSet::default();

        if !self.tags.iter().all(|tag| seen_tags.insert(*tag)) {
            return Err(invalid("tags must not repeat"));
        }

        Ok(())
    }
}

/// Recipe list filter.
///
/// `is_favorited` and `is_in_shopping_cart` only narrow the list for a signed-in viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub author: Option<UserUuid>,
    /// Tag slugs; a recipe matches when it carries any of them.
    pub tags: Vec<String>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

fn invalid(message: &str) -> RecipesServiceError {
    RecipesServiceError::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_recipe() -> NewRecipe {
        NewRecipe {
            uuid: RecipeUuid::new(),
            name: "Pancakes".to_string(),
            text: "Mix and fry.".to_string(),
            image: None,
            cooking_time: 20,
            ingredients: vec![NewRecipeIngredient {
                ingredient: IngredientUuid::new(),
                amount: 200,
            }],
            tags: vec![TagUuid::new()],
        }
    }

    fn assert_invalid(recipe: &NewRecipe) {
        assert!(
            matches!(recipe.validate(), Err(RecipesServiceError::Validation(_))),
            "expected validation failure for {recipe:?}"
        );
    }

    #[test]
    fn valid_recipe_passes() {
        assert!(new_recipe().validate().is_ok());
    }

    #[test]
    fn blank_name_and_text_are_rejected() {
        assert_invalid(&NewRecipe {
            name: "   ".to_string(),
            ..new_recipe()
        });
        assert_invalid(&NewRecipe {
            name: "x".repeat(RECIPE_NAME_MAX_LENGTH + 1),
            ..new_recipe()
        });
        assert_invalid(&NewRecipe {
            text: String::new(),
            ..new_recipe()
        });
    }

    #[test]
    fn zero_cooking_time_is_rejected() {
        assert_invalid(&NewRecipe {
            cooking_time: 0,
            ..new_recipe()
        });
    }

    #[test]
    fn values_beyond_the_column_range_are_rejected() {
        assert_invalid(&NewRecipe {
            cooking_time: 3_000_000_000,
            ..new_recipe()
        });
        assert_invalid(&NewRecipe {
            ingredients: vec![NewRecipeIngredient {
                ingredient: IngredientUuid::new(),
                amount: 3_000_000_000,
            }],
            ..new_recipe()
        });

        let largest = NewRecipe {
            cooking_time: RECIPE_COOKING_TIME_MAX,
            ingredients: vec![NewRecipeIngredient {
                ingredient: IngredientUuid::new(),
                amount: INGREDIENT_AMOUNT_MAX,
            }],
            ..new_recipe()
        };

        assert!(largest.validate().is_ok());
    }

    #[test]
    fn ingredient_rules_are_enforced() {
        assert_invalid(&NewRecipe {
            ingredients: Vec::new(),
            ..new_recipe()
        });

        let ingredient = IngredientUuid::new();

        assert_invalid(&NewRecipe {
            ingredients: vec![NewRecipeIngredient {
                ingredient,
                amount: 0,
            }],
            ..new_recipe()
        });
        assert_invalid(&NewRecipe {
            ingredients: vec![
                NewRecipeIngredient {
                    ingredient,
                    amount: 1,
                },
                NewRecipeIngredient {
                    ingredient,
                    amount: 2,
                },
            ],
            ..new_recipe()
        });
    }

    #[test]
    fn tag_rules_are_enforced() {
        assert_invalid(&NewRecipe {
            tags: Vec::new(),
            ..new_recipe()
        });

        let tag = TagUuid::new();

        assert_invalid(&NewRecipe {
            tags: vec![tag, tag],
            ..new_recipe()
        });
    }
}
