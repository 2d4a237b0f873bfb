//! Ingredient Data

use crate::domain::ingredients::{errors::IngredientsServiceError, records::IngredientUuid};

pub const INGREDIENT_NAME_MAX_LENGTH: usize = 128;
pub const MEASUREMENT_UNIT_MAX_LENGTH: usize = 64;

/// New Ingredient Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewIngredient {
    pub uuid: IngredientUuid,
    pub name: String,
    pub measurement_unit: String,
}

impl NewIngredient {
    /// # Errors
    ///
    /// Returns [`IngredientsServiceError::Validation`] when a field is blank or too long.
    pub fn validate(&self) -> Result<(), IngredientsServiceError> {
        let name_len = self.name.trim().chars().count();

        if name_len == 0 || self.name.chars().count() > INGREDIENT_NAME_MAX_LENGTH {
            return Err(IngredientsServiceError::Validation(format!(
                "ingredient name {:?} must be between 1 and 128 characters",
                self.name
            )));
        }

        let unit_len = self.measurement_unit.trim().chars().count();

        if unit_len == 0 || self.measurement_unit.chars().count() > MEASUREMENT_UNIT_MAX_LENGTH {
            return Err(IngredientsServiceError::Validation(format!(
                "measurement unit of {:?} must be between 1 and 64 characters",
                self.name
            )));
        }

        Ok(())
    }
}

/// Build a `LIKE` pattern matching values that start with `prefix`.
///
/// `%`, `_` and `\` in the input are matched literally.
pub(crate) fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);

    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    pattern
}
