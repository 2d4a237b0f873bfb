//! Ingredient fixture import.
//!
//! Fixtures are JSON arrays of `{"name": "...", "measurement_unit": "..."}` objects.

use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::ingredients::{data::NewIngredient, records::IngredientUuid};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read fixture file")]
    Io(#[from] io::Error),

    #[error("malformed ingredient fixture")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct IngredientFixture {
    name: String,
    measurement_unit: String,
}

/// Parse a fixture document into ingredients with fresh UUIDs.
///
/// # Errors
///
/// Returns [`ImportError::Json`] when the document is not a fixture array.
pub fn parse_ingredients(json: &str) -> Result<Vec<NewIngredient>, ImportError> {
    let fixtures: Vec<IngredientFixture> = serde_json::from_str(json)?;

    Ok(fixtures
        .into_iter()
        .map(|fixture| NewIngredient {
            uuid: IngredientUuid::new(),
            name: fixture.name.trim().to_string(),
            measurement_unit: fixture.measurement_unit.trim().to_string(),
        })
        .collect())
}

/// Read and parse a fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_ingredients(path: &Path) -> Result<Vec<NewIngredient>, ImportError> {
    parse_ingredients(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_fixture_array() -> TestResult {
        let ingredients = parse_ingredients(
            r#"[
                {"name": "Flour", "measurement_unit": "g"},
                {"name": " Egg ", "measurement_unit": "pcs"}
            ]"#,
        )?;

        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "Flour");
        assert_eq!(ingredients[1].name, "Egg");
        assert_eq!(ingredients[1].measurement_unit, "pcs");
        assert_ne!(ingredients[0].uuid, ingredients[1].uuid);

        Ok(())
    }

    #[test]
    fn rejects_objects_missing_a_unit() {
        let result = parse_ingredients(r#"[{"name": "Salt"}]"#);

        assert!(matches!(result, Err(ImportError::Json(_))));
    }

    #[test]
    fn reads_fixture_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;

        write!(file, r#"[{{"name": "Milk", "measurement_unit": "ml"}}]"#)?;

        let ingredients = read_ingredients(file.path())?;

        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].measurement_unit, "ml");

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_ingredients(Path::new("/nonexistent/ingredients.json"));

        assert!(matches!(result, Err(ImportError::Io(_))));
    }
}
