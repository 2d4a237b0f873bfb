//! Recipe Errors

use salvo::http::StatusError;
use tracing::error;

use larder_app::domain::recipes::RecipesServiceError;

pub(crate) fn into_status_error(error: RecipesServiceError) -> StatusError {
    match error {
        RecipesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Recipe already exists")
        }
        RecipesServiceError::NotFound => StatusError::not_found().brief("Recipe not found"),
        RecipesServiceError::Forbidden => {
            StatusError::forbidden().brief("Only the author may change this recipe")
        }
        RecipesServiceError::Validation(message) => StatusError::bad_request().brief(message),
        RecipesServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown ingredient or tag")
        }
        RecipesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid recipe payload")
        }
        RecipesServiceError::Sql(source) => {
            error!("recipe storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
