//! Collection Errors

use salvo::http::StatusError;
use tracing::error;

use larder_app::domain::collections::{CollectionsServiceError, RecipeCollection};

fn label(collection: RecipeCollection) -> &'static str {
    match collection {
        RecipeCollection::ShoppingCart => "the shopping cart",
        RecipeCollection::Favorites => "favorites",
    }
}

pub(crate) fn into_status_error(
    error: CollectionsServiceError,
    collection: RecipeCollection,
) -> StatusError {
    match error {
        CollectionsServiceError::AlreadyExists => {
            StatusError::conflict().brief(format!("Recipe is already in {}", label(collection)))
        }
        CollectionsServiceError::NotFound => {
            StatusError::not_found().brief(format!("Recipe not found in {}", label(collection)))
        }
        CollectionsServiceError::Sql(source) => {
            error!(%collection, "collection storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
