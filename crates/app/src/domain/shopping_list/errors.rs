//! Shopping list service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShoppingListServiceError {
    #[error("shopping cart is empty")]
    EmptyCart,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ShoppingListServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
