//! Shopping List

pub mod errors;
pub mod report;
mod repository;
pub mod service;

pub use errors::ShoppingListServiceError;
pub use report::{ShoppingList, ShoppingListItem};
pub use service::*;
