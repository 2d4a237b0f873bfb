//! Recipe collections: the shopping cart and favorites.
//!
//! Both relations share one membership routine; [`RecipeCollection`] only picks the SQL.

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::CollectionsServiceError;
pub use models::RecipeCollection;
pub use service::*;
