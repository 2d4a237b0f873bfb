//! Users

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
mod repository;
pub mod service;

pub use errors::UsersServiceError;
pub use service::*;
