//! Subscriptions

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::SubscriptionsServiceError;
pub use service::*;
