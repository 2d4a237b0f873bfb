//! Short Links
//!
//! Opaque seven-letter tokens mapped one-to-one onto canonical recipe URLs.

pub mod errors;
pub mod links;
pub mod records;
mod repository;
pub mod service;

pub use errors::ShortLinksServiceError;
pub use links::ShortLinkSettings;
pub use service::*;
