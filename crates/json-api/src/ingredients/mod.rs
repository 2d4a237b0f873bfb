//! Ingredients

mod handlers;

pub(crate) use handlers::*;
