//! Ingredient Handlers

pub(crate) mod index;
