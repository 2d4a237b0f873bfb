//! Tag Handlers

pub(crate) mod index;
