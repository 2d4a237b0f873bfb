//! Shopping Cart Handlers

pub(crate) mod add;
pub(crate) mod remove;
