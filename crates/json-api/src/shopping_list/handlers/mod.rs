//! Shopping List Handlers

pub(crate) mod download;
