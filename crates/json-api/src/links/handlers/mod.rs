//! Short Link Handlers

pub(crate) mod get_link;
pub(crate) mod resolve;
