//! Tags

mod handlers;

pub(crate) use handlers::*;
pub(crate) use handlers::index::TagResponse;
