//! Shopping List

mod handlers;

pub(crate) use handlers::*;
