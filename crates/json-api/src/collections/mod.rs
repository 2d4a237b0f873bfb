//! Shopping cart and favorites membership.

mod errors;
mod handlers;

pub(crate) use handlers::*;
