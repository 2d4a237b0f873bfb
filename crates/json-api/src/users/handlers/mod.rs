//! User Handlers

pub(crate) mod me;
pub(crate) mod profile;
pub(crate) mod subscribe;
pub(crate) mod subscriptions;
pub(crate) mod unsubscribe;
