//! Subscription Models

use crate::domain::{recipes::records::RecipeSummary, users::records::UserUuid};

/// An author the user follows, with a preview of their newest recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribedAuthor {
    pub uuid: UserUuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub recipes_count: u64,
    pub recipes: Vec<RecipeSummary>,
}
