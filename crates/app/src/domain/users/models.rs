//! User Models

use crate::domain::users::records::UserRecord;

/// A user as seen by another (possibly anonymous) viewer.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: UserRecord,

    /// Whether the viewer follows this user; always false for anonymous viewers.
    pub is_subscribed: bool,
}
