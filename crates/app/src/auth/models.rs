//! Auth models.

use jiff::Timestamp;

use crate::{auth::ApiToken, domain::users::records::UserUuid, uuids::TypedUuid};

/// API Token UUID
pub type ApiTokenUuid = TypedUuid<ApiTokenRecord>;

/// Stored token metadata. The secret itself is never persisted.
#[derive(Debug, Clone)]
pub struct ApiTokenRecord {
    pub uuid: ApiTokenUuid,
    pub user_uuid: UserUuid,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New API Token Data
#[derive(Debug, Clone)]
pub struct NewApiToken {
    pub uuid: ApiTokenUuid,
    pub user_uuid: UserUuid,
    pub token_hash: String,
}

/// A freshly issued token together with its stored metadata.
#[derive(Debug)]
pub struct IssuedApiToken {
    pub token: ApiToken,
    pub record: ApiTokenRecord,
}
