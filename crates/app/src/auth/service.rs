//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::warn;

use crate::{
    auth::{
        ApiToken, ApiTokenUuid, AuthServiceError, IssuedApiToken, NewApiToken, hash_token,
        is_well_formed, repository::PgAuthRepository,
    },
    domain::users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::UnknownUser`] when the user does not exist.
    pub async fn issue_api_token(
        &self,
        user: UserUuid,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token = ApiToken::generate();

        let record = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: ApiTokenUuid::new(),
                user_uuid: user,
                token_hash: token.hash(),
            })
            .await?;

        Ok(IssuedApiToken { token, record })
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token: ApiTokenUuid) -> Result<bool, AuthServiceError> {
        Ok(self.repository.revoke_api_token(token).await?.is_some())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        if !is_well_formed(bearer_token) {
            return Err(AuthServiceError::NotFound);
        }

        let token = self
            .repository
            .find_active_api_token_by_hash(&hash_token(bearer_token))
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        // Auth success should not depend on this write.
        if let Err(source) = self.repository.touch_api_token_last_used(token.uuid).await {
            warn!(token_uuid = %token.uuid, "failed to record token use: {source}");
        }

        Ok(token.user_uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the user that owns it.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}
