//! Short links service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::domain::{
    recipes::records::RecipeUuid,
    short_links::{
        errors::ShortLinksServiceError,
        links::{LONG_URL_MAX_LENGTH, ShortLinkSettings, generate_token, is_well_formed_token},
        records::{ShortLink, ShortLinkRecord},
        repository::PgShortLinksRepository,
    },
};

/// Upper bound on insert attempts for one issuance.
pub const MAX_ISSUE_ATTEMPTS: usize = 5;

/// Source of candidate tokens.
pub type TokenSource = fn() -> String;

#[derive(Debug, Clone)]
pub struct PgShortLinksService {
    repository: PgShortLinksRepository,
    settings: ShortLinkSettings,
    token_source: TokenSource,
}

impl PgShortLinksService {
    #[must_use]
    pub fn new(pool: PgPool, settings: ShortLinkSettings) -> Self {
        Self {
            repository: PgShortLinksRepository::new(pool),
            settings,
            token_source: generate_token,
        }
    }

    /// Replace the token generator.
    #[must_use]
    pub fn with_token_source(mut self, token_source: TokenSource) -> Self {
        self.token_source = token_source;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &ShortLinkSettings {
        &self.settings
    }

    fn to_short_link(&self, record: ShortLinkRecord) -> ShortLink {
        ShortLink {
            short_url: self.settings.short_url(&record.token),
            token: record.token,
            long_url: record.long_url,
        }
    }
}

#[async_trait]
impl ShortLinksService for PgShortLinksService {
    #[tracing::instrument(
        name = "short_links.service.issue",
        skip(self),
        fields(attempt = tracing::field::Empty),
        err
    )]
    async fn issue(&self, long_url: String) -> Result<ShortLink, ShortLinksServiceError> {
        if long_url.is_empty() || long_url.len() > LONG_URL_MAX_LENGTH {
            return Err(ShortLinksServiceError::Validation(format!(
                "long url must be between 1 and {LONG_URL_MAX_LENGTH} bytes"
            )));
        }

        for attempt in 1..=MAX_ISSUE_ATTEMPTS {
            tracing::Span::current().record("attempt", attempt);

            if let Some(existing) = self.repository.find_by_long_url(&long_url).await? {
                return Ok(self.to_short_link(existing));
            }

            let token = (self.token_source)();

            if let Some(created) = self.repository.insert(&token, &long_url).await? {
                debug!(attempt, "issued short link");

                return Ok(self.to_short_link(created));
            }

            debug!(attempt, "token or long url taken, retrying");
        }

        warn!(
            attempts = MAX_ISSUE_ATTEMPTS,
            "gave up issuing short link after repeated collisions"
        );

        Err(ShortLinksServiceError::ResourceExhausted {
            attempts: MAX_ISSUE_ATTEMPTS,
        })
    }

    async fn issue_for_recipe(
        &self,
        recipe: RecipeUuid,
    ) -> Result<ShortLink, ShortLinksServiceError> {
        if !self.repository.recipe_exists(recipe).await? {
            return Err(ShortLinksServiceError::NotFound);
        }

        self.issue(self.settings.recipe_long_url(recipe)).await
    }

    async fn resolve(&self, token: String) -> Result<String, ShortLinksServiceError> {
        if !is_well_formed_token(&token) {
            return Err(ShortLinksServiceError::NotFound);
        }

        let record = self
            .repository
            .find_by_token(&token)
            .await?
            .ok_or(ShortLinksServiceError::NotFound)?;

        Ok(self.settings.public_path(&record.long_url))
    }
}

#[automock]
#[async_trait]
pub trait ShortLinksService: Send + Sync {
    /// Return the short link for `long_url`, minting one on first request.
    async fn issue(&self, long_url: String) -> Result<ShortLink, ShortLinksServiceError>;

    /// Return the short link for a recipe's canonical URL.
    async fn issue_for_recipe(
        &self,
        recipe: RecipeUuid,
    ) -> Result<ShortLink, ShortLinksServiceError>;

    /// Map a token back to the public path it stands for.
    async fn resolve(&self, token: String) -> Result<String, ShortLinksServiceError>;
}
