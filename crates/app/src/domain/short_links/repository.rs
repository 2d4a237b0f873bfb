//! Short Links Repository
//!
//! Statements run directly on the pool so each issuance attempt sees rows committed by
//! concurrent issuers.

use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    columns::try_get_timestamp, recipes::records::RecipeUuid,
    short_links::records::ShortLinkRecord,
};

const FIND_SHORT_LINK_BY_LONG_URL_SQL: &str = include_str!("sql/find_short_link_by_long_url.sql");
const FIND_SHORT_LINK_BY_TOKEN_SQL: &str = include_str!("sql/find_short_link_by_token.sql");
const INSERT_SHORT_LINK_SQL: &str = include_str!("sql/insert_short_link.sql");
const RECIPE_EXISTS_SQL: &str = include_str!("sql/recipe_exists.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgShortLinksRepository {
    pool: PgPool,
}

impl PgShortLinksRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_by_long_url(
        &self,
        long_url: &str,
    ) -> Result<Option<ShortLinkRecord>, sqlx::Error> {
        query_as::<Postgres, ShortLinkRecord>(FIND_SHORT_LINK_BY_LONG_URL_SQL)
            .bind(long_url)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<ShortLinkRecord>, sqlx::Error> {
        query_as::<Postgres, ShortLinkRecord>(FIND_SHORT_LINK_BY_TOKEN_SQL)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
    }

    /// `None` when either the token or the long URL is already taken.
    pub(crate) async fn insert(
        &self,
        token: &str,
        long_url: &str,
    ) -> Result<Option<ShortLinkRecord>, sqlx::Error> {
        query_as::<Postgres, ShortLinkRecord>(INSERT_SHORT_LINK_SQL)
            .bind(token)
            .bind(long_url)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn recipe_exists(&self, recipe: RecipeUuid) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(RECIPE_EXISTS_SQL)
            .bind(recipe.into_uuid())
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ShortLinkRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            token: row.try_get("token")?,
            long_url: row.try_get("long_url")?,
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
