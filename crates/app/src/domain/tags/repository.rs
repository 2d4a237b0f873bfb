//! Tags Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use tracing::debug;

use crate::domain::tags::{
    data::NewTag,
    records::{TagRecord, TagUuid},
};

const CREATE_TAG_SQL: &str = include_str!("sql/create_tag.sql");
const LIST_TAGS_SQL: &str = include_str!("sql/list_tags.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTagsRepository;

impl PgTagsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "tags.repository.create_tag",
        skip(self, tx, tag),
        fields(slug = %tag.slug),
        err
    )]
    pub(crate) async fn create_tag(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tag: NewTag,
    ) -> Result<TagRecord, sqlx::Error> {
        let created = query_as::<Postgres, TagRecord>(CREATE_TAG_SQL)
            .bind(tag.uuid.into_uuid())
            .bind(tag.name)
            .bind(tag.slug)
            .fetch_one(&mut **tx)
            .await?;

        debug!(tag_uuid = %created.uuid, "created tag");

        Ok(created)
    }

    pub(crate) async fn list_tags(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<TagRecord>, sqlx::Error> {
        query_as::<Postgres, TagRecord>(LIST_TAGS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for TagRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: TagUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
        })
    }
}
