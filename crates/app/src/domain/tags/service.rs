//! Tags service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::tags::{
        data::NewTag, errors::TagsServiceError, records::TagRecord,
        repository::PgTagsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgTagsService {
    db: Db,
    repository: PgTagsRepository,
}

impl PgTagsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTagsRepository::new(),
        }
    }
}

#[async_trait]
impl TagsService for PgTagsService {
    async fn list_tags(&self) -> Result<Vec<TagRecord>, TagsServiceError> {
        let mut tx = self.db.begin().await?;

        let tags = self.repository.list_tags(&mut tx).await?;

        tx.commit().await?;

        Ok(tags)
    }

    async fn create_tag(&self, tag: NewTag) -> Result<TagRecord, TagsServiceError> {
        tag.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_tag(&mut tx, tag).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait TagsService: Send + Sync {
    /// List every tag ordered by name.
    async fn list_tags(&self) -> Result<Vec<TagRecord>, TagsServiceError>;

    /// Create a tag.
    async fn create_tag(&self, tag: NewTag) -> Result<TagRecord, TagsServiceError>;
}
