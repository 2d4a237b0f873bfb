//! Collections service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        collections::{
            errors::CollectionsServiceError, models::RecipeCollection,
            repository::PgCollectionsRepository,
        },
        recipes::records::{RecipeSummary, RecipeUuid},
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCollectionsService {
    db: Db,
    repository: PgCollectionsRepository,
}

impl PgCollectionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCollectionsRepository::new(),
        }
    }
}

#[async_trait]
impl CollectionsService for PgCollectionsService {
    async fn add(
        &self,
        collection: RecipeCollection,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, CollectionsServiceError> {
        let mut tx = self.db.begin().await?;

        let summary = self
            .repository
            .add_entry(&mut tx, collection, user, recipe)
            .await?
            .ok_or(CollectionsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(summary)
    }

    async fn remove(
        &self,
        collection: RecipeCollection,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), CollectionsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .remove_entry(&mut tx, collection, user, recipe)
            .await?;

        if rows_affected == 0 {
            return Err(CollectionsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CollectionsService: Send + Sync {
    /// Put a recipe into one of the user's collections.
    async fn add(
        &self,
        collection: RecipeCollection,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<RecipeSummary, CollectionsServiceError>;

    /// Take a recipe out of one of the user's collections.
    async fn remove(
        &self,
        collection: RecipeCollection,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), CollectionsServiceError>;
}
