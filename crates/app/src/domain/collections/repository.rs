//! Collections Repository

use sqlx::{Postgres, Transaction, query, query_as};
use tracing::debug;

use crate::domain::{
    collections::models::RecipeCollection,
    recipes::records::{RecipeSummary, RecipeUuid},
    users::records::UserUuid,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCollectionsRepository;

impl PgCollectionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert the entry if the recipe exists. `None` means there is no such recipe.
    #[tracing::instrument(
        name = "collections.repository.add_entry",
        skip(self, tx),
        fields(collection = %collection),
        err
    )]
    pub(crate) async fn add_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        collection: RecipeCollection,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<Option<RecipeSummary>, sqlx::Error> {
        let summary = query_as::<Postgres, RecipeSummary>(collection.add_sql())
            .bind(user.into_uuid())
            .bind(recipe.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        debug!(added = summary.is_some(), "added collection entry");

        Ok(summary)
    }

    pub(crate) async fn remove_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        collection: RecipeCollection,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(collection.remove_sql())
            .bind(user.into_uuid())
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    #[cfg(test)]
    pub(crate) async fn count_entries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        collection: RecipeCollection,
        user: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<Postgres, i64>(collection.count_sql())
            .bind(user.into_uuid())
            .bind(recipe.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}
