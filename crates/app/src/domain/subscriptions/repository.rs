//! Subscriptions Repository

use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    columns::try_get_u64,
    recipes::records::RecipeSummary,
    subscriptions::models::SubscribedAuthor,
    users::records::UserUuid,
};

const CREATE_SUBSCRIPTION_SQL: &str = include_str!("sql/create_subscription.sql");
const DELETE_SUBSCRIPTION_SQL: &str = include_str!("sql/delete_subscription.sql");
const LIST_SUBSCRIBED_AUTHORS_SQL: &str = include_str!("sql/list_subscribed_authors.sql");
const LIST_AUTHOR_RECIPES_SQL: &str = include_str!("sql/list_author_recipes.sql");

struct AuthorRecipeRow {
    author_uuid: Uuid,
    recipe: RecipeSummary,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubscriptionsRepository;

impl PgSubscriptionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_subscription(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        author: UserUuid,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_SUBSCRIPTION_SQL)
            .bind(user.into_uuid())
            .bind(author.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_subscription(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        author: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SUBSCRIPTION_SQL)
            .bind(user.into_uuid())
            .bind(author.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Authors `user` follows, optionally narrowed to one author, with up to
    /// `recipes_limit` newest recipes each.
    #[tracing::instrument(
        name = "subscriptions.repository.list_subscribed_authors",
        skip(self, tx),
        fields(author_count = tracing::field::Empty),
        err
    )]
    pub(crate) async fn list_subscribed_authors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        only_author: Option<UserUuid>,
        recipes_limit: Option<u32>,
    ) -> Result<Vec<SubscribedAuthor>, sqlx::Error> {
        let mut authors = query_as::<Postgres, SubscribedAuthor>(LIST_SUBSCRIBED_AUTHORS_SQL)
            .bind(user.into_uuid())
            .bind(only_author.map(UserUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await?;

        tracing::Span::current().record("author_count", authors.len());

        if authors.is_empty() {
            return Ok(authors);
        }

        let author_uuids: Vec<Uuid> = authors.iter().map(|a| a.uuid.into_uuid()).collect();

        let rows = query_as::<Postgres, AuthorRecipeRow>(LIST_AUTHOR_RECIPES_SQL)
            .bind(&author_uuids)
            .bind(recipes_limit.map(i64::from))
            .fetch_all(&mut **tx)
            .await?;

        let mut recipes: FxHashMap<Uuid, Vec<RecipeSummary>> = FxHashMap::default();

        for row in rows {
            recipes.entry(row.author_uuid).or_default().push(row.recipe);
        }

        for author in &mut authors {
            author.recipes = recipes.remove(&author.uuid.into_uuid()).unwrap_or_default();
        }

        Ok(authors)
    }
}

impl<'r> FromRow<'r, PgRow> for SubscribedAuthor {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            username: row.try_get("username")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            recipes_count: try_get_u64(row, "recipes_count")?,
            recipes: Vec::new(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AuthorRecipeRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            author_uuid: row.try_get("author_uuid")?,
            recipe: RecipeSummary::from_row(row)?,
        })
    }
}
