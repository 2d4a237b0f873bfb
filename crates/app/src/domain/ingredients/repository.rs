//! Ingredients Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ingredients::{
    data::{NewIngredient, like_prefix_pattern},
    records::{IngredientRecord, IngredientUuid},
};

const CREATE_INGREDIENT_SQL: &str = include_str!("sql/create_ingredient.sql");
const IMPORT_INGREDIENTS_SQL: &str = include_str!("sql/import_ingredients.sql");
const LIST_INGREDIENTS_SQL: &str = include_str!("sql/list_ingredients.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgIngredientsRepository;

impl PgIngredientsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_ingredient(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ingredient: NewIngredient,
    ) -> Result<IngredientRecord, sqlx::Error> {
        query_as::<Postgres, IngredientRecord>(CREATE_INGREDIENT_SQL)
            .bind(ingredient.uuid.into_uuid())
            .bind(ingredient.name)
            .bind(ingredient.measurement_unit)
            .fetch_one(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "ingredients.repository.import_ingredients",
        skip(self, tx, ingredients),
        fields(fixture_count = ingredients.len()),
        err
    )]
    pub(crate) async fn import_ingredients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ingredients: Vec<NewIngredient>,
    ) -> Result<u64, sqlx::Error> {
        if ingredients.is_empty() {
            return Ok(0);
        }

        let mut uuids: Vec<Uuid> = Vec::with_capacity(ingredients.len());
        let mut names: Vec<String> = Vec::with_capacity(ingredients.len());
        let mut units: Vec<String> = Vec::with_capacity(ingredients.len());

        for ingredient in ingredients {
            uuids.push(ingredient.uuid.into_uuid());
            names.push(ingredient.name);
            units.push(ingredient.measurement_unit);
        }

        let inserted = query(IMPORT_INGREDIENTS_SQL)
            .bind(&uuids)
            .bind(&names)
            .bind(&units)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        debug!(inserted, "imported ingredients");

        Ok(inserted)
    }

    pub(crate) async fn list_ingredients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name_prefix: Option<&str>,
    ) -> Result<Vec<IngredientRecord>, sqlx::Error> {
        query_as::<Postgres, IngredientRecord>(LIST_INGREDIENTS_SQL)
            .bind(name_prefix.map(like_prefix_pattern))
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for IngredientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: IngredientUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            measurement_unit: row.try_get("measurement_unit")?,
        })
    }
}
