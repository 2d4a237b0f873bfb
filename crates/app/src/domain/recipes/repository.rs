//! Recipes Repository

use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::{
        columns::{to_i32, try_get_timestamp, try_get_u32},
        ingredients::records::IngredientUuid,
        recipes::{
            data::{NewRecipe, RecipeFilter},
            models::{Recipe, RecipeAuthor, RecipeIngredientLine},
            records::{RecipeSummary, RecipeUuid},
        },
        tags::records::TagRecord,
        users::records::UserUuid,
    },
    uuids::raw_uuids,
};

const CREATE_RECIPE_SQL: &str = include_str!("sql/create_recipe.sql");
const CREATE_RECIPE_INGREDIENTS_SQL: &str = include_str!("sql/create_recipe_ingredients.sql");
const CREATE_RECIPE_TAGS_SQL: &str = include_str!("sql/create_recipe_tags.sql");
const GET_RECIPE_SQL: &str = include_str!("sql/get_recipe.sql");
const LIST_RECIPES_SQL: &str = include_str!("sql/list_recipes.sql");
const LIST_RECIPE_INGREDIENTS_SQL: &str = include_str!("sql/list_recipe_ingredients.sql");
const LIST_RECIPE_TAGS_SQL: &str = include_str!("sql/list_recipe_tags.sql");
const LOCK_RECIPE_AUTHOR_SQL: &str = include_str!("sql/lock_recipe_author.sql");
const DELETE_RECIPE_SQL: &str = include_str!("sql/delete_recipe.sql");
const UPDATE_RECIPE_SQL: &str = include_str!("sql/update_recipe.sql");
const DELETE_RECIPE_INGREDIENTS_SQL: &str = include_str!("sql/delete_recipe_ingredients.sql");
const DELETE_RECIPE_TAGS_SQL: &str = include_str!("sql/delete_recipe_tags.sql");

/// Recipe row without its ingredient lines and tags.
struct RecipeRow(Recipe);

struct RecipeIngredientRow {
    recipe_uuid: Uuid,
    line: RecipeIngredientLine,
}

struct RecipeTagRow {
    recipe_uuid: Uuid,
    tag: TagRecord,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRecipesRepository;

impl PgRecipesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "recipes.repository.create_recipe",
        skip(self, tx, recipe),
        fields(
            recipe_uuid = %recipe.uuid,
            ingredient_count = recipe.ingredients.len(),
            tag_count = recipe.tags.len()
        ),
        err
    )]
    pub(crate) async fn create_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        author: UserUuid,
        recipe: NewRecipe,
    ) -> Result<RecipeUuid, sqlx::Error> {
        query(CREATE_RECIPE_SQL)
            .bind(recipe.uuid.into_uuid())
            .bind(author.into_uuid())
            .bind(&recipe.name)
            .bind(&recipe.text)
            .bind(recipe.image.as_deref())
            .bind(to_i32(recipe.cooking_time, "cooking_time")?)
            .execute(&mut **tx)
            .await?;

        self.insert_lines(tx, recipe.uuid, &recipe).await?;

        debug!("created recipe");

        Ok(recipe.uuid)
    }

    /// Overwrite the recipe's columns and replace its ingredient lines and tags.
    ///
    /// A `None` image keeps the stored one.
    #[tracing::instrument(
        name = "recipes.repository.update_recipe",
        skip(self, tx, update),
        fields(
            recipe_uuid = %recipe,
            ingredient_count = update.ingredients.len(),
            tag_count = update.tags.len()
        ),
        err
    )]
    pub(crate) async fn update_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        update: &NewRecipe,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_RECIPE_SQL)
            .bind(recipe.into_uuid())
            .bind(&update.name)
            .bind(&update.text)
            .bind(update.image.as_deref())
            .bind(to_i32(update.cooking_time, "cooking_time")?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Ok(0);
        }

        query(DELETE_RECIPE_INGREDIENTS_SQL)
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?;

        query(DELETE_RECIPE_TAGS_SQL)
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?;

        self.insert_lines(tx, recipe, update).await?;

        debug!("updated recipe");

        Ok(rows_affected)
    }

    async fn insert_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
        data: &NewRecipe,
    ) -> Result<(), sqlx::Error> {
        let ingredient_uuids: Vec<Uuid> = data
            .ingredients
            .iter()
            .map(|line| line.ingredient.into_uuid())
            .collect();

        let amounts = data
            .ingredients
            .iter()
            .map(|line| to_i32(line.amount, "amount"))
            .collect::<Result<Vec<i32>, _>>()?;

        query(CREATE_RECIPE_INGREDIENTS_SQL)
            .bind(recipe.into_uuid())
            .bind(&ingredient_uuids)
            .bind(&amounts)
            .execute(&mut **tx)
            .await?;

        query(CREATE_RECIPE_TAGS_SQL)
            .bind(recipe.into_uuid())
            .bind(raw_uuids(&data.tags))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn get_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: Option<UserUuid>,
        recipe: RecipeUuid,
    ) -> Result<Recipe, sqlx::Error> {
        let row = query_as::<Postgres, RecipeRow>(GET_RECIPE_SQL)
            .bind(recipe.into_uuid())
            .bind(viewer.map(UserUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await?;

        let mut recipes = self.hydrate(tx, vec![row]).await?;

        recipes.pop().ok_or(sqlx::Error::RowNotFound)
    }

    #[tracing::instrument(
        name = "recipes.repository.list_recipes",
        skip(self, tx, filter),
        fields(recipe_count = tracing::field::Empty),
        err
    )]
    pub(crate) async fn list_recipes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        viewer: Option<UserUuid>,
        filter: &RecipeFilter,
    ) -> Result<Vec<Recipe>, sqlx::Error> {
        let signed_in = viewer.is_some();

        let rows = query_as::<Postgres, RecipeRow>(LIST_RECIPES_SQL)
            .bind(viewer.map(UserUuid::into_uuid))
            .bind(filter.author.map(UserUuid::into_uuid))
            .bind(&filter.tags)
            .bind(signed_in && filter.is_favorited)
            .bind(signed_in && filter.is_in_shopping_cart)
            .fetch_all(&mut **tx)
            .await?;

        tracing::Span::current().record("recipe_count", rows.len());

        self.hydrate(tx, rows).await
    }

    /// Lock the recipe row and return its author.
    pub(crate) async fn lock_recipe_author(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<UserUuid, sqlx::Error> {
        let author: Uuid = query_scalar(LOCK_RECIPE_AUTHOR_SQL)
            .bind(recipe.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(UserUuid::from_uuid(author))
    }

    pub(crate) async fn delete_recipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipe: RecipeUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_RECIPE_SQL)
            .bind(recipe.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Attach ingredient lines and tags to bare recipe rows, preserving row order.
    async fn hydrate(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        rows: Vec<RecipeRow>,
    ) -> Result<Vec<Recipe>, sqlx::Error> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_uuids: Vec<Uuid> = rows.iter().map(|row| row.0.uuid.into_uuid()).collect();

        let ingredient_rows = query_as::<Postgres, RecipeIngredientRow>(LIST_RECIPE_INGREDIENTS_SQL)
            .bind(&recipe_uuids)
            .fetch_all(&mut **tx)
            .await?;

        let tag_rows = query_as::<Postgres, RecipeTagRow>(LIST_RECIPE_TAGS_SQL)
            .bind(&recipe_uuids)
            .fetch_all(&mut **tx)
            .await?;

        let mut lines: FxHashMap<Uuid, Vec<RecipeIngredientLine>> = FxHashMap::default();

        for row in ingredient_rows {
            lines.entry(row.recipe_uuid).or_default().push(row.line);
        }

        let mut tags: FxHashMap<Uuid, Vec<TagRecord>> = FxHashMap::default();

        for row in tag_rows {
            tags.entry(row.recipe_uuid).or_default().push(row.tag);
        }

        Ok(rows
            .into_iter()
            .map(|RecipeRow(mut recipe)| {
                let uuid = recipe.uuid.into_uuid();

                recipe.ingredients = lines.remove(&uuid).unwrap_or_default();
                recipe.tags = tags.remove(&uuid).unwrap_or_default();

                recipe
            })
            .collect())
    }
}

impl<'r> FromRow<'r, PgRow> for RecipeRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(Recipe {
            uuid: RecipeUuid::from_uuid(row.try_get("uuid")?),
            author: RecipeAuthor {
                uuid: UserUuid::from_uuid(row.try_get("author_uuid")?),
                email: row.try_get("author_email")?,
                username: row.try_get("author_username")?,
                first_name: row.try_get("author_first_name")?,
                last_name: row.try_get("author_last_name")?,
                is_subscribed: row.try_get("is_subscribed")?,
            },
            name: row.try_get("name")?,
            text: row.try_get("text")?,
            image: row.try_get("image")?,
            cooking_time: try_get_u32(row, "cooking_time")?,
            tags: Vec::new(),
            ingredients: Vec::new(),
            is_favorited: row.try_get("is_favorited")?,
            is_in_shopping_cart: row.try_get("is_in_shopping_cart")?,
            created_at: try_get_timestamp(row, "created_at")?,
        }))
    }
}

impl<'r> FromRow<'r, PgRow> for RecipeIngredientRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            recipe_uuid: row.try_get("recipe_uuid")?,
            line: RecipeIngredientLine {
                ingredient_uuid: IngredientUuid::from_uuid(row.try_get("ingredient_uuid")?),
                name: row.try_get("name")?,
                measurement_unit: row.try_get("measurement_unit")?,
                amount: try_get_u32(row, "amount")?,
            },
        })
    }
}

impl<'r> FromRow<'r, PgRow> for RecipeTagRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            recipe_uuid: row.try_get("recipe_uuid")?,
            tag: TagRecord::from_row(row)?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for RecipeSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: RecipeUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            image: row.try_get("image")?,
            cooking_time: try_get_u32(row, "cooking_time")?,
        })
    }
}
