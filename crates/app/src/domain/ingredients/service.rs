//! Ingredients service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::ingredients::{
        data::NewIngredient, errors::IngredientsServiceError, records::IngredientRecord,
        repository::PgIngredientsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgIngredientsService {
    db: Db,
    repository: PgIngredientsRepository,
}

impl PgIngredientsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgIngredientsRepository::new(),
        }
    }
}

#[async_trait]
impl IngredientsService for PgIngredientsService {
    async fn list_ingredients(
        &self,
        name_prefix: Option<String>,
    ) -> Result<Vec<IngredientRecord>, IngredientsServiceError> {
        let mut tx = self.db.begin().await?;

        let ingredients = self
            .repository
            .list_ingredients(&mut tx, name_prefix.as_deref())
            .await?;

        tx.commit().await?;

        Ok(ingredients)
    }

    async fn create_ingredient(
        &self,
        ingredient: NewIngredient,
    ) -> Result<IngredientRecord, IngredientsServiceError> {
        ingredient.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_ingredient(&mut tx, ingredient).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn import_ingredients(
        &self,
        ingredients: Vec<NewIngredient>,
    ) -> Result<u64, IngredientsServiceError> {
        for ingredient in &ingredients {
            ingredient.validate()?;
        }

        let mut tx = self.db.begin().await?;

        let inserted = self
            .repository
            .import_ingredients(&mut tx, ingredients)
            .await?;

        tx.commit().await?;

        Ok(inserted)
    }
}

#[automock]
#[async_trait]
pub trait IngredientsService: Send + Sync {
    /// List ingredients, optionally restricted to names starting with `name_prefix`
    /// (case-insensitive).
    async fn list_ingredients(
        &self,
        name_prefix: Option<String>,
    ) -> Result<Vec<IngredientRecord>, IngredientsServiceError>;

    /// Create a single ingredient.
    async fn create_ingredient(
        &self,
        ingredient: NewIngredient,
    ) -> Result<IngredientRecord, IngredientsServiceError>;

    /// Bulk insert ingredients, skipping `(name, unit)` pairs that already exist.
    /// Returns the number of rows inserted.
    async fn import_ingredients(
        &self,
        ingredients: Vec<NewIngredient>,
    ) -> Result<u64, IngredientsServiceError>;
}
