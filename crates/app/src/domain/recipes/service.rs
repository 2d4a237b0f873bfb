//! Recipes service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        recipes::{
            data::{NewRecipe, RecipeFilter},
            errors::RecipesServiceError,
            models::Recipe,
            records::RecipeUuid,
            repository::PgRecipesRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgRecipesService {
    db: Db,
    repository: PgRecipesRepository,
}

impl PgRecipesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRecipesRepository::new(),
        }
    }
}

#[async_trait]
impl RecipesService for PgRecipesService {
    async fn create_recipe(
        &self,
        author: UserUuid,
        recipe: NewRecipe,
    ) -> Result<Recipe, RecipesServiceError> {
        recipe.validate()?;

        let mut tx = self.db.begin().await?;

        let uuid = self
            .repository
            .create_recipe(&mut tx, author, recipe)
            .await?;

        let created = self
            .repository
            .get_recipe(&mut tx, Some(author), uuid)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_recipe(
        &self,
        viewer: Option<UserUuid>,
        recipe: RecipeUuid,
    ) -> Result<Recipe, RecipesServiceError> {
        let mut tx = self.db.begin().await?;

        let recipe = self.repository.get_recipe(&mut tx, viewer, recipe).await?;

        tx.commit().await?;

        Ok(recipe)
    }

    async fn list_recipes(
        &self,
        viewer: Option<UserUuid>,
        filter: RecipeFilter,
    ) -> Result<Vec<Recipe>, RecipesServiceError> {
        let mut tx = self.db.begin().await?;

        let recipes = self
            .repository
            .list_recipes(&mut tx, viewer, &filter)
            .await?;

        tx.commit().await?;

        Ok(recipes)
    }

    async fn update_recipe(
        &self,
        author: UserUuid,
        recipe: RecipeUuid,
        update: NewRecipe,
    ) -> Result<Recipe, RecipesServiceError> {
        update.validate()?;

        let mut tx = self.db.begin().await?;

        let owner = self.repository.lock_recipe_author(&mut tx, recipe).await?;

        if owner != author {
            return Err(RecipesServiceError::Forbidden);
        }

        let rows_affected = self
            .repository
            .update_recipe(&mut tx, recipe, &update)
            .await?;

        if rows_affected == 0 {
            return Err(RecipesServiceError::NotFound);
        }

        let updated = self
            .repository
            .get_recipe(&mut tx, Some(author), recipe)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_recipe(
        &self,
        author: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), RecipesServiceError> {
        let mut tx = self.db.begin().await?;

        let owner = self.repository.lock_recipe_author(&mut tx, recipe).await?;

        if owner != author {
            return Err(RecipesServiceError::Forbidden);
        }

        let rows_affected = self.repository.delete_recipe(&mut tx, recipe).await?;

        if rows_affected == 0 {
            return Err(RecipesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait RecipesService: Send + Sync {
    /// Publish a recipe on behalf of `author`.
    async fn create_recipe(
        &self,
        author: UserUuid,
        recipe: NewRecipe,
    ) -> Result<Recipe, RecipesServiceError>;

    /// Retrieve a single recipe as seen by `viewer`.
    async fn get_recipe(
        &self,
        viewer: Option<UserUuid>,
        recipe: RecipeUuid,
    ) -> Result<Recipe, RecipesServiceError>;

    /// List recipes matching `filter`, newest first.
    async fn list_recipes(
        &self,
        viewer: Option<UserUuid>,
        filter: RecipeFilter,
    ) -> Result<Vec<Recipe>, RecipesServiceError>;

    /// Replace a recipe's fields, ingredient lines and tags. Only its author may do so.
    ///
    /// `recipe` identifies the row; the uuid inside `update` is ignored.
    async fn update_recipe(
        &self,
        author: UserUuid,
        recipe: RecipeUuid,
        update: NewRecipe,
    ) -> Result<Recipe, RecipesServiceError>;

    /// Delete a recipe. Only its author may do so.
    async fn delete_recipe(
        &self,
        author: UserUuid,
        recipe: RecipeUuid,
    ) -> Result<(), RecipesServiceError>;
}
