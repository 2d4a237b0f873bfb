//! Shopping list service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        shopping_list::{
            errors::ShoppingListServiceError, report::ShoppingList,
            repository::PgShoppingListRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgShoppingListService {
    db: Db,
    repository: PgShoppingListRepository,
}

impl PgShoppingListService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgShoppingListRepository::new(),
        }
    }
}

#[async_trait]
impl ShoppingListService for PgShoppingListService {
    #[tracing::instrument(
        name = "shopping_list.service.generate_report",
        skip(self),
        fields(user = %user),
        err
    )]
    async fn generate_report(&self, user: UserUuid) -> Result<ShoppingList, ShoppingListServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self.repository.count_cart_entries(&mut tx, user).await?;

        if entries == 0 {
            return Err(ShoppingListServiceError::EmptyCart);
        }

        let lines = self
            .repository
            .list_cart_ingredient_lines(&mut tx, user)
            .await?;

        tx.commit().await?;

        let list = ShoppingList::aggregate(lines);

        debug!(entries, items = list.items.len(), "generated shopping list");

        Ok(list)
    }
}

#[automock]
#[async_trait]
pub trait ShoppingListService: Send + Sync {
    /// Aggregate the ingredients of every recipe in the user's cart.
    ///
    /// An empty cart is rejected with [`ShoppingListServiceError::EmptyCart`].
    async fn generate_report(&self, user: UserUuid) -> Result<ShoppingList, ShoppingListServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            collections::{CollectionsService, RecipeCollection},
            recipes::RecipesService,
        },
        test::{TestContext, helpers::new_recipe},
    };

    use super::*;

    #[tokio::test]
    async fn empty_cart_is_rejected() {
        let ctx = TestContext::new().await;
        let cook = ctx.create_user("cook").await;

        let result = ctx.shopping_list.generate_report(cook).await;

        assert!(
            matches!(result, Err(ShoppingListServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[tokio::test]
    async fn report_sums_across_cart_recipes() -> TestResult {
        let ctx = TestContext::new().await;
        let author = ctx.create_user("author").await;
        let cook = ctx.create_user("cook").await;
        let flour = ctx.create_ingredient("Flour", "g").await;
        let sugar = ctx.create_ingredient("Sugar", "g").await;
        let egg = ctx.create_ingredient("Egg", "pcs").await;
        let tag = ctx.create_tag("Baking", "baking").await;

        let recipe_a = ctx
            .recipes
            .create_recipe(author, new_recipe("A", &[(flour, 200), (sugar, 50)], &[tag]))
            .await?;
        let recipe_b = ctx
            .recipes
            .create_recipe(author, new_recipe("B", &[(flour, 100), (egg, 2)], &[tag]))
            .await?;

        for recipe in [recipe_a.uuid, recipe_b.uuid] {
            ctx.collections
                .add(RecipeCollection::ShoppingCart, cook, recipe)
                .await?;
        }

        let report = ctx.shopping_list.generate_report(cook).await?.render();

        assert!(report.starts_with("Shopping list:\n"));
        assert!(report.contains("Flour - 300g.\n"));
        assert!(report.contains("Sugar - 50g.\n"));
        assert!(report.contains("Egg - 2pcs.\n"));
        assert_eq!(report.matches("Flour").count(), 1);

        ctx.collections
            .remove(RecipeCollection::ShoppingCart, cook, recipe_b.uuid)
            .await?;

        let report = ctx.shopping_list.generate_report(cook).await?.render();

        assert_eq!(report, "Shopping list:\nFlour - 200g.\nSugar - 50g.\n");

        Ok(())
    }

    #[tokio::test]
    async fn favorites_do_not_contribute() -> TestResult {
        let ctx = TestContext::new().await;
        let author = ctx.create_user("author").await;
        let cook = ctx.create_user("cook").await;
        let in_cart = ctx.create_recipe(author, "In cart").await;
        let favorite = ctx.create_recipe(author, "Favorite").await;

        ctx.collections
            .add(RecipeCollection::ShoppingCart, cook, in_cart)
            .await?;
        ctx.collections
            .add(RecipeCollection::Favorites, cook, favorite)
            .await?;

        let list = ctx.shopping_list.generate_report(cook).await?;

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].total, 1);

        Ok(())
    }
}
