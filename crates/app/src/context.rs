//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        collections::{CollectionsService, PgCollectionsService},
        ingredients::{IngredientsService, PgIngredientsService},
        recipes::{PgRecipesService, RecipesService},
        shopping_list::{PgShoppingListService, ShoppingListService},
        short_links::{PgShortLinksService, ShortLinkSettings, ShortLinksService},
        subscriptions::{PgSubscriptionsService, SubscriptionsService},
        tags::{PgTagsService, TagsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UsersService>,
    pub tags: Arc<dyn TagsService>,
    pub ingredients: Arc<dyn IngredientsService>,
    pub recipes: Arc<dyn RecipesService>,
    pub collections: Arc<dyn CollectionsService>,
    pub shopping_list: Arc<dyn ShoppingListService>,
    pub short_links: Arc<dyn ShortLinksService>,
    pub subscriptions: Arc<dyn SubscriptionsService>,
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        links: ShortLinkSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            auth: Arc::new(PgAuthService::new(pool.clone())),
            users: Arc::new(PgUsersService::new(db.clone())),
            tags: Arc::new(PgTagsService::new(db.clone())),
            ingredients: Arc::new(PgIngredientsService::new(db.clone())),
            recipes: Arc::new(PgRecipesService::new(db.clone())),
            collections: Arc::new(PgCollectionsService::new(db.clone())),
            shopping_list: Arc::new(PgShoppingListService::new(db.clone())),
            short_links: Arc::new(PgShortLinksService::new(pool, links)),
            subscriptions: Arc::new(PgSubscriptionsService::new(db)),
        })
    }
}
