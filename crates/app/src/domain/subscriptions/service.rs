//! Subscriptions service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        subscriptions::{
            errors::SubscriptionsServiceError, models::SubscribedAuthor,
            repository::PgSubscriptionsRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgSubscriptionsService {
    db: Db,
    repository: PgSubscriptionsRepository,
}

impl PgSubscriptionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSubscriptionsRepository::new(),
        }
    }
}

#[async_trait]
impl SubscriptionsService for PgSubscriptionsService {
    async fn subscribe(
        &self,
        user: UserUuid,
        author: UserUuid,
        recipes_limit: Option<u32>,
    ) -> Result<SubscribedAuthor, SubscriptionsServiceError> {
        if user == author {
            return Err(SubscriptionsServiceError::Validation(
                "cannot subscribe to yourself".to_string(),
            ));
        }

        let mut tx = self.db.begin().await?;

        self.repository
            .create_subscription(&mut tx, user, author)
            .await?;

        let subscribed = self
            .repository
            .list_subscribed_authors(&mut tx, user, Some(author), recipes_limit)
            .await?
            .pop()
            .ok_or(SubscriptionsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(subscribed)
    }

    async fn unsubscribe(
        &self,
        user: UserUuid,
        author: UserUuid,
    ) -> Result<(), SubscriptionsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_subscription(&mut tx, user, author)
            .await?;

        if rows_affected == 0 {
            return Err(SubscriptionsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list_subscriptions(
        &self,
        user: UserUuid,
        recipes_limit: Option<u32>,
    ) -> Result<Vec<SubscribedAuthor>, SubscriptionsServiceError> {
        let mut tx = self.db.begin().await?;

        let authors = self
            .repository
            .list_subscribed_authors(&mut tx, user, None, recipes_limit)
            .await?;

        tx.commit().await?;

        Ok(authors)
    }
}

#[automock]
#[async_trait]
pub trait SubscriptionsService: Send + Sync {
    /// Follow `author`. Returns the author as the subscription listing shows them.
    async fn subscribe(
        &self,
        user: UserUuid,
        author: UserUuid,
        recipes_limit: Option<u32>,
    ) -> Result<SubscribedAuthor, SubscriptionsServiceError>;

    /// Stop following `author`.
    async fn unsubscribe(
        &self,
        user: UserUuid,
        author: UserUuid,
    ) -> Result<(), SubscriptionsServiceError>;

    /// Every author `user` follows, oldest subscription first.
    async fn list_subscriptions(
        &self,
        user: UserUuid,
        recipes_limit: Option<u32>,
    ) -> Result<Vec<SubscribedAuthor>, SubscriptionsServiceError>;
}
