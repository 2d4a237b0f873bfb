//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::users::{
        data::NewUser,
        errors::UsersServiceError,
        models::UserProfile,
        records::{UserRecord, UserUuid},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        user.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn get_profile(
        &self,
        viewer: Option<UserUuid>,
        user: UserUuid,
    ) -> Result<UserProfile, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let profile = self
            .repository
            .get_user_profile(&mut tx, viewer, user)
            .await?;

        tx.commit().await?;

        Ok(profile)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Creates a new user.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a user's public profile as seen by `viewer`.
    async fn get_profile(
        &self,
        viewer: Option<UserUuid>,
        user: UserUuid,
    ) -> Result<UserProfile, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::subscriptions::SubscriptionsService, test::TestContext};

    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            uuid: UserUuid::new(),
            email: format!("{username}@example.com"),
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        }
    }

    #[tokio::test]
    async fn create_user_returns_record() -> TestResult {
        let ctx = TestContext::new().await;
        let user = new_user("baker");
        let uuid = user.uuid;

        let created = ctx.users.create_user(user).await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.username, "baker");
        assert_eq!(created.email, "baker@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn get_user_returns_created_user() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.users.create_user(new_user("chef")).await?;

        let fetched = ctx.users.get_user(created.uuid).await?;

        assert_eq!(fetched.uuid, created.uuid);
        assert_eq!(fetched.username, created.username);

        Ok(())
    }

    #[tokio::test]
    async fn profile_reports_viewer_subscription() -> TestResult {
        let ctx = TestContext::new().await;
        let author = ctx.users.create_user(new_user("author")).await?;
        let fan = ctx.users.create_user(new_user("fan")).await?;
        let stranger = ctx.users.create_user(new_user("stranger")).await?;

        ctx.subscriptions
            .subscribe(fan.uuid, author.uuid, None)
            .await?;

        let as_fan = ctx.users.get_profile(Some(fan.uuid), author.uuid).await?;
        let as_stranger = ctx
            .users
            .get_profile(Some(stranger.uuid), author.uuid)
            .await?;
        let as_anonymous = ctx.users.get_profile(None, author.uuid).await?;

        assert_eq!(as_fan.user.username, "author");
        assert!(as_fan.is_subscribed);
        assert!(!as_stranger.is_subscribed);
        assert!(!as_anonymous.is_subscribed);

        let missing = ctx.users.get_profile(None, UserUuid::new()).await;

        assert!(
            matches!(missing, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {missing:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users.create_user(new_user("twin")).await?;

        let result = ctx
            .users
            .create_user(NewUser {
                email: "other@example.com".to_string(),
                ..new_user("twin")
            })
            .await;

        assert!(
            matches!(result, Err(UsersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_user_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.users.get_user(UserUuid::new()).await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn invalid_user_is_rejected_before_insert() {
        let ctx = TestContext::new().await;

        let result = ctx
            .users
            .create_user(NewUser {
                email: "nope".to_string(),
                ..new_user("invalid")
            })
            .await;

        assert!(
            matches!(result, Err(UsersServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }
}
