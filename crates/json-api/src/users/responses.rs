//! User Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_app::domain::{
    subscriptions::models::SubscribedAuthor,
    users::{models::UserProfile, records::UserRecord},
};

use crate::recipes::responses::RecipeSummaryResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub uuid: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            uuid: user.uuid.into(),
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Public profile of a user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserProfileResponse {
    pub uuid: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,

    /// Whether the viewer follows this user
    pub is_subscribed: bool,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let UserProfile {
            user,
            is_subscribed,
        } = profile;

        Self {
            uuid: user.uuid.into(),
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            is_subscribed,
        }
    }
}

/// A followed author with a preview of their newest recipes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscribedAuthorResponse {
    pub uuid: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,

    /// Total recipes published by the author
    pub recipes_count: u64,
    pub recipes: Vec<RecipeSummaryResponse>,
}

impl From<SubscribedAuthor> for SubscribedAuthorResponse {
    fn from(author: SubscribedAuthor) -> Self {
        Self {
            uuid: author.uuid.into(),
            email: author.email,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed: true,
            recipes_count: author.recipes_count,
            recipes: author.recipes.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubscriptionsResponse {
    pub authors: Vec<SubscribedAuthorResponse>,
}
