//! Tag Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_app::domain::tags::records::TagRecord;

use crate::{extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TagResponse {
    pub uuid: Uuid,
    pub name: String,

    /// URL-safe identifier used by the recipe `tags` filter
    pub slug: String,
}

impl From<TagRecord> for TagResponse {
    fn from(tag: TagRecord) -> Self {
        Self {
            uuid: tag.uuid.into(),
            name: tag.name,
            slug: tag.slug,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TagsResponse {
    pub tags: Vec<TagResponse>,
}

/// Tag Index Handler
#[endpoint(tags("tags"), summary = "List Tags")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TagsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tags = state
        .app
        .tags
        .list_tags()
        .await
        .or_500("failed to fetch tags")?;

    Ok(Json(TagsResponse {
        tags: tags.into_iter().map(Into::into).collect(),
    }))
}
