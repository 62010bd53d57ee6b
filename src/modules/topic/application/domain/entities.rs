use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A comment embedded in its parent topic. Comments have no identity of
/// their own and are only ever read through the topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Hex form of the stored ObjectId.
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Insertion order is preserved.
    pub comments: Vec<Comment>,
    #[schema(example = "open")]
    pub status: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
