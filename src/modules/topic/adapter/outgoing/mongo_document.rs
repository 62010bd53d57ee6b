// Stored shape of the `topics` collection.
use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::database::{datetime_or_epoch, null_as_default};
use crate::topic::application::domain::entities::{Comment, Topic};

pub const TOPIC_COLLECTION: &str = "topics";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(
        serialize_with = "chrono_datetime_as_bson_datetime::serialize",
        deserialize_with = "datetime_or_epoch",
        default = "unix_epoch"
    )]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<CommentDocument>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(
        serialize_with = "chrono_datetime_as_bson_datetime::serialize",
        deserialize_with = "datetime_or_epoch",
        default = "unix_epoch"
    )]
    pub created_at: DateTime<Utc>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl CommentDocument {
    pub fn to_comment(self) -> Comment {
        Comment {
            comment: self.comment,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

impl TopicDocument {
    pub fn to_topic(self) -> Topic {
        Topic {
            id: self.id.to_hex(),
            title: self.title,
            description: self.description,
            comments: self
                .comments
                .into_iter()
                .map(CommentDocument::to_comment)
                .collect(),
            status: self.status,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}
