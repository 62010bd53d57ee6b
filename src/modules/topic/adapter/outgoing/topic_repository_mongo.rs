use std::time::Duration;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::shared::database::{bounded, StoreError};
use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::outgoing::{
    PageRequest, PatchField, TopicListFilter, TopicRepository, TopicRepositoryError,
    UpdateTopicData,
};

use super::mongo_document::{TopicDocument, TOPIC_COLLECTION};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TopicRepositoryMongo {
    collection: Collection<TopicDocument>,
    operation_timeout: Duration,
}

impl TopicRepositoryMongo {
    pub fn new(db: &Database, operation_timeout: Duration) -> Self {
        Self {
            collection: db.collection::<TopicDocument>(TOPIC_COLLECTION),
            operation_timeout,
        }
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Topic, TopicRepositoryError> {
        bounded(
            self.operation_timeout,
            self.collection.find_one(doc! { "_id": id }),
        )
        .await
        .map_err(map_store_err)?
        .map(TopicDocument::to_topic)
        .ok_or(TopicRepositoryError::NotFound)
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryMongo {
    async fn list_topics(
        &self,
        filter: TopicListFilter,
        page: PageRequest,
    ) -> Result<Vec<Topic>, TopicRepositoryError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }

        let query = list_filter(&filter);
        let limit = i64::try_from(page.limit).unwrap_or(i64::MAX);

        let documents = bounded(self.operation_timeout, async {
            let cursor = self
                .collection
                .find(query)
                .sort(natural_order())
                .skip(page.skip())
                .limit(limit)
                .await?;
            Ok::<Vec<TopicDocument>, mongodb::error::Error>(cursor.try_collect().await?)
        })
        .await
        .map_err(map_store_err)?;

        Ok(documents.into_iter().map(TopicDocument::to_topic).collect())
    }

    async fn update_topic_by_id(
        &self,
        id: String,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError> {
        // A malformed id cannot match any stored document.
        let object_id = ObjectId::parse_str(&id).map_err(|_| TopicRepositoryError::NotFound)?;

        if !data.has_changes() {
            return self.find_by_id(object_id).await;
        }

        let update = doc! { "$set": set_document(data) };

        bounded(
            self.operation_timeout,
            self.collection
                .find_one_and_update(doc! { "_id": object_id }, update)
                .return_document(ReturnDocument::After),
        )
        .await
        .map_err(map_store_err)?
        .map(TopicDocument::to_topic)
        .ok_or(TopicRepositoryError::NotFound)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn list_filter(filter: &TopicListFilter) -> Document {
    if filter.statuses.is_empty() {
        Document::new()
    } else {
        doc! { "status": { "$in": filter.statuses.clone() } }
    }
}

/// `_id` ascending keeps pages stable across identical calls.
fn natural_order() -> Document {
    doc! { "_id": 1 }
}

fn set_document(data: UpdateTopicData) -> Document {
    let mut set = Document::new();

    for (field, value) in [
        ("title", data.title),
        ("description", data.description),
        ("status", data.status),
    ] {
        if let PatchField::Value(v) = value {
            set.insert(field, v);
        }
    }

    set
}

fn map_store_err(err: StoreError) -> TopicRepositoryError {
    TopicRepositoryError::DatabaseError(err.to_string())
}

// ============================================================================
// Tests
// ============================================================================
