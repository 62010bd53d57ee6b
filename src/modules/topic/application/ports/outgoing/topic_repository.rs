// src/modules/topic/application/ports/outgoing/topic_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::topic::application::domain::entities::Topic;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PUT semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => keep stored value (topic fields are not nullable)
// - Value(v): replace with v, including the empty string
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Fields a caller may overwrite on an existing topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTopicData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub status: PatchField<String>,
}

impl UpdateTopicData {
    pub fn has_changes(&self) -> bool {
        self.title.is_value() || self.description.is_value() || self.status.is_value()
    }
}

/// Recognized list filters. An empty `statuses` places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicListFilter {
    pub statuses: Vec<String>,
}

impl TopicListFilter {
    /// Split a comma-separated status list, dropping blank segments.
    pub fn from_status_csv(raw: &str) -> Self {
        let statuses = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self { statuses }
    }
}

/// Zero-based page window. `limit == 0` selects nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub page: u64,
}

impl PageRequest {
    pub fn new(limit: u64, page: u64) -> Self {
        Self { limit, page }
    }

    /// Documents to skip, capped at `i64::MAX` since the store takes a signed
    /// count. A skip that large is past any real collection.
    pub fn skip(&self) -> u64 {
        self.page.saturating_mul(self.limit).min(i64::MAX as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicRepositoryError {
    /// No document with that id, or the id is not a valid ObjectId.
    #[error("topic not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Never returns `NotFound`; no match is an empty vector.
    async fn list_topics(
        &self,
        filter: TopicListFilter,
        page: PageRequest,
    ) -> Result<Vec<Topic>, TopicRepositoryError>;

    /// Returns the document as it is after the update.
    async fn update_topic_by_id(
        &self,
        id: String,
        data: UpdateTopicData,
    ) -> Result<Topic, TopicRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        title: PatchField<String>,
        #[serde(default)]
        status: PatchField<String>,
    }

    #[test]
    fn patch_field_distinguishes_missing_null_and_value() {
        let body: Body = serde_json::from_str(r#"{"status": null}"#).unwrap();
        assert_eq!(body.title, PatchField::Unset);
        assert_eq!(body.status, PatchField::Null);

        let body: Body = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert_eq!(body.title, PatchField::Value(String::new()));
    }

    #[test]
    fn has_changes_ignores_unset_and_null() {
        let data = UpdateTopicData {
            title: PatchField::Null,
            ..Default::default()
        };
        assert!(!data.has_changes());

        let data = UpdateTopicData {
            status: PatchField::Value("closed".to_string()),
            ..Default::default()
        };
        assert!(data.has_changes());
    }

    #[test]
    fn status_csv_is_split_and_trimmed() {
        let filter = TopicListFilter::from_status_csv("open, closed,,");
        assert_eq!(filter.statuses, vec!["open", "closed"]);

        assert!(TopicListFilter::from_status_csv("").statuses.is_empty());
    }

    #[test]
    fn skip_is_page_times_limit() {
        assert_eq!(PageRequest::new(10, 0).skip(), 0);
        assert_eq!(PageRequest::new(10, 3).skip(), 30);
        assert!(PageRequest::new(0, 5).is_empty());
    }

    #[test]
    fn skip_is_capped_at_signed_maximum() {
        assert_eq!(PageRequest::new(u64::MAX, 2).skip(), i64::MAX as u64);
        assert_eq!(
            PageRequest::new(10, 1_000_000_000_000_000_000).skip(),
            i64::MAX as u64
        );
        assert_eq!(PageRequest::new(1, i64::MAX as u64).skip(), i64::MAX as u64);
    }
}
