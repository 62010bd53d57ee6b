use async_trait::async_trait;
use tracing::{debug, error};

use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::incoming::use_cases::{
    UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{
    TopicRepository, TopicRepositoryError, UpdateTopicData,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateTopicService<R>
where
    R: TopicRepository,
{
    topic_repository: R,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(topic_repository: R) -> Self {
        Self { topic_repository }
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: String,
        data: UpdateTopicData,
    ) -> Result<Topic, UpdateTopicError> {
        self.topic_repository
            .update_topic_by_id(topic_id.clone(), data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => {
                    debug!("Topic {} not found for update", topic_id);
                    UpdateTopicError::NotFound
                }
                TopicRepositoryError::DatabaseError(msg) => {
                    error!("Failed to update topic {}: {}", topic_id, msg);
                    UpdateTopicError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::{mock, predicate::*};

    use crate::topic::application::ports::outgoing::{
        PageRequest, PatchField, TopicListFilter,
    };

    mock! {
        pub TopicRepositoryMock {}
        #[async_trait]
        impl TopicRepository for TopicRepositoryMock {
            async fn list_topics(
                &self,
                filter: TopicListFilter,
                page: PageRequest,
            ) -> Result<Vec<Topic>, TopicRepositoryError>;

            async fn update_topic_by_id(
                &self,
                id: String,
                data: UpdateTopicData,
            ) -> Result<Topic, TopicRepositoryError>;
        }
    }

    const TOPIC_ID: &str = "65f1c2a9e4b0a1b2c3d4e5f6";

    fn sample_topic(status: &str) -> Topic {
        Topic {
            id: TOPIC_ID.to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            comments: vec![],
            status: status.to_string(),
            created_by: "u1".to_string(),
            created_at: Utc::now(),
        }
    }

    fn status_patch(status: &str) -> UpdateTopicData {
        UpdateTopicData {
            status: PatchField::Value(status.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_update_topic_success_returns_updated_document() {
        let mut repository = MockTopicRepositoryMock::new();
        repository
            .expect_update_topic_by_id()
            .with(eq(TOPIC_ID.to_string()), eq(status_patch("closed")))
            .times(1)
            .returning(|_, _| Ok(sample_topic("closed")));

        let service = UpdateTopicService::new(repository);

        let result = service
            .execute(TOPIC_ID.to_string(), status_patch("closed"))
            .await
            .unwrap();

        assert_eq!(result.status, "closed");
        assert_eq!(result.title, "T");
    }

    #[tokio::test]
    async fn test_update_topic_not_found() {
        let mut repository = MockTopicRepositoryMock::new();
        repository
            .expect_update_topic_by_id()
            .times(1)
            .returning(|_, _| Err(TopicRepositoryError::NotFound));

        let service = UpdateTopicService::new(repository);

        let result = service
            .execute("not-an-object-id".to_string(), status_patch("closed"))
            .await;

        assert!(
            matches!(result, Err(UpdateTopicError::NotFound)),
            "Expected NotFound, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_update_topic_repository_error() {
        let mut repository = MockTopicRepositoryMock::new();
        repository
            .expect_update_topic_by_id()
            .times(1)
            .returning(|_, _| Err(TopicRepositoryError::DatabaseError("db down".to_string())));

        let service = UpdateTopicService::new(repository);

        let result = service
            .execute(TOPIC_ID.to_string(), status_patch("closed"))
            .await;

        match result {
            Err(UpdateTopicError::RepositoryError(msg)) => assert_eq!(msg, "db down"),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
