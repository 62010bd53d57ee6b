use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::Topic, ports::outgoing::UpdateTopicData,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("topic not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: String,
        data: UpdateTopicData,
    ) -> Result<Topic, UpdateTopicError>;
}
