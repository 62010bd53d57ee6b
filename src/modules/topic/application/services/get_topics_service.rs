use async_trait::async_trait;
use tracing::error;

use crate::topic::application::{
    domain::entities::Topic,
    ports::incoming::use_cases::{GetTopicsError, GetTopicsUseCase},
    ports::outgoing::{PageRequest, TopicListFilter, TopicRepository},
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetTopicsService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetTopicsUseCase for GetTopicsService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        filter: TopicListFilter,
        page: PageRequest,
    ) -> Result<Vec<Topic>, GetTopicsError> {
        self.repository
            .list_topics(filter, page)
            .await
            .map_err(|e| {
                error!("Failed to list topics: {}", e);
                GetTopicsError::QueryFailed(e.to_string())
            })
    }
}
