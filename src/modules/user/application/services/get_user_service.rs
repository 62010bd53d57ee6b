use async_trait::async_trait;
use tracing::error;

use crate::user::application::{
    domain::entities::User,
    ports::incoming::use_cases::{GetUserError, GetUserUseCase},
    ports::outgoing::{UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct GetUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetUserUseCase for GetUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: String) -> Result<User, GetUserError> {
        self.repository
            .get_user_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => GetUserError::NotFound,
                UserRepositoryError::DatabaseError(msg) => {
                    error!("Failed to fetch user: {}", msg);
                    GetUserError::QueryFailed(msg)
                }
            })
    }
}
