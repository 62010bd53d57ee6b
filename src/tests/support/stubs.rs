use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::incoming::use_cases::{
    GetTopicsError, GetTopicsUseCase, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::{PageRequest, TopicListFilter, UpdateTopicData};
use crate::user::application::domain::entities::User;
use crate::user::application::ports::incoming::use_cases::{GetUserError, GetUserUseCase};

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<Topic>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(data: Vec<Topic>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(
        &self,
        _filter: TopicListFilter,
        _page: PageRequest,
    ) -> Result<Vec<Topic>, GetTopicsError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateTopicUseCase;

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(
        &self,
        _topic_id: String,
        _data: UpdateTopicData,
    ) -> Result<Topic, UpdateTopicError> {
        Err(UpdateTopicError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubGetUserUseCase {
    result: Result<User, GetUserError>,
}

impl StubGetUserUseCase {
    pub fn success(user: User) -> Self {
        Self { result: Ok(user) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetUserError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetUserError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _user_id: String) -> Result<User, GetUserError> {
        self.result.clone()
    }
}
