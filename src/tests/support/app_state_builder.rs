use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    GetTopicsUseCase, UpdateTopicUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::user::application::ports::incoming::use_cases::GetUserUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_topics: Arc<dyn GetTopicsUseCase + Send + Sync>,
    update_topic: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    get_user: Arc<dyn GetUserUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_topics: Arc::new(StubGetTopicsUseCase::success(vec![])),
            update_topic: Arc::new(StubUpdateTopicUseCase),
            get_user: Arc::new(StubGetUserUseCase::not_found()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.get_topics = Arc::new(uc);
        self
    }

    pub fn with_update_topic(
        mut self,
        uc: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_topic = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + Send + Sync + 'static) -> Self {
        self.get_user = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: TopicUseCases {
                get_list: self.get_topics,
                update: self.update_topic,
            },
            get_user_use_case: self.get_user,
        })
    }
}
