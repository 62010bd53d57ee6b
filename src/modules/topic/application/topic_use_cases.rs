use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    GetTopicsUseCase, UpdateTopicUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub get_list: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
}
