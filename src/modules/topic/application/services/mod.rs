mod get_topics_service;
mod update_topic_service;

pub use get_topics_service::GetTopicsService;
pub use update_topic_service::UpdateTopicService;
