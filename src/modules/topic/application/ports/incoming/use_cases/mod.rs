mod get_topics_use_case;
mod update_topic_use_case;

pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
pub use update_topic_use_case::{UpdateTopicError, UpdateTopicUseCase};
