mod get_topics;
mod update_topic;

pub use get_topics::*;
pub use update_topic::*;
