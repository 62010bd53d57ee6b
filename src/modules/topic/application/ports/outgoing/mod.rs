mod topic_repository;

pub use topic_repository::{
    PageRequest, PatchField, TopicListFilter, TopicRepository, TopicRepositoryError,
    UpdateTopicData,
};
