pub mod mongo_document;
mod topic_repository_mongo;

pub use topic_repository_mongo::TopicRepositoryMongo;
