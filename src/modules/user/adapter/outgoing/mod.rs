mod user_repository_mongo;

pub use user_repository_mongo::{UserDocument, UserRepositoryMongo, USER_COLLECTION};
