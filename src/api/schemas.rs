// src/api/schemas.rs
//! Documentation-only shapes of the response envelope. Handlers build the
//! real bodies through `shared::api::ApiResponse`.
use serde::Serialize;
use utoipa::ToSchema;

use crate::topic::application::domain::entities::Topic;
use crate::user::application::domain::entities::User;

/// Error envelope shared by every failing response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "topic not found")]
    pub error: String,
}

#[derive(Serialize, ToSchema)]
pub struct TopicListResponse {
    pub data: Vec<Topic>,
}

#[derive(Serialize, ToSchema)]
pub struct TopicResponse {
    pub data: Topic,
}

#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    pub data: User,
}
