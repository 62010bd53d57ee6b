use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, TopicResponse};
use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::UpdateTopicError;
use crate::topic::application::ports::outgoing::{PatchField, UpdateTopicData};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Partial topic body. Omitted or `null` fields keep their stored value.
/// Any string, including `""`, overwrites the stored value, so an empty
/// string clears the field. Other topic fields in the body are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTopicRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "New title")]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "closed")]
    pub status: PatchField<String>,
}

impl From<UpdateTopicRequest> for UpdateTopicData {
    fn from(req: UpdateTopicRequest) -> Self {
        UpdateTopicData {
            title: req.title,
            description: req.description,
            status: req.status,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Update a topic
///
/// Overwrites the supplied fields and returns the topic as stored afterwards.
/// Sending `""` for a field clears it; omit the field or send `null` to keep it.
/// An id that is not a valid ObjectId is reported as not found.
#[utoipa::path(
    put,
    path = "/topics/{id}",
    tag = "topics",
    params(("id" = String, Path, description = "Topic ObjectId (hex)")),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Updated topic", body = TopicResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse,
            example = json!({ "error": "invalid request body" })),
        (status = 404, description = "No such topic", body = ErrorResponse,
            example = json!({ "error": "topic not found" })),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[put("/topics/{id}")]
pub async fn update_topic_handler(
    path: web::Path<String>,
    req: web::Json<UpdateTopicRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let update: UpdateTopicData = req.into_inner().into();

    match data.topic.update.execute(topic_id.clone(), update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(err @ UpdateTopicError::NotFound) => ApiResponse::not_found(&err.to_string()),

        Err(err @ UpdateTopicError::RepositoryError(_)) => {
            error!("Repository error updating topic {}: {}", topic_id, err);
            ApiResponse::internal_error(&err.to_string())
        }
    }
}
