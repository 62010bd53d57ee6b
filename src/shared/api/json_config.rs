// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

pub const INVALID_BODY_MESSAGE: &str = "invalid request body";

/// Any body that fails to bind (malformed JSON, wrong content type, wrong
/// field types) becomes a 400 with a fixed message.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected request body: {}", err);
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request(INVALID_BODY_MESSAGE),
        )
        .into()
    })
}
