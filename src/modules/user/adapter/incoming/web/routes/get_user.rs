use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, UserResponse},
    shared::api::ApiResponse,
    user::application::ports::incoming::use_cases::GetUserError,
    AppState,
};

/// Fetch a user
///
/// An id that is not a valid ObjectId is reported as not found.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ObjectId (hex)")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "No such user", body = ErrorResponse,
            example = json!({ "error": "user not found" })),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/users/{id}")]
pub async fn get_user_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.get_user_use_case.execute(user_id.clone()).await {
        Ok(user) => ApiResponse::success(user),
        Err(err) => map_get_user_error(&user_id, err),
    }
}

fn map_get_user_error(user_id: &str, err: GetUserError) -> actix_web::HttpResponse {
    match err {
        GetUserError::NotFound => ApiResponse::not_found(&err.to_string()),
        GetUserError::QueryFailed(_) => {
            error!("Failed to fetch user {}: {}", user_id, err);
            ApiResponse::internal_error(&err.to_string())
        }
    }
}
