use crate::api::schemas::{ErrorResponse, TopicListResponse, TopicResponse, UserResponse};
use crate::health::{GreetingResponse, HealthResponse, ReadinessResponse};
use crate::topic::adapter::incoming::web::routes::UpdateTopicRequest;
use crate::topic::application::domain::entities::{Comment, Topic};
use crate::user::application::domain::entities::User;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Topics API",
        version = "0.1.0",
        description = "Listing, filtering and partial updates of discussion topics, plus user lookup"
    ),
    paths(
        // Health
        crate::health::hello,
        crate::health::health,
        crate::health::readiness,

        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,

        // User endpoints
        crate::user::adapter::incoming::web::routes::get_user_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            TopicListResponse,
            TopicResponse,
            UserResponse,
            GreetingResponse,
            HealthResponse,
            ReadinessResponse,

            // Domain
            Topic,
            Comment,
            User,
            UpdateTopicRequest
        )
    ),
    tags(
        (name = "health", description = "Greeting and probes"),
        (name = "topics", description = "Topic listing and updates"),
        (name = "users", description = "User lookup"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in ["/", "/health", "/ready", "/topics", "/topics/{id}", "/users/{id}"] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {expected}, got {paths:?}"
            );
        }
    }
}
