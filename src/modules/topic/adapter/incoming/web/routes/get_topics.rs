use actix_web::{get, web, Responder};
use utoipa::IntoParams;

use crate::{
    api::schemas::{ErrorResponse, TopicListResponse},
    shared::api::ApiResponse,
    topic::application::{
        ports::incoming::use_cases::GetTopicsError,
        ports::outgoing::{PageRequest, TopicListFilter},
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

/// Raw query string. Numbers are kept as text so that a malformed value reads
/// as zero instead of rejecting the request.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetTopicsQuery {
    /// Maximum number of topics to return. Missing or invalid means 0.
    pub limit: Option<String>,
    /// Zero-based page index. Missing or invalid means 0.
    pub page: Option<String>,
    /// Comma-separated list of accepted statuses, e.g. `open,closed`.
    pub status: Option<String>,
}

impl GetTopicsQuery {
    /// Build from decoded query pairs. A repeated key keeps its first value
    /// and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut query.limit,
                "page" => &mut query.page,
                "status" => &mut query.status,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        query
    }
}

fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(0)
}

impl From<GetTopicsQuery> for (TopicListFilter, PageRequest) {
    fn from(q: GetTopicsQuery) -> Self {
        let filter = q
            .status
            .as_deref()
            .map(TopicListFilter::from_status_csv)
            .unwrap_or_default();

        let page = PageRequest::new(
            parse_count(q.limit.as_deref()),
            parse_count(q.page.as_deref()),
        );

        (filter, page)
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List topics
///
/// Returns topics matching the optional status filter, one page at a time.
#[utoipa::path(
    get,
    path = "/topics",
    tag = "topics",
    params(GetTopicsQuery),
    responses(
        (status = 200, description = "Matching topics", body = TopicListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/topics")]
pub async fn get_topics_handler(
    query: web::Query<Vec<(String, String)>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page): (TopicListFilter, PageRequest) =
        GetTopicsQuery::from_pairs(query.into_inner()).into();

    match data.topic.get_list.execute(filter, page).await {
        Ok(topics) => ApiResponse::success(topics),
        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> actix_web::HttpResponse {
    match err {
        GetTopicsError::QueryFailed(_) => ApiResponse::internal_error(&err.to_string()),
    }
}
