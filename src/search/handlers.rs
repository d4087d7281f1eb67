use super::service::SearchService;
use crate::store::LocationRecord;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DEFAULT_LIMIT: usize = 5;

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub limit: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize)]
pub struct NotFoundBody {
    pub error: String,
    pub id: String,
}

/// Invalid or out-of-range limits fall back to the default instead of
/// failing the request.
pub fn effective_limit(raw: Option<&str>) -> usize {
    match raw.and_then(|s| s.parse::<usize>().ok()) {
        Some(n) if (1..=20).contains(&n) => n,
        _ => DEFAULT_LIMIT,
    }
}

/// `GET /api/v1/search?query=biển đẹp&limit=5`
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<SearchService>>,
) -> Response {
    let query = match params.query {
        Some(q) if !q.trim().is_empty() => q,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Thiếu tham số 'query' trong yêu cầu.".to_string(),
                }),
            )
                .into_response()
        }
    };

    let limit = effective_limit(params.limit.as_deref());
    let response = service.search(&query, limit).await;
    (StatusCode::OK, Json(response)).into_response()
}

/// `GET /api/v1/location/:id`
pub async fn handle_get_location(
    Path(location_id): Path<String>,
    Extension(service): Extension<Arc<SearchService>>,
) -> Response {
    match service.get_details(&location_id).await {
        Ok(Some(record)) => (StatusCode::OK, Json::<LocationRecord>(record)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(NotFoundBody {
                error: "Không tìm thấy địa điểm.".to_string(),
                id: location_id,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Detail lookup failed for {}: {}", location_id, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Lỗi server khi lấy chi tiết địa điểm.".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn handle_root() -> &'static str {
    "diadiem: natural-language travel location search backend"
}
