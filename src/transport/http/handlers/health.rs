use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (catalog loaded)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (catalog empty)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.catalog_service;
    let movies = service.catalog().len();

    if movies > 0 {
        (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(serde_json::json!({
                    "status": "ok",
                    "movies": movies,
                    "loaded_at": service.loaded_at().to_rfc3339(),
                })),
                error: None,
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                data: Some(serde_json::json!({ "status": "unhealthy", "movies": 0 })),
                error: Some("Catalog is empty".to_string()),
            }),
        )
            .into_response()
    }
}
