use crate::domain::model::FilterSpec;
use crate::transport::http::types::{json_422, ApiResponse, FilterRequest};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const FILTER_BODY_SHAPE: &str =
    "{\"genre\"?: string, \"min_year\"?: int, \"max_year\"?: int, \"min_rating\"?: number}";

/// Wraps `data` in a successful `ApiResponse` with the given status.
pub fn success<T: Serialize>(status: StatusCode, data: &T) -> Response {
    match serde_json::to_value(data) {
        Ok(v) => (
            status,
            Json(ApiResponse {
                success: true,
                data: Some(v),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to serialize response: {}", e),
        ),
    }
}

pub fn failure(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(error.into()),
        }),
    )
        .into_response()
}

/// Unwraps a filter body, turning a JSON rejection into a 422 response.
pub fn filter_spec_from(
    request: Result<Json<FilterRequest>, JsonRejection>,
) -> Result<FilterSpec, Response> {
    match request {
        Ok(Json(r)) => Ok(r.into()),
        Err(e) => Err(json_422(e, FILTER_BODY_SHAPE).into_response()),
    }
}
