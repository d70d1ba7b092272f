use crate::transport::http::handlers::common::{failure, success};
use crate::transport::http::types::{ApiResponse, AppState, FacetsResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/facets",
    responses(
        (status = 200, description = "Genres, year range and rating range of the catalog", body = FacetsResponse),
        (status = 503, description = "Catalog is empty", body = ApiResponse)
    )
)]
pub async fn facets_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog_service.facets() {
        Ok(facets) => success(StatusCode::OK, &FacetsResponse::from(facets)),
        Err(e) => failure(StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
    }
}
