use crate::transport::http::handlers::{facets, health, movies};
use crate::transport::http::types::{
    ApiResponse, FacetsResponse, FilterRequest, FilterResponse, MovieResponse, MovieView,
    RatingRangeView, SummaryView, YearRangeView,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        facets::facets_handler,
        movies::filter_handler,
        movies::suggest_handler,
        movies::movie_by_rank_handler
    ),
    components(schemas(
        ApiResponse,
        FilterRequest,
        FilterResponse,
        MovieResponse,
        MovieView,
        SummaryView,
        FacetsResponse,
        YearRangeView,
        RatingRangeView
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/facets", get(facets::facets_handler))
        .route("/api/movies/filter", post(movies::filter_handler))
        .route("/api/movies/suggest", post(movies::suggest_handler))
        .route("/api/movies/:rank", get(movies::movie_by_rank_handler))
        .with_state(app_state)
}
