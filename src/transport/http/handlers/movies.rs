use crate::transport::http::handlers::common::{failure, filter_spec_from, success};
use crate::transport::http::types::{
    ApiResponse, AppState, FilterRequest, FilterResponse, MovieResponse, MovieView,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/movies/filter",
    request_body = FilterRequest,
    responses(
        (status = 200, description = "Matching movies in ranking order (possibly none)", body = FilterResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn filter_handler(
    State(state): State<AppState>,
    request: Result<Json<FilterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let spec = match filter_spec_from(request) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let outcome = state.catalog_service.filter(&spec);
    let body = FilterResponse {
        movies: outcome.movies.into_iter().map(MovieView::from).collect(),
        summary: outcome.summary.into(),
    };
    success(StatusCode::OK, &body)
}

#[utoipa::path(
    post,
    path = "/api/movies/suggest",
    request_body = FilterRequest,
    responses(
        (status = 200, description = "One movie drawn at random from the matches", body = MovieResponse),
        (status = 404, description = "No movie matches the filters", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse)
    )
)]
pub async fn suggest_handler(
    State(state): State<AppState>,
    request: Result<Json<FilterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let spec = match filter_spec_from(request) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match state.catalog_service.suggest(&spec) {
        Ok(movie) => success(
            StatusCode::OK,
            &MovieResponse {
                movie: MovieView::from(movie),
            },
        ),
        Err(e) => failure(
            StatusCode::NOT_FOUND,
            format!("{}; try relaxing the criteria", e),
        ),
    }
}

#[utoipa::path(
    get,
    path = "/api/movies/{rank}",
    params(
        ("rank" = u32, Path, description = "Ranking position of the movie")
    ),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 404, description = "No movie with that rank", body = ApiResponse)
    )
)]
pub async fn movie_by_rank_handler(
    State(state): State<AppState>,
    Path(rank): Path<u32>,
) -> impl IntoResponse {
    match state.catalog_service.movie(rank) {
        Some(movie) => success(
            StatusCode::OK,
            &MovieResponse {
                movie: MovieView::from(movie),
            },
        ),
        None => failure(
            StatusCode::NOT_FOUND,
            format!("No movie with rank {}", rank),
        ),
    }
}
