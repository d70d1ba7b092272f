use crate::app::catalog_service::CatalogService;
use crate::domain::model::{FilterSpec, MovieRecord};
use crate::domain::query::MatchSummary;
use crate::storage::catalog::CatalogFacets;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query constraints. Every field is optional; omitted fields do not constrain the result.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct FilterRequest {
    /// Exact, case-sensitive genre. Omit (or send `null`) for any genre.
    #[serde(default)]
    pub genre: Option<String>,
    /// Inclusive lower bound on release year.
    #[serde(default)]
    pub min_year: Option<i32>,
    /// Inclusive upper bound on release year.
    #[serde(default)]
    pub max_year: Option<i32>,
    /// Inclusive minimum rating.
    #[serde(default)]
    pub min_rating: Option<f64>,
}

impl From<FilterRequest> for FilterSpec {
    fn from(r: FilterRequest) -> Self {
        FilterSpec {
            genre: r.genre,
            min_year: r.min_year,
            max_year: r.max_year,
            min_rating: r.min_rating,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MovieView {
    pub rank: u32,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub rating: f64,
    /// Duration text as stored in the catalog (e.g. `2h 22m`).
    pub duration: String,
    /// Duration in minutes, when the text could be read.
    pub duration_minutes: Option<u32>,
    pub image_url: String,
    pub detail_url: String,
}

impl From<&MovieRecord> for MovieView {
    fn from(m: &MovieRecord) -> Self {
        MovieView {
            rank: m.rank,
            title: m.title.clone(),
            year: m.year,
            genre: m.genre.clone(),
            rating: m.rating,
            duration: m.duration.as_str().to_string(),
            duration_minutes: m.duration.minutes(),
            image_url: m.image_url.clone(),
            detail_url: m.detail_url.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
pub struct SummaryView {
    /// Number of movies matching the filters.
    pub count: usize,
    /// Best rating among the matches; absent when nothing matched.
    pub best_rating: Option<f64>,
}

impl From<MatchSummary> for SummaryView {
    fn from(s: MatchSummary) -> Self {
        SummaryView {
            count: s.count,
            best_rating: s.best_rating,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct FilterResponse {
    pub movies: Vec<MovieView>,
    pub summary: SummaryView,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MovieResponse {
    pub movie: MovieView,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
pub struct YearRangeView {
    pub min: i32,
    pub max: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
pub struct RatingRangeView {
    pub min: f64,
    pub max: f64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct FacetsResponse {
    /// Distinct genres, sorted.
    pub genres: Vec<String>,
    pub years: YearRangeView,
    pub ratings: RatingRangeView,
}

impl From<CatalogFacets> for FacetsResponse {
    fn from(f: CatalogFacets) -> Self {
        FacetsResponse {
            genres: f.genres,
            years: YearRangeView {
                min: f.years.min,
                max: f.years.max,
            },
            ratings: RatingRangeView {
                min: f.ratings.min,
                max: f.ratings.max,
            },
        }
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(format!("Invalid JSON body: {} (expected: {})", err, expected)),
        }),
    )
}
