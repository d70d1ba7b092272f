use super::MovieRecord;
use serde::{Deserialize, Serialize};

/// Constraints for a single catalog query.
///
/// Every field is optional; an unset field places no constraint on the result.
/// Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact, case-sensitive genre match. `None` means any genre.
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub min_year: Option<i32>,
    #[serde(default)]
    pub max_year: Option<i32>,
    #[serde(default)]
    pub min_rating: Option<f64>,
}

impl FilterSpec {
    /// Spec with no constraints; matches every record.
    pub fn any() -> Self {
        Self::default()
    }

    /// Starting point offered by the suggestion view: from 1980 on, rated 8.0 or higher.
    pub fn suggestion_defaults() -> Self {
        Self {
            genre: None,
            min_year: Some(1980),
            max_year: None,
            min_rating: Some(8.0),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    pub fn with_max_year(mut self, year: i32) -> Self {
        self.max_year = Some(year);
        self
    }

    pub fn with_year_range(self, lo: i32, hi: i32) -> Self {
        self.with_min_year(lo).with_max_year(hi)
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.genre.is_none()
            && self.min_year.is_none()
            && self.max_year.is_none()
            && self.min_rating.is_none()
    }

    /// Conjunction of all constraints that are set.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        if let Some(genre) = self.genre.as_deref() {
            if movie.genre != genre {
                return false;
            }
        }
        if let Some(lo) = self.min_year {
            if movie.year < lo {
                return false;
            }
        }
        if let Some(hi) = self.max_year {
            if movie.year > hi {
                return false;
            }
        }
        if let Some(min) = self.min_rating {
            if movie.rating < min {
                return false;
            }
        }
        true
    }
}
