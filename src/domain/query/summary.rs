use crate::domain::model::MovieRecord;
use serde::Serialize;

/// Headline numbers for a filtered result: how many movies matched and the best rating among them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchSummary {
    pub count: usize,
    pub best_rating: Option<f64>,
}

impl MatchSummary {
    pub fn of<'a>(movies: impl IntoIterator<Item = &'a MovieRecord>) -> Self {
        movies.into_iter().fold(
            MatchSummary {
                count: 0,
                best_rating: None,
            },
            |acc, m| MatchSummary {
                count: acc.count + 1,
                best_rating: Some(acc.best_rating.map_or(m.rating, |b| b.max(m.rating))),
            },
        )
    }
}
