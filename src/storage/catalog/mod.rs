//! In-memory, immutable movie catalog.
//!
//! The catalog is read once from its backing CSV file and never mutated afterwards.
//! Facet helpers (`distinct_genres`, `year_range`, `rating_range`) feed the selection
//! controls of the presentation layer.

use crate::domain::model::MovieRecord;
use crate::error::{EmptyCatalogError, LoadError};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

pub mod loader;

pub use loader::REQUIRED_COLUMNS;

/// Inclusive `(min, max)` pair of a scalar facet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

/// All facets of a catalog in one bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogFacets {
    pub genres: Vec<String>,
    pub years: Range<i32>,
    pub ratings: Range<f64>,
}

/// The full set of movie records, in file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    by_rank: HashMap<u32, usize>,
}

impl Catalog {
    /// Reads the catalog from a CSV file. Fails on any malformed row and on an empty file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        loader::load_path(path.as_ref())
    }

    /// Builds a catalog from already-parsed records, preserving their order.
    ///
    /// Only rank uniqueness is checked; an empty catalog is allowed here.
    pub fn from_records(records: Vec<MovieRecord>) -> Result<Self, LoadError> {
        let mut by_rank = HashMap::with_capacity(records.len());
        for (idx, movie) in records.iter().enumerate() {
            if by_rank.insert(movie.rank, idx).is_some() {
                return Err(LoadError::DuplicateRank {
                    rank: movie.rank,
                    // header is line 1
                    line: idx as u64 + 2,
                });
            }
        }
        Ok(Self { records, by_rank })
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_rank(&self, rank: u32) -> Option<&MovieRecord> {
        self.by_rank.get(&rank).map(|&idx| &self.records[idx])
    }

    /// Unique genres, sorted.
    pub fn distinct_genres(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|m| m.genre.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn year_range(&self) -> Result<Range<i32>, EmptyCatalogError> {
        let mut years = self.records.iter().map(|m| m.year);
        let first = years.next().ok_or(EmptyCatalogError)?;
        Ok(years.fold(Range { min: first, max: first }, |r, y| Range {
            min: r.min.min(y),
            max: r.max.max(y),
        }))
    }

    pub fn rating_range(&self) -> Result<Range<f64>, EmptyCatalogError> {
        let mut ratings = self.records.iter().map(|m| m.rating);
        let first = ratings.next().ok_or(EmptyCatalogError)?;
        Ok(ratings.fold(Range { min: first, max: first }, |r, v| Range {
            min: r.min.min(v),
            max: r.max.max(v),
        }))
    }

    pub fn facets(&self) -> Result<CatalogFacets, EmptyCatalogError> {
        Ok(CatalogFacets {
            genres: self.distinct_genres(),
            years: self.year_range()?,
            ratings: self.rating_range()?,
        })
    }
}
