//! The catalog service.
//!
//! Sits between the HTTP handlers and the core. It owns:
//! 1.  The shared, immutable `Catalog` loaded at startup.
//! 2.  The `QueryEngine` used for filtering and random suggestions.
//!
//! Nothing here is mutable after construction, so the service is shared behind a plain `Arc`.

use crate::domain::model::{FilterSpec, MovieRecord};
use crate::domain::query::{MatchSummary, QueryEngine};
use crate::error::{EmptyCatalogError, LoadError, NotFound};
use crate::storage::catalog::{Catalog, CatalogFacets};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of a filter query together with its headline numbers.
#[derive(Debug)]
pub struct FilterOutcome<'a> {
    pub movies: Vec<&'a MovieRecord>,
    pub summary: MatchSummary,
}

pub struct CatalogService {
    catalog: Arc<Catalog>,
    engine: QueryEngine,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

impl CatalogService {
    /// Loads the catalog from `path`. A load failure is fatal for the caller.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let catalog = Catalog::load(path)?;
        let mut service = Self::new(Arc::new(catalog), QueryEngine::new());
        service.source = Some(path.to_path_buf());
        Ok(service)
    }

    pub fn new(catalog: Arc<Catalog>, engine: QueryEngine) -> Self {
        Self {
            catalog,
            engine,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn facets(&self) -> Result<CatalogFacets, EmptyCatalogError> {
        self.catalog.facets()
    }

    pub fn filter(&self, spec: &FilterSpec) -> FilterOutcome<'_> {
        let movies = self.engine.filter(&self.catalog, spec);
        let summary = MatchSummary::of(movies.iter().copied());
        tracing::debug!(?spec, matched = summary.count, "filter");
        FilterOutcome { movies, summary }
    }

    pub fn suggest(&self, spec: &FilterSpec) -> Result<&MovieRecord, NotFound> {
        let movie = self.engine.suggest_random(&self.catalog, spec)?;
        tracing::debug!(rank = movie.rank, title = %movie.title, "suggestion drawn");
        Ok(movie)
    }

    pub fn movie(&self, rank: u32) -> Option<&MovieRecord> {
        self.catalog.by_rank(rank)
    }
}
