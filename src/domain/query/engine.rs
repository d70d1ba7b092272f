//! Filtering and random suggestion over an immutable catalog.
//!
//! Both operations only read the catalog, so a single engine can serve any number
//! of concurrent callers without locking.

use super::random::{RandomSource, ThreadRngSource};
use crate::domain::model::{FilterSpec, MovieRecord};
use crate::error::NotFound;
use crate::storage::catalog::Catalog;
use std::fmt;

pub struct QueryEngine {
    rng: Box<dyn RandomSource>,
}

impl QueryEngine {
    /// Engine drawing suggestions from the thread-local RNG.
    pub fn new() -> Self {
        Self::with_random_source(ThreadRngSource)
    }

    pub fn with_random_source<R: RandomSource + 'static>(rng: R) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Records of `catalog` satisfying every constraint of `spec`, in catalog order.
    pub fn filter<'a>(&self, catalog: &'a Catalog, spec: &FilterSpec) -> Vec<&'a MovieRecord> {
        filter_records(catalog.records(), spec)
    }

    /// One record drawn uniformly from `filter(catalog, spec)`.
    ///
    /// Draws are independent: the same record may come back on consecutive calls.
    pub fn suggest_random<'a>(
        &self,
        catalog: &'a Catalog,
        spec: &FilterSpec,
    ) -> Result<&'a MovieRecord, NotFound> {
        let candidates = self.filter(catalog, spec);
        if candidates.is_empty() {
            tracing::debug!(?spec, "no candidates for suggestion");
            return Err(NotFound);
        }
        let idx = self.rng.pick_index(candidates.len());
        candidates.get(idx).copied().ok_or(NotFound)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QueryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryEngine").finish_non_exhaustive()
    }
}

/// Stable filter over any sequence of records.
pub fn filter_records<'a, I>(records: I, spec: &FilterSpec) -> Vec<&'a MovieRecord>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    records.into_iter().filter(|m| spec.matches(m)).collect()
}
