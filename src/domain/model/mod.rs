//! Domain model for catalog rows and query constraints.

use serde::{Deserialize, Serialize};

pub mod filter;
pub mod runtime;

pub use filter::FilterSpec;
pub use runtime::Runtime;

/// One row of the catalog.
///
/// `rank` is unique across a loaded catalog and doubles as the ranking position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub rank: u32,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub rating: f64,
    pub duration: Runtime,
    pub image_url: String,
    pub detail_url: String,
}

/// Inclusive bounds for ratings stored in the catalog.
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;
