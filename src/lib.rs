pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::CatalogService;
pub use domain::model::{FilterSpec, MovieRecord, Runtime};
pub use domain::query::{MatchSummary, QueryEngine, RandomSource, ThreadRngSource};
pub use error::{EmptyCatalogError, LoadError, NotFound};
pub use storage::catalog::{Catalog, CatalogFacets, Range};
