pub mod catalog;

pub use catalog::{Catalog, CatalogFacets, Range};
