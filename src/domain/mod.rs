pub mod model;
pub mod query;
