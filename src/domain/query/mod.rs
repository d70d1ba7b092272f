pub mod engine;
pub mod random;
pub mod summary;

pub use engine::{filter_records, QueryEngine};
pub use random::{RandomSource, ThreadRngSource};
pub use summary::MatchSummary;
