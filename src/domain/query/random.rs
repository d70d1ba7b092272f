use rand::Rng;

/// Source of uniform random indices used by the suggestion sampler.
///
/// Implementations are shared across concurrent requests, hence `&self`.
pub trait RandomSource: Send + Sync {
    /// Returns an index drawn uniformly from `0..len`. Callers never pass `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Default source backed by the thread-local RNG. No seeding contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

impl<F> RandomSource for F
where
    F: Fn(usize) -> usize + Send + Sync,
{
    fn pick_index(&self, len: usize) -> usize {
        self(len)
    }
}
