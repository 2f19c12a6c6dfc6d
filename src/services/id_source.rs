use std::ops::RangeInclusive;

use rand::Rng;

/// Ids handed to products created while the API is unavailable.
pub const OPTIMISTIC_ID_RANGE: RangeInclusive<i64> = 100..=1099;

/// Supplies ids for optimistic products.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&self) -> i64 {
        rand::thread_rng().gen_range(OPTIMISTIC_ID_RANGE)
    }
}

impl<F> IdSource for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn next_id(&self) -> i64 {
        self()
    }
}
