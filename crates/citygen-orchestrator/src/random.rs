//! Injectable randomness for building counts and fallback samples.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};

pub trait RandomSource: Send + Sync {
    /// Uniform pick from a non-empty inclusive range.
    fn pick_count(&self, range: RangeInclusive<usize>) -> usize;

    /// Uniform sample of distinct entries. `amount` is capped at the pool size.
    fn sample(&self, pool: &[String], amount: usize) -> Vec<String>;
}

/// Thread-local RNG. Used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_count(&self, range: RangeInclusive<usize>) -> usize {
        rand::thread_rng().gen_range(range)
    }

    fn sample(&self, pool: &[String], amount: usize) -> Vec<String> {
        pool.choose_multiple(&mut rand::thread_rng(), amount.min(pool.len()))
            .cloned()
            .collect()
    }
}

/// Reproducible source seeded up front.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_count(&self, range: RangeInclusive<usize>) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(range)
    }

    fn sample(&self, pool: &[String], amount: usize) -> Vec<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pool.choose_multiple(&mut *rng, amount.min(pool.len()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pool() -> Vec<String> {
        ["house", "church", "market", "castle", "tower"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_thread_random_count_within_range() {
        for _ in 0..200 {
            let n = ThreadRandom.pick_count(4..=7);
            assert!((4..=7).contains(&n));
        }
    }

    #[test]
    fn test_sample_is_distinct_and_from_pool() {
        let pool = pool();
        for _ in 0..50 {
            let picked = ThreadRandom.sample(&pool, 3);
            assert_eq!(picked.len(), 3);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 3);
            assert!(picked.iter().all(|b| pool.contains(b)));
        }
    }

    #[test]
    fn test_sample_capped_at_pool_size() {
        let pool = pool();
        assert_eq!(ThreadRandom.sample(&pool, 12).len(), pool.len());
        assert!(ThreadRandom.sample(&[], 3).is_empty());
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let pool = pool();

        for _ in 0..10 {
            assert_eq!(a.pick_count(8..=12), b.pick_count(8..=12));
        }
        assert_eq!(a.sample(&pool, 2), b.sample(&pool, 2));
    }
}
