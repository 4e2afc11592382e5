//! Random draw abstraction for the session loop.
//!
//! Game transitions never touch an RNG directly; they draw through
//! [`RandomSource`] so tests can replay sessions with a fixed sequence.

use rand::Rng;

/// Uniform random draws as the games consume them.
///
/// # Implementations
///
/// - [`ThreadRandom`] (production, uses `rand::thread_rng()`)
/// - [`FixedRandom`] for deterministic testing (returns a fixed sequence)
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[min, max]`, inclusive on both ends.
    fn random_range(&self, min: i32, max: i32) -> i32;

    /// Uniform index into a candidate set of `len` elements.
    ///
    /// `len` must be non-zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production random source using the thread-local RNG.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Create a new ThreadRandom.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Fixed random source for deterministic testing.
///
/// Returns values from a provided sequence, cycling if needed, clamped into
/// the requested range. Thread-safe via an atomic cursor.
#[derive(Debug)]
pub struct FixedRandom {
    values: Vec<i32>,
    index: std::sync::atomic::AtomicUsize,
}

impl FixedRandom {
    /// Create a new FixedRandom with the given sequence of values.
    pub fn new(values: Vec<i32>) -> Self {
        assert!(!values.is_empty(), "FixedRandom needs at least one value");
        Self {
            values,
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a FixedRandom that always returns the same value.
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }

    fn next_value(&self) -> i32 {
        let idx = self
            .index
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.values[idx % self.values.len()]
    }
}

impl RandomSource for FixedRandom {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        self.next_value().clamp(min, max)
    }

    fn pick_index(&self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_value().max(0) as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_range_bounds() {
        let rng = ThreadRandom::new();
        for _ in 0..100 {
            let value = rng.random_range(1, 6);
            assert!((1..=6).contains(&value), "Value {} out of range", value);
        }
    }

    #[test]
    fn test_thread_random_pick_index_bounds() {
        let rng = ThreadRandom::new();
        for _ in 0..100 {
            assert!(rng.pick_index(8) < 8);
        }
    }

    #[test]
    fn test_fixed_random_constant() {
        let rng = FixedRandom::constant(3);
        assert_eq!(rng.random_range(1, 6), 3);
        assert_eq!(rng.random_range(1, 6), 3);
        assert_eq!(rng.random_range(4, 6), 4); // Clamped to min
        assert_eq!(rng.random_range(1, 2), 2); // Clamped to max
    }

    #[test]
    fn test_fixed_random_sequence_cycles() {
        let rng = FixedRandom::new(vec![1, 5, 2]);
        assert_eq!(rng.random_range(1, 6), 1);
        assert_eq!(rng.random_range(1, 6), 5);
        assert_eq!(rng.random_range(1, 6), 2);
        // Cycles back
        assert_eq!(rng.random_range(1, 6), 1);
    }

    #[test]
    fn test_fixed_random_pick_index_clamps() {
        let rng = FixedRandom::new(vec![0, 2, 19, -4]);
        assert_eq!(rng.pick_index(5), 0);
        assert_eq!(rng.pick_index(5), 2);
        assert_eq!(rng.pick_index(5), 4); // Clamped to last index
        assert_eq!(rng.pick_index(5), 0); // Negative clamped to zero
    }
}
