//! Random response selection.
//!
//! The classifier never touches a RNG directly; it asks a [`ResponsePicker`]
//! for an index into the matched category's response pool. Tests inject a
//! fixed or seeded picker to pin the outcome down.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Chooses an index into a response pool.
pub trait ResponsePicker: Send + Sync {
    /// Return an index in `0..len`. `len` is always at least 1.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform selection from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl ResponsePicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform selection from a seeded RNG, reproducible across runs.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ResponsePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        // Poisoning leaves the RNG state intact.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(0..len)
    }
}

/// Always picks the same index, clamped to the pool size.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl ResponsePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_stays_in_range() {
        let picker = ThreadRngPicker;
        for _ in 0..200 {
            assert!(picker.pick(3) < 3);
        }
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let a = SeededPicker::new(42);
        let b = SeededPicker::new(42);
        let seq_a: Vec<usize> = (0..20).map(|_| a.pick(5)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.pick(5)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_fixed_picker_clamps() {
        assert_eq!(FixedPicker(0).pick(4), 0);
        assert_eq!(FixedPicker(2).pick(4), 2);
        assert_eq!(FixedPicker(9).pick(4), 3);
        assert_eq!(FixedPicker(9).pick(1), 0);
    }

    #[test]
    fn test_thread_rng_covers_every_index() {
        let picker = ThreadRngPicker;
        let mut seen = [false; 2];
        for _ in 0..500 {
            seen[picker.pick(2)] = true;
        }
        assert!(seen.iter().all(|s| *s), "Both indices should be drawn");
    }
}
