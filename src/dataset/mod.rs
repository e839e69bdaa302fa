//! The array of values being sorted
//!
//! A [`Dataset`] owns the values and the `min_val` / `max_val` bounds used to
//! scale bar heights. The bounds are computed once when the values are loaded
//! and are never recomputed: sorting only reorders values in place, so the
//! bounds of the original list stay correct for the whole run.

use rand::Rng;
use std::ops::Range;

/// Mutable list of integers plus its rendering bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i32>,
    min_val: i32,
    max_val: i32,
}

impl Dataset {
    /// Load a list of values, computing its bounds.
    ///
    /// An empty list gets bounds of `0..=0`.
    pub fn new(values: Vec<i32>) -> Self {
        let min_val = values.iter().copied().min().unwrap_or(0);
        let max_val = values.iter().copied().max().unwrap_or(0);
        Dataset {
            values,
            min_val,
            max_val,
        }
    }

    /// Generate `count` values uniformly drawn from `range` (upper bound exclusive)
    pub fn random<R: Rng + ?Sized>(count: usize, range: Range<i32>, rng: &mut R) -> Self {
        let values = (0..count).map(|_| rng.gen_range(range.clone())).collect();
        Self::new(values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Value at `index`. Panics when out of bounds, like slice indexing.
    pub fn get(&self, index: usize) -> i32 {
        self.values[index]
    }

    /// Swap two positions in place. The bounds are left untouched.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    pub fn min_val(&self) -> i32 {
        self.min_val
    }

    pub fn max_val(&self) -> i32 {
        self.max_val
    }

    /// Whether the values are in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl From<Vec<i32>> for Dataset {
    fn from(values: Vec<i32>) -> Self {
        Dataset::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds_computed_on_load() {
        let data = Dataset::new(vec![42, 7, 99, 13]);
        assert_eq!(data.min_val(), 7);
        assert_eq!(data.max_val(), 99);
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn test_bounds_survive_swaps() {
        let mut data = Dataset::new(vec![3, 1, 2]);
        data.swap(0, 1);
        data.swap(1, 2);
        assert_eq!(data.values(), &[1, 2, 3]);
        assert_eq!(data.min_val(), 1);
        assert_eq!(data.max_val(), 3);
        assert!(data.is_sorted());
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::new(Vec::new());
        assert!(data.is_empty());
        assert_eq!(data.min_val(), 0);
        assert_eq!(data.max_val(), 0);
        assert!(data.is_sorted());
    }

    #[test]
    fn test_random_respects_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = Dataset::random(200, 10..100, &mut rng);
        assert_eq!(data.len(), 200);
        assert!(data.values().iter().all(|v| (10..100).contains(v)));
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let a = Dataset::random(32, 0..1000, &mut StdRng::seed_from_u64(99));
        let b = Dataset::random(32, 0..1000, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
