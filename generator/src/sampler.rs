//! Weighted categorical sampling
//!
//! Picks labels with probability proportional to their weight via a
//! cumulative walk over the entry list. The same label may appear more than
//! once; its weights simply add up.

use crate::rng::SeededRng;

/// An ordered list of (item, positive weight) pairs.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T> WeightedTable<T> {
    /// Build a table from owned entries. `entries` must be non-empty and
    /// every weight positive.
    pub fn new(entries: Vec<(T, f64)>) -> Self {
        let total = entries.iter().map(|(_, w)| w).sum();
        Self { entries, total }
    }

    /// Draw one item, weight-proportionally.
    ///
    /// Walks the list subtracting weights from a scaled uniform draw; if
    /// floating-point drift exhausts the walk, the last entry is returned
    /// rather than failing.
    pub fn sample(&self, rng: &mut SeededRng) -> &T {
        let mut r = rng.uniform() * self.total;
        for (item, weight) in &self.entries {
            r -= weight;
            if r <= 0.0 {
                return item;
            }
        }
        &self.entries[self.entries.len() - 1].0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> WeightedTable<T> {
    /// Build a table by cloning a static weight slice.
    pub fn from_pairs(pairs: &[(T, f64)]) -> Self {
        Self::new(pairs.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heavy_entry_dominates() {
        let table = WeightedTable::new(vec![("heavy", 9.0), ("light", 1.0)]);
        let mut rng = SeededRng::new(12345);

        let draws = 100_000;
        let mut heavy = 0usize;
        for _ in 0..draws {
            if *table.sample(&mut rng) == "heavy" {
                heavy += 1;
            }
        }

        let freq = heavy as f64 / draws as f64;
        assert!(
            (freq - 0.9).abs() < 0.02,
            "expected ~90% heavy draws, got {:.3}",
            freq
        );
    }

    #[test]
    fn test_single_entry_always_wins() {
        let table = WeightedTable::new(vec![("only", 1.0)]);
        let mut rng = SeededRng::new(7);
        for _ in 0..100 {
            assert_eq!(*table.sample(&mut rng), "only");
        }
    }

    #[test]
    fn test_duplicate_labels_aggregate() {
        // "a" carries 3/4 of the mass across two entries
        let table = WeightedTable::new(vec![("a", 1.0), ("b", 1.0), ("a", 2.0)]);
        let mut rng = SeededRng::new(31);

        let draws = 50_000;
        let a_count = (0..draws)
            .filter(|_| *table.sample(&mut rng) == "a")
            .count();
        let freq = a_count as f64 / draws as f64;
        assert!((freq - 0.75).abs() < 0.02, "got {:.3}", freq);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let table = WeightedTable::from_pairs(&[("x", 1.0), ("y", 2.0), ("z", 3.0)]);
        let mut a = SeededRng::new(555);
        let mut b = SeededRng::new(555);
        for _ in 0..200 {
            assert_eq!(table.sample(&mut a), table.sample(&mut b));
        }
    }
}
