//! Contiguous partition enumeration.
//!
//! Every way to split n ordered levels into exactly k contiguous,
//! non-empty groups corresponds to one choice of k−1 split points among
//! the n−1 gaps between consecutive levels: C(n−1, k−1) partitions in
//! total. [`Partitions`] enumerates them lazily in ascending
//! lexicographic split-point order.
//!
//! The iterator is the pluggable search-strategy seam: callers consume
//! an opaque, finite, deterministically ordered sequence and may
//! short-circuit at any point, so a pruned or DP-based generator can
//! replace the exhaustive one without touching callers.

use std::ops::Range;

/// One contiguous partition of `0..n` into non-empty index spans.
///
/// Spans are consecutive, non-overlapping, and their union is exactly
/// the partitioned range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Half-open index ranges, in order.
    pub spans: Vec<Range<usize>>,
}

impl Partition {
    fn from_splits(n: usize, splits: &[usize]) -> Self {
        let mut spans = Vec::with_capacity(splits.len() + 1);
        let mut prev = 0;
        for &split in splits {
            spans.push(prev..split);
            prev = split;
        }
        spans.push(prev..n);
        Self { spans }
    }

    /// Number of groups (k).
    pub fn group_count(&self) -> usize {
        self.spans.len()
    }

    /// Group sizes, in order.
    pub fn sizes(&self) -> Vec<usize> {
        self.spans.iter().map(|s| s.len()).collect()
    }

    /// Whether the spans are contiguous, non-empty, and cover `0..n`
    /// exactly — the invariant every generated partition upholds.
    pub fn covers(&self, n: usize) -> bool {
        if self.spans.is_empty() {
            return false;
        }
        let mut expected = 0;
        for span in &self.spans {
            if span.start != expected || span.is_empty() {
                return false;
            }
            expected = span.end;
        }
        expected == n
    }
}

/// Lazy enumerator over all contiguous partitions of `n` levels into
/// `k` groups.
///
/// Finite, restartable (construct a new one), and deterministic.
/// Invalid combinations (`k == 0`, `k > n`, `n == 0`) yield nothing;
/// the constructor never panics. Callers impose wall-clock budgets by
/// bounding n and k before invocation, or by short-circuiting.
#[derive(Debug, Clone)]
pub struct Partitions {
    n: usize,
    /// Next split-point combination to yield; `None` when exhausted.
    splits: Option<Vec<usize>>,
}

impl Partitions {
    /// Creates an enumerator for `n` levels and `k` groups.
    pub fn new(n: usize, k: usize) -> Self {
        let splits = if (1..=n).contains(&k) {
            Some((1..k).collect())
        } else {
            None
        };
        Self { n, splits }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        let splits = self.splits.as_mut()?;
        let partition = Partition::from_splits(self.n, splits);

        // Advance to the next combination of k−1 ascending split points
        // drawn from 1..n.
        let m = splits.len();
        let mut exhausted = true;
        let mut i = m;
        while i > 0 {
            i -= 1;
            // Largest admissible value at position i leaves room for the
            // positions after it: n − m + i.
            if splits[i] < self.n - m + i {
                splits[i] += 1;
                for j in i + 1..m {
                    splits[j] = splits[j - 1] + 1;
                }
                exhausted = false;
                break;
            }
        }
        if exhausted {
            self.splits = None;
        }

        Some(partition)
    }
}

/// Number of contiguous partitions of `n` levels into `k` groups:
/// C(n−1, k−1). Zero for invalid combinations.
pub fn partition_count(n: usize, k: usize) -> u64 {
    if n == 0 || k == 0 || k > n {
        return 0;
    }
    binomial((n - 1) as u64, (k - 1) as u64)
}

fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // Stays integral: after this step, result == C(n, i + 1).
        result = result * (n - i) / (i + 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_binomial() {
        for (n, k) in [(1, 1), (4, 2), (5, 2), (5, 3), (10, 3), (10, 4), (12, 6)] {
            let enumerated = Partitions::new(n, k).count() as u64;
            assert_eq!(
                enumerated,
                partition_count(n, k),
                "count mismatch for n={n}, k={k}"
            );
        }
        assert_eq!(partition_count(10, 4), 84); // C(9, 3)
        assert_eq!(partition_count(5, 3), 6); // C(4, 2)
    }

    #[test]
    fn test_every_partition_covers_range() {
        for (n, k) in [(4, 2), (6, 3), (7, 5)] {
            for partition in Partitions::new(n, k) {
                assert!(partition.covers(n));
                assert_eq!(partition.group_count(), k);
                assert_eq!(partition.sizes().iter().sum::<usize>(), n);
                assert!(partition.sizes().iter().all(|&size| size >= 1));
            }
        }
    }

    #[test]
    fn test_single_group() {
        let all: Vec<Partition> = Partitions::new(5, 1).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].spans, vec![0..5]);
    }

    #[test]
    fn test_singleton_groups() {
        // k = n: each level its own group.
        let all: Vec<Partition> = Partitions::new(4, 4).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].sizes(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_invalid_combinations_yield_nothing() {
        assert_eq!(Partitions::new(3, 0).count(), 0);
        assert_eq!(Partitions::new(3, 4).count(), 0);
        assert_eq!(Partitions::new(0, 1).count(), 0);
        assert_eq!(partition_count(3, 4), 0);
        assert_eq!(partition_count(0, 1), 0);
    }

    #[test]
    fn test_deterministic_ascending_order() {
        let sizes: Vec<Vec<usize>> = Partitions::new(5, 3).map(|p| p.sizes()).collect();
        // Split points advance lexicographically: (1,2), (1,3), (1,4),
        // (2,3), (2,4), (3,4).
        assert_eq!(
            sizes,
            vec![
                vec![1, 1, 3],
                vec![1, 2, 2],
                vec![1, 3, 1],
                vec![2, 1, 2],
                vec![2, 2, 1],
                vec![3, 1, 1],
            ]
        );
    }

    #[test]
    fn test_restartable() {
        let first: Vec<Partition> = Partitions::new(6, 3).collect();
        let second: Vec<Partition> = Partitions::new(6, 3).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_circuit() {
        // Taking a prefix must not exhaust or disturb a fresh iterator.
        let prefix: Vec<Partition> = Partitions::new(8, 4).take(3).collect();
        let full: Vec<Partition> = Partitions::new(8, 4).collect();
        assert_eq!(prefix[..], full[..3]);
    }
}
