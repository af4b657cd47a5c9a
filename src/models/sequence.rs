//! Ordered job duration lists.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::{JobDuration, SortOrder};

/// An immutable, sorted list of job durations.
///
/// Produced by [`crate::generator::DelayGenerator`]. Jobs carry no identity
/// beyond their duration, so the list is the whole workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSequence {
    durations: Vec<JobDuration>,
    order: SortOrder,
}

impl DurationSequence {
    /// Sorts `durations` in `order` and wraps them.
    pub fn new(mut durations: Vec<JobDuration>, order: SortOrder) -> Self {
        order.sort(&mut durations);
        Self { durations, order }
    }

    /// The direction this sequence is sorted in.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Durations in dispatch order.
    pub fn as_slice(&self) -> &[JobDuration] {
        &self.durations
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Whether there are no jobs.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Sum of all durations (total processor-ticks of work).
    pub fn total_work(&self) -> u64 {
        self.durations.iter().map(|&d| u64::from(d)).sum()
    }

    /// Longest single duration, or 0 when empty.
    pub fn max_duration(&self) -> JobDuration {
        self.durations.iter().copied().max().unwrap_or(0)
    }

    /// The same multiset sorted the other way.
    pub fn reversed(&self) -> Self {
        let mut durations = self.durations.clone();
        durations.reverse();
        Self {
            durations,
            order: self.order.reverse(),
        }
    }

    /// Consumes the sequence, returning the underlying durations.
    pub fn into_vec(self) -> Vec<JobDuration> {
        self.durations
    }
}

impl Deref for DurationSequence {
    type Target = [JobDuration];

    fn deref(&self) -> &[JobDuration] {
        &self.durations
    }
}

impl AsRef<[JobDuration]> for DurationSequence {
    fn as_ref(&self) -> &[JobDuration] {
        &self.durations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts() {
        let seq = DurationSequence::new(vec![3, 9, 1], SortOrder::Descending);
        assert_eq!(seq.as_slice(), &[9, 3, 1]);
        assert_eq!(seq.order(), SortOrder::Descending);
    }

    #[test]
    fn test_aggregates() {
        let seq = DurationSequence::new(vec![4, 2, 6], SortOrder::Ascending);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.total_work(), 12);
        assert_eq!(seq.max_duration(), 6);
    }

    #[test]
    fn test_empty() {
        let seq = DurationSequence::new(Vec::new(), SortOrder::Ascending);
        assert!(seq.is_empty());
        assert_eq!(seq.total_work(), 0);
        assert_eq!(seq.max_duration(), 0);
    }

    #[test]
    fn test_reversed_matches_opposite_sort() {
        let raw = vec![5, 2, 8, 2, 1];
        let inc = DurationSequence::new(raw.clone(), SortOrder::Ascending);
        let dec = DurationSequence::new(raw, SortOrder::Descending);
        assert_eq!(inc.reversed(), dec);
        assert_eq!(dec.reversed(), inc);
        assert_eq!(inc.into_vec(), vec![1, 2, 2, 5, 8]);
    }

    #[test]
    fn test_total_work_no_overflow() {
        let seq = DurationSequence::new(vec![u32::MAX, u32::MAX], SortOrder::Ascending);
        assert_eq!(seq.total_work(), 2 * u64::from(u32::MAX));
    }
}
