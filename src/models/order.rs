//! Job ordering direction.
//!
//! The two greedy list orders under comparison:
//! - **Ascending**: shortest job first (the SPT list order).
//! - **Descending**: longest job first (Graham's LPT list order).
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::JobDuration;

/// Direction in which a duration list is sorted before dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Non-decreasing durations (shortest first).
    Ascending,
    /// Non-increasing durations (longest first).
    Descending,
}

impl SortOrder {
    /// Both orders, ascending first.
    pub const ALL: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    /// Compares two durations in this direction.
    #[inline]
    pub fn compare(self, a: JobDuration, b: JobDuration) -> Ordering {
        match self {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        }
    }

    /// Stable in-place sort of `durations` in this direction.
    pub fn sort(self, durations: &mut [JobDuration]) {
        durations.sort_by(|&a, &b| self.compare(a, b));
    }

    /// Whether every element is ordered with respect to its successor.
    pub fn is_sorted(self, durations: &[JobDuration]) -> bool {
        durations
            .windows(2)
            .all(|w| self.compare(w[0], w[1]) != Ordering::Greater)
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ascending"),
            SortOrder::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" | "increasing" | "inc" => Ok(SortOrder::Ascending),
            "descending" | "desc" | "decreasing" | "dec" => Ok(SortOrder::Descending),
            other => Err(format!("unknown sort order '{other}'")),
        }
    }
}
