//! Simulation errors.
//!
//! The core has exactly one runtime failure: it could not obtain storage
//! for a duration list or for the processor slots. Bad arguments (zero
//! processors, zero max delay) are caller bugs and are caught by debug
//! assertions rather than reported here.

use std::collections::TryReserveError;
use std::fmt;

/// A simulation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimError {
    /// Error category.
    pub kind: SimErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of simulation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimErrorKind {
    /// Storage for `requested` elements could not be reserved.
    AllocationFailure {
        /// Number of elements that were requested.
        requested: usize,
    },
}

impl SimError {
    /// Allocation failure while reserving `requested` elements for `what`.
    pub fn allocation(what: &str, requested: usize) -> Self {
        Self {
            kind: SimErrorKind::AllocationFailure { requested },
            message: format!("could not allocate {what} ({requested} elements)"),
        }
    }

    /// Whether this is an allocation failure.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self.kind, SimErrorKind::AllocationFailure { .. })
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SimError {}

/// Reserves exactly `len` elements in a fresh vector.
pub(crate) fn try_with_capacity<T>(what: &str, len: usize) -> Result<Vec<T>, SimError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_: TryReserveError| SimError::allocation(what, len))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_error_message() {
        let err = SimError::allocation("delay array", 42);
        assert!(err.is_allocation_failure());
        assert_eq!(err.kind, SimErrorKind::AllocationFailure { requested: 42 });
        assert_eq!(err.to_string(), "could not allocate delay array (42 elements)");
    }

    #[test]
    fn test_try_with_capacity_ok() {
        let buf: Vec<u32> = try_with_capacity("slots", 16).unwrap();
        assert!(buf.capacity() >= 16);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_try_with_capacity_overflow() {
        // Exceeds isize::MAX bytes, so reservation must fail without aborting.
        let err = try_with_capacity::<u64>("slots", usize::MAX).unwrap_err();
        assert_eq!(err.kind, SimErrorKind::AllocationFailure { requested: usize::MAX });
    }
}
