//! Input validation for experiment sweeps.
//!
//! Checks a [`SweepConfig`] before any trial runs. The simulation core
//! treats zero processors or a zero delay bound as caller bugs, so the
//! driver rejects them here. Detects:
//! - Zero processors, zero max delay, zero trials
//! - Empty or non-terminating ranges
//! - Max delays that do not fit a job duration
//! - Sweeps that enumerate no configuration at all

use crate::experiment::{GeometricRange, SweepConfig};
use crate::models::JobDuration;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Processor range includes zero.
    ZeroProcessors,
    /// Max-delay range includes zero.
    ZeroMaxDelay,
    /// No trials requested.
    ZeroTrials,
    /// A range starts after its end.
    EmptyRange,
    /// A range spans several values but its factor cannot reach them.
    InvalidFactor,
    /// A value does not fit its target type.
    OutOfRange,
    /// The sweep enumerates no configuration.
    EmptySweep,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a sweep configuration.
///
/// Checks:
/// 1. Each range is non-empty and its factor is at least 2 when it spans values
/// 2. No processor count is zero
/// 3. No max delay is zero or exceeds the duration type
/// 4. At least one trial per configuration
/// 5. The sweep yields at least one configuration
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &SweepConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let ranges_ok = [
        check_range("processors", &config.processors, &mut errors),
        check_range("jobs", &config.jobs, &mut errors),
        check_range("max_delays", &config.max_delays, &mut errors),
    ]
    .iter()
    .all(|&ok| ok);

    if config.processors.values().contains(&0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroProcessors,
            "Processor range includes 0; at least one processor is required",
        ));
    }

    let delays = config.max_delays.values();
    if delays.contains(&0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroMaxDelay,
            "Max-delay range includes 0; the bound must be at least 1",
        ));
    }
    if let Some(&too_big) = delays.iter().find(|&&d| d > u64::from(JobDuration::MAX)) {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("Max delay {too_big} exceeds {}", JobDuration::MAX),
        ));
    }

    if config.trials == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroTrials,
            "Trial count must be at least 1",
        ));
    }

    if ranges_ok && errors.is_empty() && config.configurations().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySweep,
            "No configuration left to run (every point skipped as queue-free)",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Returns `false` (and records why) if `range` is malformed.
fn check_range(name: &str, range: &GeometricRange, errors: &mut Vec<ValidationError>) -> bool {
    if range.start > range.end {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRange,
            format!("Range '{name}' starts at {} after its end {}", range.start, range.end),
        ));
        return false;
    }
    if range.start < range.end && (range.factor < 2 || range.start == 0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidFactor,
            format!("Range '{name}' ({range}) never advances past its start"),
        ));
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(config: &SweepConfig) -> Vec<ValidationErrorKind> {
        validate_config(config)
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&SweepConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_processors() {
        let config = SweepConfig::new().with_processors(GeometricRange::single(0));
        assert_eq!(kinds(&config), vec![ValidationErrorKind::ZeroProcessors]);
    }

    #[test]
    fn test_zero_max_delay() {
        let config = SweepConfig::new().with_max_delays(GeometricRange::single(0));
        assert_eq!(kinds(&config), vec![ValidationErrorKind::ZeroMaxDelay]);
    }

    #[test]
    fn test_zero_jobs_allowed() {
        let config = SweepConfig::new().with_jobs(GeometricRange::single(0));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_trials() {
        let config = SweepConfig::new().with_trials(0);
        assert_eq!(kinds(&config), vec![ValidationErrorKind::ZeroTrials]);
    }

    #[test]
    fn test_empty_range() {
        let config = SweepConfig::new().with_jobs(GeometricRange::new(100, 10, 10));
        assert_eq!(kinds(&config), vec![ValidationErrorKind::EmptyRange]);
    }

    #[test]
    fn test_invalid_factor() {
        let config = SweepConfig::new().with_processors(GeometricRange::new(2, 64, 1));
        assert_eq!(kinds(&config), vec![ValidationErrorKind::InvalidFactor]);

        let config = SweepConfig::new().with_jobs(GeometricRange::new(0, 100, 10));
        assert_eq!(kinds(&config), vec![ValidationErrorKind::InvalidFactor]);
    }

    #[test]
    fn test_max_delay_out_of_range() {
        let config = SweepConfig::new().with_max_delays(GeometricRange::single(1 << 40));
        assert_eq!(kinds(&config), vec![ValidationErrorKind::OutOfRange]);
    }

    #[test]
    fn test_everything_skipped() {
        let config = SweepConfig::new()
            .with_processors(GeometricRange::single(64))
            .with_jobs(GeometricRange::new(8, 64, 2))
            .with_skip_unqueued(true);
        assert_eq!(kinds(&config), vec![ValidationErrorKind::EmptySweep]);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let config = SweepConfig::new()
            .with_processors(GeometricRange::single(0))
            .with_max_delays(GeometricRange::single(0))
            .with_trials(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| !e.message.is_empty()));
    }
}
