//! Ordering experiments.
//!
//! Sweeps processor counts, job counts and duration bounds; for each point
//! runs many trials comparing shortest-first against longest-first dispatch
//! on identical job sets, and reports the averaged makespans.
//!
//! # Usage
//!
//! ```
//! use greedy_order::experiment::{
//!     write_report, Experiment, GeometricRange, OutputFormat, SweepConfig,
//! };
//!
//! let config = SweepConfig::new()
//!     .with_processors(GeometricRange::new(2, 4, 2))
//!     .with_jobs(GeometricRange::single(50))
//!     .with_max_delays(GeometricRange::single(100))
//!     .with_trials(3)
//!     .with_seed(1);
//! let summary = Experiment::new(config).run();
//!
//! let mut out = Vec::new();
//! write_report(&mut out, &summary.results, OutputFormat::Tsv).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
//! ```

mod config;
mod output;
mod runner;
mod trial;

pub use config::{ConfigError, ConfigErrorKind, Configuration, GeometricRange, SweepConfig};
pub use output::{write_report, OutputFormat, ReportWriter};
pub use runner::{Experiment, SkippedConfiguration, SweepSummary};
pub use trial::{run_trial, ConfigurationResult, TrialOutcome};
