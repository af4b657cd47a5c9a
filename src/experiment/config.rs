//! Sweep configuration.
//!
//! A sweep is the cross product of three geometric ranges (processor
//! counts, job counts, max delays), each point run for a fixed number of
//! trials. Configurations load from JSON; absent fields keep defaults.
//!
//! ```
//! use greedy_order::experiment::SweepConfig;
//!
//! let config = SweepConfig::from_json_str(r#"{ "trials": 5, "seed": 1 }"#).unwrap();
//! assert_eq!(config.trials, 5);
//! assert_eq!(config.processors.values(), vec![2, 4, 8, 16, 32, 64]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Values `start, start*factor, start*factor^2, ...` up to and including `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometricRange {
    /// First value.
    pub start: u64,
    /// Inclusive upper bound.
    pub end: u64,
    /// Multiplicative step.
    pub factor: u64,
}

impl GeometricRange {
    /// Creates a range.
    pub fn new(start: u64, end: u64, factor: u64) -> Self {
        Self { start, end, factor }
    }

    /// A range holding exactly `value`.
    pub fn single(value: u64) -> Self {
        Self::new(value, value, 1)
    }

    /// Enumerates the range.
    ///
    /// Stops early when the step stops growing (factor below 2, or a
    /// zero start), so a malformed range never loops forever.
    pub fn values(&self) -> Vec<u64> {
        let mut out = Vec::new();
        let mut value = self.start;
        while value <= self.end {
            out.push(value);
            match value.checked_mul(self.factor) {
                Some(next) if next > value => value = next,
                _ => break,
            }
        }
        out
    }
}

impl fmt::Display for GeometricRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.end, self.factor)
    }
}

impl FromStr for GeometricRange {
    type Err = String;

    /// Parses `START:END:FACTOR` or a single value `N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u64>()
                .map_err(|e| format!("invalid number '{part}' in range '{s}': {e}"))
        };
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [single] => Ok(Self::single(parse(*single)?)),
            [start, end, factor] => {
                Ok(Self::new(parse(*start)?, parse(*end)?, parse(*factor)?))
            }
            _ => Err(format!("expected START:END:FACTOR or N, got '{s}'")),
        }
    }
}

/// One point of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    /// Processor slots.
    pub num_processors: usize,
    /// Jobs per trial.
    pub num_jobs: usize,
    /// Upper bound of the duration distribution.
    pub max_delay: u32,
}

impl Configuration {
    /// Whether any job has to wait for a processor.
    pub fn has_queuing(&self) -> bool {
        self.num_jobs > self.num_processors
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} processors, {} jobs, {} max_delay",
            self.num_processors, self.num_jobs, self.max_delay
        )
    }
}

/// Parameters of a full experiment sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Processor counts to simulate.
    pub processors: GeometricRange,
    /// Job counts per trial.
    pub jobs: GeometricRange,
    /// Max-delay bounds for duration generation.
    pub max_delays: GeometricRange,
    /// Trials averaged per configuration.
    pub trials: usize,
    /// Master seed for per-trial seeds. `None` = OS entropy.
    pub seed: Option<u64>,
    /// Skip configurations where every job starts immediately.
    pub skip_unqueued: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            processors: GeometricRange::new(2, 64, 2),
            jobs: GeometricRange::new(10, 1000, 10),
            max_delays: GeometricRange::new(100, 10_000, 10),
            trials: 100,
            seed: None,
            skip_unqueued: false,
        }
    }
}

impl SweepConfig {
    /// Creates the default sweep.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the processor range.
    pub fn with_processors(mut self, range: GeometricRange) -> Self {
        self.processors = range;
        self
    }

    /// Sets the job-count range.
    pub fn with_jobs(mut self, range: GeometricRange) -> Self {
        self.jobs = range;
        self
    }

    /// Sets the max-delay range.
    pub fn with_max_delays(mut self, range: GeometricRange) -> Self {
        self.max_delays = range;
        self
    }

    /// Sets the trial count.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Fixes the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables skipping of queue-free configurations.
    pub fn with_skip_unqueued(mut self, skip: bool) -> Self {
        self.skip_unqueued = skip;
        self
    }

    /// Parses a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse, e.to_string()))
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Io, format!("{}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Enumerates sweep points, processors outermost and max delay innermost.
    ///
    /// Values that do not fit the target integer type are dropped; validation
    /// reports them.
    pub fn configurations(&self) -> Vec<Configuration> {
        let mut out = Vec::new();
        for p in self.processors.values() {
            for j in self.jobs.values() {
                for d in self.max_delays.values() {
                    let (Ok(num_processors), Ok(num_jobs), Ok(max_delay)) =
                        (usize::try_from(p), usize::try_from(j), u32::try_from(d))
                    else {
                        continue;
                    };
                    let config = Configuration {
                        num_processors,
                        num_jobs,
                        max_delay,
                    };
                    if self.skip_unqueued && !config.has_queuing() {
                        continue;
                    }
                    out.push(config);
                }
            }
        }
        out
    }
}

/// Failure to load a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Error category.
    pub kind: ConfigErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration loading errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    Io,
    /// The contents are not a valid configuration.
    Parse,
}

impl ConfigError {
    fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConfigErrorKind::Io => write!(f, "cannot read config: {}", self.message),
            ConfigErrorKind::Parse => write!(f, "invalid config: {}", self.message),
        }
    }
}

impl std::error::Error for ConfigError {}
