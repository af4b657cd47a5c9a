//! Sweep execution.

use log::{debug, error, info};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::error::SimError;
use crate::generator::DelayGenerator;
use crate::models::SortOrder;

use super::config::{Configuration, SweepConfig};
use super::trial::{run_trial, ConfigurationResult, TrialAccumulator};

/// A configuration abandoned because a trial failed.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedConfiguration {
    /// The abandoned sweep point.
    pub configuration: Configuration,
    /// Why it was abandoned.
    pub error: SimError,
}

/// Everything a sweep produced.
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    /// Completed configurations, in sweep order.
    pub results: Vec<ConfigurationResult>,
    /// Configurations that could not be completed.
    pub skipped: Vec<SkippedConfiguration>,
}

impl SweepSummary {
    fn wins(&self, order: Option<SortOrder>) -> usize {
        self.results
            .iter()
            .filter(|r| r.faster_order() == order)
            .count()
    }

    /// Configurations where shortest-first had the lower average makespan.
    pub fn increasing_wins(&self) -> usize {
        self.wins(Some(SortOrder::Ascending))
    }

    /// Configurations where longest-first had the lower average makespan.
    pub fn decreasing_wins(&self) -> usize {
        self.wins(Some(SortOrder::Descending))
    }

    /// Configurations where both orders averaged the same makespan.
    pub fn ties(&self) -> usize {
        self.wins(None)
    }
}

/// Runs every configuration of a [`SweepConfig`].
///
/// # Example
///
/// ```
/// use greedy_order::experiment::{Experiment, GeometricRange, SweepConfig};
///
/// let config = SweepConfig::new()
///     .with_processors(GeometricRange::single(2))
///     .with_jobs(GeometricRange::single(20))
///     .with_max_delays(GeometricRange::single(50))
///     .with_trials(10)
///     .with_seed(42);
/// let summary = Experiment::new(config).run();
/// assert_eq!(summary.results.len(), 1);
/// assert!(summary.skipped.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Experiment {
    config: SweepConfig,
}

impl Experiment {
    /// Creates an experiment over `config`.
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Runs the sweep and collects every result.
    pub fn run(&self) -> SweepSummary {
        self.run_with(|_| {})
    }

    /// Runs the sweep, calling `on_result` as each configuration finishes.
    pub fn run_with<F>(&self, mut on_result: F) -> SweepSummary
    where
        F: FnMut(&ConfigurationResult),
    {
        let mut master = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let mut generator = DelayGenerator::from_seed(0);
        let configurations = self.config.configurations();
        let mut summary = SweepSummary::default();

        info!(
            "sweeping {} configurations x {} trials (seed {:?})",
            configurations.len(),
            self.config.trials,
            self.config.seed
        );

        for config in configurations {
            match self.run_configuration(&mut master, &mut generator, &config) {
                Ok(result) => {
                    debug!(
                        "{config}: {} avg work -> {}/{} inc/dec",
                        result.avg_total_work,
                        result.avg_increasing_ticks,
                        result.avg_decreasing_ticks
                    );
                    on_result(&result);
                    summary.results.push(result);
                }
                Err(err) => {
                    error!("skipping {config}: {err}");
                    summary.skipped.push(SkippedConfiguration {
                        configuration: config,
                        error: err,
                    });
                }
            }
        }

        info!(
            "sweep finished: {} inc wins, {} dec wins, {} ties, {} skipped",
            summary.increasing_wins(),
            summary.decreasing_wins(),
            summary.ties(),
            summary.skipped.len()
        );
        summary
    }

    fn run_configuration(
        &self,
        master: &mut SmallRng,
        generator: &mut DelayGenerator,
        config: &Configuration,
    ) -> Result<ConfigurationResult, SimError> {
        let mut acc = TrialAccumulator::default();
        for _ in 0..self.config.trials {
            let seed = master.next_u64();
            let outcome = run_trial(generator, seed, config)?;
            acc.add(&outcome);
        }
        Ok(acc.finish(config))
    }
}
