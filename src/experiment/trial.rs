//! One trial and per-configuration averages.
//!
//! A trial draws one job set from a seed and runs it twice: sorted
//! ascending, then (after reseeding to the same value) descending. Both
//! runs therefore see the same multiset of durations.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::generator::DelayGenerator;
use crate::models::{SortOrder, Ticks};
use crate::simulator::ScheduleSimulator;

use super::config::Configuration;

/// Scalar results of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Sum of the generated durations.
    pub total_work: u64,
    /// Makespan with shortest jobs dispatched first.
    pub increasing_ticks: Ticks,
    /// Makespan with longest jobs dispatched first.
    pub decreasing_ticks: Ticks,
}

impl TrialOutcome {
    /// Makespan for `order`.
    pub fn ticks(&self, order: SortOrder) -> Ticks {
        match order {
            SortOrder::Ascending => self.increasing_ticks,
            SortOrder::Descending => self.decreasing_ticks,
        }
    }
}

/// Runs a single trial of `config` from `seed`.
///
/// # Errors
/// `AllocationFailure` from generation or simulation; the trial is void.
pub fn run_trial(
    generator: &mut DelayGenerator,
    seed: u64,
    config: &Configuration,
) -> Result<TrialOutcome, SimError> {
    let simulator = ScheduleSimulator::new(config.num_processors);

    generator.reseed(seed);
    let increasing =
        generator.generate(config.num_jobs, config.max_delay, SortOrder::Ascending)?;
    let total_work = increasing.total_work();
    let increasing_ticks = simulator.simulate(&increasing)?;

    generator.reseed(seed);
    let decreasing =
        generator.generate(config.num_jobs, config.max_delay, SortOrder::Descending)?;
    let decreasing_ticks = simulator.simulate(&decreasing)?;

    Ok(TrialOutcome {
        total_work,
        increasing_ticks,
        decreasing_ticks,
    })
}

/// Averages over all trials of one configuration.
///
/// Averages are floor-divided integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationResult {
    /// Processor slots.
    pub num_processors: usize,
    /// Jobs per trial.
    pub num_jobs: usize,
    /// Duration upper bound.
    pub max_delay: u32,
    /// Trials averaged.
    pub trials: usize,
    /// Mean total work per trial.
    pub avg_total_work: u64,
    /// Mean makespan, shortest first.
    pub avg_increasing_ticks: Ticks,
    /// Mean makespan, longest first.
    pub avg_decreasing_ticks: Ticks,
}

impl ConfigurationResult {
    /// The sweep point this result belongs to.
    pub fn configuration(&self) -> Configuration {
        Configuration {
            num_processors: self.num_processors,
            num_jobs: self.num_jobs,
            max_delay: self.max_delay,
        }
    }

    /// The order with the lower average makespan; `None` on a tie.
    pub fn faster_order(&self) -> Option<SortOrder> {
        match self.avg_increasing_ticks.cmp(&self.avg_decreasing_ticks) {
            std::cmp::Ordering::Less => Some(SortOrder::Ascending),
            std::cmp::Ordering::Greater => Some(SortOrder::Descending),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Increasing-order makespan over decreasing-order makespan.
    ///
    /// Values above 1.0 mean longest-first was faster.
    pub fn speedup(&self) -> f64 {
        if self.avg_decreasing_ticks == 0 {
            return 1.0;
        }
        self.avg_increasing_ticks as f64 / self.avg_decreasing_ticks as f64
    }
}

/// Running sums over the trials of one configuration.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrialAccumulator {
    trials: usize,
    total_work: u64,
    increasing_ticks: u64,
    decreasing_ticks: u64,
}

impl TrialAccumulator {
    pub(crate) fn add(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        self.total_work += outcome.total_work;
        self.increasing_ticks += outcome.increasing_ticks;
        self.decreasing_ticks += outcome.decreasing_ticks;
    }

    pub(crate) fn finish(&self, config: &Configuration) -> ConfigurationResult {
        let n = self.trials.max(1) as u64;
        ConfigurationResult {
            num_processors: config.num_processors,
            num_jobs: config.num_jobs,
            max_delay: config.max_delay,
            trials: self.trials,
            avg_total_work: self.total_work / n,
            avg_increasing_ticks: self.increasing_ticks / n,
            avg_decreasing_ticks: self.decreasing_ticks / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(p: usize, j: usize, d: u32) -> Configuration {
        Configuration {
            num_processors: p,
            num_jobs: j,
            max_delay: d,
        }
    }

    #[test]
    fn test_trial_is_reproducible() {
        let mut generator = DelayGenerator::from_seed(0);
        let a = run_trial(&mut generator, 77, &config(4, 100, 1000)).unwrap();
        let b = run_trial(&mut generator, 77, &config(4, 100, 1000)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_trial_matches_manual_pipeline() {
        let cfg = config(3, 40, 50);
        let mut generator = DelayGenerator::from_seed(0);
        let outcome = run_trial(&mut generator, 12, &cfg).unwrap();

        let (inc, dec) = DelayGenerator::from_seed(0).generate_pair(12, 40, 50).unwrap();
        let sim = ScheduleSimulator::new(3);
        assert_eq!(outcome.total_work, inc.total_work());
        assert_eq!(outcome.total_work, dec.total_work());
        assert_eq!(outcome.ticks(SortOrder::Ascending), sim.simulate(&inc).unwrap());
        assert_eq!(outcome.ticks(SortOrder::Descending), sim.simulate(&dec).unwrap());
    }

    #[test]
    fn test_trial_unqueued_orders_tie() {
        // Every job starts at tick 1 either way; both makespans are the max duration.
        let mut generator = DelayGenerator::from_seed(0);
        let outcome = run_trial(&mut generator, 3, &config(16, 10, 100)).unwrap();
        assert_eq!(outcome.increasing_ticks, outcome.decreasing_ticks);
    }

    #[test]
    fn test_trial_zero_jobs() {
        let mut generator = DelayGenerator::from_seed(0);
        let outcome = run_trial(&mut generator, 3, &config(2, 0, 100)).unwrap();
        assert_eq!(
            outcome,
            TrialOutcome {
                total_work: 0,
                increasing_ticks: 0,
                decreasing_ticks: 0
            }
        );
    }

    #[test]
    fn test_accumulator_floor_average() {
        let mut acc = TrialAccumulator::default();
        acc.add(&TrialOutcome {
            total_work: 10,
            increasing_ticks: 7,
            decreasing_ticks: 4,
        });
        acc.add(&TrialOutcome {
            total_work: 11,
            increasing_ticks: 8,
            decreasing_ticks: 5,
        });
        let result = acc.finish(&config(2, 5, 9));
        assert_eq!(result.trials, 2);
        assert_eq!(result.avg_total_work, 10);
        assert_eq!(result.avg_increasing_ticks, 7);
        assert_eq!(result.avg_decreasing_ticks, 4);
        assert_eq!(result.faster_order(), Some(SortOrder::Descending));
        assert!((result.speedup() - 1.75).abs() < 1e-10);
        assert_eq!(result.configuration(), config(2, 5, 9));
    }

    #[test]
    fn test_faster_order_tie() {
        let result = TrialAccumulator::default().finish(&config(1, 0, 1));
        assert_eq!(result.faster_order(), None);
        assert!((result.speedup() - 1.0).abs() < 1e-10);
    }
}
