//! Discrete-time greedy multiprocessor simulator.
//!
//! # Algorithm
//!
//! Each tick:
//! 1. Scan slots in index order; every idle slot claims the next unassigned job.
//! 2. Every busy slot (including ones assigned this tick) loses one tick of work.
//! 3. Count the tick, then stop once no job is pending and every slot is idle.
//!
//! # Complexity
//! O(T * p) where T = makespan in ticks, p = processor count.

use log::trace;

use crate::error::{try_with_capacity, SimError};
use crate::models::{JobDuration, Ticks};

use super::report::{JobAssignment, SimulationReport};

/// Something that happened inside one tick.
#[derive(Debug, Clone, Copy)]
enum TickEvent {
    /// `job_index` was claimed by `processor` at the start of `tick`.
    Assigned {
        job_index: usize,
        processor: usize,
        tick: Ticks,
    },
    /// `processor` did one tick of work.
    Busy { processor: usize },
}

/// Greedy list scheduler over a fixed number of identical processors.
///
/// # Example
///
/// ```
/// use greedy_order::simulator::ScheduleSimulator;
///
/// let sim = ScheduleSimulator::new(1);
/// assert_eq!(sim.simulate(&[2, 3]).unwrap(), 5);
///
/// let sim = ScheduleSimulator::new(4);
/// assert_eq!(sim.simulate(&[3, 1, 2]).unwrap(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSimulator {
    num_processors: usize,
}

impl ScheduleSimulator {
    /// Creates a simulator with `num_processors` slots.
    ///
    /// `num_processors` must be at least 1.
    pub fn new(num_processors: usize) -> Self {
        debug_assert!(num_processors >= 1, "simulator requires at least one processor");
        Self { num_processors }
    }

    /// Number of processor slots.
    pub fn num_processors(&self) -> usize {
        self.num_processors
    }

    /// Runs `durations` to completion and returns the makespan in ticks.
    ///
    /// # Errors
    /// `AllocationFailure` if the slot array cannot be allocated.
    pub fn simulate(&self, durations: &[JobDuration]) -> Result<Ticks, SimError> {
        let elapsed = self.run(durations, |_| {})?;
        trace!(
            "simulated {} jobs on {} processors: {} ticks",
            durations.len(),
            self.num_processors,
            elapsed
        );
        Ok(elapsed)
    }

    /// Runs `durations` to completion, recording per-job and per-processor detail.
    pub fn simulate_detailed(
        &self,
        durations: &[JobDuration],
    ) -> Result<SimulationReport, SimError> {
        let mut assignments: Vec<JobAssignment> =
            try_with_capacity("assignment log", durations.len())?;
        let mut busy_ticks: Vec<Ticks> =
            try_with_capacity("busy tick counters", self.num_processors)?;
        busy_ticks.resize(self.num_processors, 0);

        let makespan = self.run(durations, |event| match event {
            TickEvent::Assigned {
                job_index,
                processor,
                tick,
            } => assignments.push(JobAssignment {
                job_index,
                processor,
                start_tick: tick,
                duration: durations[job_index],
            }),
            TickEvent::Busy { processor } => busy_ticks[processor] += 1,
        })?;

        Ok(SimulationReport {
            makespan,
            assignments,
            busy_ticks,
        })
    }

    /// Shared stepping loop; `on_event` observes assignments and busy ticks.
    fn run<F>(&self, durations: &[JobDuration], mut on_event: F) -> Result<Ticks, SimError>
    where
        F: FnMut(TickEvent),
    {
        let mut remaining: Vec<JobDuration> =
            try_with_capacity("processor array", self.num_processors)?;
        remaining.resize(self.num_processors, 0);

        let num_jobs = durations.len();
        let mut next_job = 0;
        let mut elapsed: Ticks = 0;

        while next_job < num_jobs || remaining.iter().any(|&r| r > 0) {
            // Assignment phase
            for (processor, slot) in remaining.iter_mut().enumerate() {
                if *slot == 0 && next_job < num_jobs {
                    *slot = durations[next_job];
                    on_event(TickEvent::Assigned {
                        job_index: next_job,
                        processor,
                        tick: elapsed,
                    });
                    next_job += 1;
                }
            }

            // Decrement phase
            for (processor, slot) in remaining.iter_mut().enumerate() {
                if *slot > 0 {
                    *slot -= 1;
                    on_event(TickEvent::Busy { processor });
                }
            }

            elapsed += 1;
        }

        Ok(elapsed)
    }
}
