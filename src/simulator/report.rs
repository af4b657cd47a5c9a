//! Detailed simulation results.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Ticks until every job completed |
//! | Busy ticks | Ticks a processor spent working |
//! | Utilization | busy ticks / makespan, per processor |
//! | Idle ticks | makespan * processors - total busy ticks |

use serde::{Deserialize, Serialize};

use crate::models::{JobDuration, Ticks};

/// Where and when one job ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAssignment {
    /// Position of the job in the dispatched list.
    pub job_index: usize,
    /// Slot that claimed the job.
    pub processor: usize,
    /// Elapsed ticks before the job started (0 = first tick).
    pub start_tick: Ticks,
    /// Ticks of work the job needed.
    pub duration: JobDuration,
}

impl JobAssignment {
    /// Elapsed ticks at which the job finished.
    #[inline]
    pub fn end_tick(&self) -> Ticks {
        self.start_tick + Ticks::from(self.duration)
    }
}

/// Full trace of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Total elapsed ticks.
    pub makespan: Ticks,
    /// One entry per job, in dispatch order.
    pub assignments: Vec<JobAssignment>,
    /// Busy ticks per processor slot.
    pub busy_ticks: Vec<Ticks>,
}

impl SimulationReport {
    /// Number of processor slots in the run.
    pub fn num_processors(&self) -> usize {
        self.busy_ticks.len()
    }

    /// Sum of busy ticks over all slots; equals the total work dispatched.
    pub fn total_busy_ticks(&self) -> Ticks {
        self.busy_ticks.iter().sum()
    }

    /// Slot-ticks spent idle before the makespan.
    pub fn idle_ticks(&self) -> Ticks {
        (self.makespan * self.num_processors() as Ticks).saturating_sub(self.total_busy_ticks())
    }

    /// Per-processor busy fraction of the makespan (0.0 for an empty run).
    pub fn utilization(&self) -> Vec<f64> {
        if self.makespan == 0 {
            return vec![0.0; self.num_processors()];
        }
        self.busy_ticks
            .iter()
            .map(|&b| b as f64 / self.makespan as f64)
            .collect()
    }

    /// Mean utilization across processors.
    pub fn avg_utilization(&self) -> f64 {
        let util = self.utilization();
        if util.is_empty() {
            0.0
        } else {
            util.iter().sum::<f64>() / util.len() as f64
        }
    }

    /// Finds the assignment of the job at `job_index`.
    pub fn assignment_for_job(&self, job_index: usize) -> Option<&JobAssignment> {
        self.assignments.iter().find(|a| a.job_index == job_index)
    }

    /// Assignments that ran on `processor`, in start order.
    pub fn assignments_for_processor(&self, processor: usize) -> Vec<&JobAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.processor == processor)
            .collect()
    }
}
