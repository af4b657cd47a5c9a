//! Greedy multiprocessor simulation.
//!
//! Advances `p` identical processor slots in lockstep, one tick at a time.
//! Idle slots claim the next job of an ordered list with no look-ahead,
//! no preemption and no rebalancing, so the list order alone decides the
//! makespan.
//!
//! # Entry Points
//!
//! - [`ScheduleSimulator::simulate`]: makespan only.
//! - [`ScheduleSimulator::simulate_detailed`]: makespan plus a [`SimulationReport`]
//!   with per-job assignments and per-processor busy time.
//!
//! # References
//!
//! - Graham (1966), "Bounds for Certain Multiprocessing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod engine;
mod report;

pub use engine::ScheduleSimulator;
pub use report::{JobAssignment, SimulationReport};
