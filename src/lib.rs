//! Greedy job-ordering simulation.
//!
//! Measures whether dispatching heterogeneous jobs shortest-first or
//! longest-first gives the smaller makespan on identical processors
//! under greedy list scheduling. Processors are tick counters, not
//! threads; everything runs sequentially and deterministically.
//!
//! # Modules
//!
//! - **`models`**: Units and ordering vocabulary — `JobDuration`, `Ticks`,
//!   `SortOrder`, `DurationSequence`
//! - **`generator`**: Seeded uniform duration generation (`DelayGenerator`)
//! - **`simulator`**: Discrete-time greedy multiprocessor simulation (`ScheduleSimulator`)
//! - **`experiment`**: Parameter sweeps, trial averaging and reports
//! - **`validation`**: Sweep configuration checks
//! - **`error`**: The allocation failure reported by the core
//!
//! # Example
//!
//! ```
//! use greedy_order::generator::DelayGenerator;
//! use greedy_order::simulator::ScheduleSimulator;
//!
//! let mut generator = DelayGenerator::from_seed(1);
//! let (inc, dec) = generator.generate_pair(1, 100, 1000).unwrap();
//! let sim = ScheduleSimulator::new(4);
//! let inc_ticks = sim.simulate(&inc).unwrap();
//! let dec_ticks = sim.simulate(&dec).unwrap();
//! assert!(inc_ticks >= (inc.total_work() + 3) / 4);
//! assert!(dec_ticks >= (dec.total_work() + 3) / 4);
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod experiment;
pub mod generator;
pub mod models;
pub mod simulator;
pub mod validation;

pub use error::{SimError, SimErrorKind};
