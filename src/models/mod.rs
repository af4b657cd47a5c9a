//! Simulation domain models.
//!
//! Jobs are plain durations with no identity; processors are counters.
//! These types fix the units and the ordering vocabulary shared by
//! the generator, the simulator and the experiment driver.
//!
//! # Units
//!
//! | Type | Meaning |
//! |------|---------|
//! | `JobDuration` | Ticks of work one job needs |
//! | `Ticks` | Elapsed simulated time or accumulated busy time |

mod order;
mod sequence;

pub use order::SortOrder;
pub use sequence::DurationSequence;

/// Work required by a single job, in ticks.
pub type JobDuration = u32;

/// Simulated time, in ticks.
pub type Ticks = u64;
