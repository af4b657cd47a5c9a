//! Seeded job-duration generation.
//!
//! Draws job durations uniformly over `[1, max_delay]` from an explicitly
//! owned pseudo-random stream and returns them sorted.
//!
//! # Reproducibility
//!
//! Every call consumes exactly one `u32` draw per job, independent of the
//! requested order. Reseeding to the same value before two calls with the
//! same arguments therefore yields identical lists, and the ascending and
//! descending lists for one seed are reverses of each other.
//!
//! ```
//! use greedy_order::generator::DelayGenerator;
//! use greedy_order::models::SortOrder;
//!
//! let mut generator = DelayGenerator::from_seed(7);
//! let (inc, dec) = generator.generate_pair(7, 50, 100).unwrap();
//! assert_eq!(inc.reversed(), dec);
//! assert!(SortOrder::Ascending.is_sorted(&inc));
//! ```

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::error::{try_with_capacity, SimError};
use crate::models::{DurationSequence, JobDuration, SortOrder};

/// Draws `count` durations in `[1, max_delay]` from `rng` and sorts them.
///
/// Each duration is `next_u32() % max_delay + 1`, one draw per job.
///
/// # Errors
/// [`SimError`] with `AllocationFailure` if the list cannot be allocated.
pub fn generate_delays<R: RngCore + ?Sized>(
    rng: &mut R,
    count: usize,
    max_delay: JobDuration,
    order: SortOrder,
) -> Result<DurationSequence, SimError> {
    debug_assert!(max_delay >= 1, "max_delay must be at least 1");

    let mut delays = try_with_capacity("delay array", count)?;
    for _ in 0..count {
        delays.push(rng.next_u32() % max_delay + 1);
    }
    Ok(DurationSequence::new(delays, order))
}

/// A seedable duration generator owning its random stream.
#[derive(Debug, Clone)]
pub struct DelayGenerator {
    rng: SmallRng,
}

impl DelayGenerator {
    /// Creates a generator seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Resets the stream to the state produced by `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Draws and sorts `count` durations from the current stream state.
    pub fn generate(
        &mut self,
        count: usize,
        max_delay: JobDuration,
        order: SortOrder,
    ) -> Result<DurationSequence, SimError> {
        generate_delays(&mut self.rng, count, max_delay, order)
    }

    /// Reseeds to `seed` before each order; returns `(ascending, descending)`.
    pub fn generate_pair(
        &mut self,
        seed: u64,
        count: usize,
        max_delay: JobDuration,
    ) -> Result<(DurationSequence, DurationSequence), SimError> {
        self.reseed(seed);
        let ascending = self.generate(count, max_delay, SortOrder::Ascending)?;
        self.reseed(seed);
        let descending = self.generate(count, max_delay, SortOrder::Descending)?;
        Ok((ascending, descending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 0x5eed;

    #[test]
    fn test_deterministic_after_reseed() {
        let mut generator = DelayGenerator::from_seed(SEED);
        let a = generator.generate(100, 10_000, SortOrder::Ascending).unwrap();
        generator.reseed(SEED);
        let b = generator.generate(100, 10_000, SortOrder::Ascending).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_without_reseed_stream_advances() {
        let mut generator = DelayGenerator::from_seed(SEED);
        let a = generator.generate(100, 10_000, SortOrder::Ascending).unwrap();
        let b = generator.generate(100, 10_000, SortOrder::Ascending).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sorted_in_requested_order() {
        let mut generator = DelayGenerator::from_seed(SEED);
        let inc = generator.generate(100, 10_000, SortOrder::Ascending).unwrap();
        assert!(inc.windows(2).all(|w| w[0] <= w[1]));

        generator.reseed(SEED);
        let dec = generator.generate(100, 10_000, SortOrder::Descending).unwrap();
        assert!(dec.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_order_symmetry() {
        for seed in 0..20 {
            let mut generator = DelayGenerator::from_seed(0);
            let (inc, dec) = generator.generate_pair(seed, 100, 10_000).unwrap();
            for i in 0..100 {
                assert_eq!(inc[i], dec[100 - i - 1]);
            }
        }
    }

    #[test]
    fn test_range() {
        let mut generator = DelayGenerator::from_seed(SEED);
        for max_delay in [1, 2, 7, 100] {
            let seq = generator.generate(500, max_delay, SortOrder::Ascending).unwrap();
            assert!(seq.iter().all(|&d| (1..=max_delay).contains(&d)));
        }
    }

    #[test]
    fn test_max_delay_one_is_constant() {
        let mut generator = DelayGenerator::from_seed(SEED);
        let seq = generator.generate(20, 1, SortOrder::Descending).unwrap();
        assert!(seq.iter().all(|&d| d == 1));
        assert_eq!(seq.total_work(), 20);
    }

    #[test]
    fn test_zero_count() {
        let mut generator = DelayGenerator::from_seed(SEED);
        let seq = generator.generate(0, 100, SortOrder::Ascending).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_consumes_one_draw_per_job_in_either_order() {
        let mut inc_gen = DelayGenerator::from_seed(SEED);
        let mut dec_gen = DelayGenerator::from_seed(SEED);
        inc_gen.generate(37, 50, SortOrder::Ascending).unwrap();
        dec_gen.generate(37, 50, SortOrder::Descending).unwrap();

        // The 38th draw, seen through a one-job list with the widest bound
        let mut reference = SmallRng::seed_from_u64(SEED);
        for _ in 0..37 {
            reference.next_u32();
        }
        let expected = reference.next_u32() % u32::MAX + 1;
        let next_inc = inc_gen.generate(1, u32::MAX, SortOrder::Ascending).unwrap();
        let next_dec = dec_gen.generate(1, u32::MAX, SortOrder::Ascending).unwrap();
        assert_eq!(next_inc.as_slice(), &[expected]);
        assert_eq!(next_dec.as_slice(), &[expected]);
    }

    #[test]
    fn test_generate_reports_allocation_failure() {
        let mut generator = DelayGenerator::from_seed(SEED);
        let err = generator
            .generate(usize::MAX, 10, SortOrder::Ascending)
            .unwrap_err();
        assert!(err.is_allocation_failure());
        assert_eq!(
            err.kind,
            crate::SimErrorKind::AllocationFailure {
                requested: usize::MAX
            }
        );

        // The generator stays usable afterwards
        let seq = generator.generate(5, 10, SortOrder::Ascending).unwrap();
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_free_function_with_injected_rng() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let a = generate_delays(&mut rng, 10, 9, SortOrder::Ascending).unwrap();
        let mut generator = DelayGenerator::from_seed(SEED);
        let b = generator.generate(10, 9, SortOrder::Ascending).unwrap();
        assert_eq!(a, b);
    }
}
