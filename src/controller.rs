//! Prize selection without repeats
//!
//! Every index in the pool is drawn once before any can come up again. When
//! the pool is exhausted the used set is cleared and one unrecorded index is
//! drawn, so the first pick after a reset may repeat the last one.

use std::collections::BTreeSet;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::error::WheelError;
use crate::seeded_rng;

/// RNG stream for prize selection
const CONTROLLER_STREAM: u64 = 0;

/// Picks prize indices in `[0, pool)`
#[derive(Debug, Clone)]
pub struct SpinController {
    pool: usize,
    used: BTreeSet<usize>,
    rng: Pcg32,
}

impl SpinController {
    pub fn new(pool: usize, seed: Option<u64>) -> Result<Self, WheelError> {
        if pool == 0 {
            return Err(WheelError::EmptyPool);
        }
        Ok(Self {
            pool,
            used: BTreeSet::new(),
            rng: seeded_rng(seed, CONTROLLER_STREAM),
        })
    }

    /// Draw the next prize index
    pub fn pick_next(&mut self) -> usize {
        let available: Vec<usize> = (0..self.pool).filter(|i| !self.used.contains(i)).collect();

        if available.is_empty() {
            log::debug!("Prize pool of {} exhausted, resetting", self.pool);
            self.used.clear();
            return self.rng.random_range(0..self.pool);
        }

        let index = available[self.rng.random_range(0..available.len())];
        self.used.insert(index);
        index
    }

    #[inline]
    pub fn pool(&self) -> usize {
        self.pool
    }

    /// Indices drawn since the last reset
    pub fn used(&self) -> &BTreeSet<usize> {
        &self.used
    }

    /// Indices still available before the next reset
    pub fn remaining(&self) -> usize {
        self.pool - self.used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_pool_is_a_permutation() {
        let mut controller = SpinController::new(16, Some(12345)).unwrap();
        let mut picks: Vec<usize> = (0..16).map(|_| controller.pick_next()).collect();
        picks.sort_unstable();
        assert_eq!(picks, (0..16).collect::<Vec<_>>());
        assert_eq!(controller.remaining(), 0);
    }

    #[test]
    fn test_exhaustion_resets() {
        let mut controller = SpinController::new(15, Some(1)).unwrap();
        for _ in 0..15 {
            controller.pick_next();
        }
        let pick = controller.pick_next();
        assert!(pick < 15);
        // The post-reset pick is not recorded
        assert!(controller.used().is_empty());
        assert_eq!(controller.remaining(), 15);

        // Next pick starts a fresh cycle
        let next = controller.pick_next();
        assert_eq!(controller.used().len(), 1);
        assert!(controller.used().contains(&next));
    }

    #[test]
    fn test_single_slot_pool() {
        let mut controller = SpinController::new(1, Some(3)).unwrap();
        for _ in 0..5 {
            assert_eq!(controller.pick_next(), 0);
        }
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert_eq!(SpinController::new(0, None).unwrap_err(), WheelError::EmptyPool);
    }

    #[test]
    fn test_seeded_controllers_agree() {
        let mut a = SpinController::new(16, Some(77)).unwrap();
        let mut b = SpinController::new(16, Some(77)).unwrap();
        for _ in 0..40 {
            assert_eq!(a.pick_next(), b.pick_next());
        }
    }

    proptest! {
        #[test]
        fn prop_no_repeats_within_cycle(pool in 1usize..40, seed in any::<u64>()) {
            let mut controller = SpinController::new(pool, Some(seed)).unwrap();
            let mut seen = BTreeSet::new();
            for _ in 0..pool {
                prop_assert!(seen.insert(controller.pick_next()));
            }
            prop_assert_eq!(seen.len(), pool);

            let after_reset = controller.pick_next();
            prop_assert!(after_reset < pool);
            prop_assert!(controller.used().len() <= 1);
        }
    }
}
