//! Service-duration models.
//!
//! The duration a customer occupies a station is sampled through a trait so
//! tests can substitute a fixed value for the randomized production model —
//! every timing property in the test suite relies on that seam.

use std::ops::RangeInclusive;

use ck_core::SimRng;

/// Samples how long a customer's checkout takes, in seconds.
///
/// Called exactly once per customer, at arrival; the result is frozen into
/// the [`Customer`][crate::Customer] and never re-sampled.
pub trait ServiceModel {
    fn sample_secs(&self, item_count: u32, rng: &mut SimRng) -> u64;
}

/// The production model: a fixed scan time per item plus a uniformly random
/// payment step.
///
/// Defaults to 5 s per item and a 20–40 s payment, so a 10–40 item basket
/// takes between 70 and 240 seconds.
#[derive(Debug, Clone)]
pub struct ItemScan {
    pub secs_per_item: u64,
    pub payment_secs:  RangeInclusive<u64>,
}

impl Default for ItemScan {
    fn default() -> Self {
        Self {
            secs_per_item: 5,
            payment_secs:  20..=40,
        }
    }
}

impl ServiceModel for ItemScan {
    fn sample_secs(&self, item_count: u32, rng: &mut SimRng) -> u64 {
        let payment = rng.gen_range(self.payment_secs.clone());
        self.secs_per_item * item_count as u64 + payment
    }
}

/// Every checkout takes exactly the same number of seconds, regardless of
/// basket size.  Consumes no randomness.
#[derive(Debug, Clone, Copy)]
pub struct FixedService(pub u64);

impl ServiceModel for FixedService {
    fn sample_secs(&self, _item_count: u32, _rng: &mut SimRng) -> u64 {
        self.0
    }
}
