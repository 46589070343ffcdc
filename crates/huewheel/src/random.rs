//! Sources of uniform random integers.
//!
//! Generation only ever asks for "an integer in this inclusive range", so the
//! randomness seam is a one-method trait. [`RngSource`] adapts any `rand` RNG;
//! [`SequenceSource`] replays fixed values for reproducible output.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform random integers.
pub trait RandomSource {
    /// Returns an integer in `lo..=hi`. Callers guarantee `lo <= hi`.
    fn int_in(&mut self, lo: u32, hi: u32) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).int_in(lo, hi)
    }
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Uses the thread-local generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// A deterministic generator: the same seed yields the same palettes.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        self.0.random_range(lo..=hi)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values outside the requested range are clamped into it, so a script
/// written for one configuration still yields valid colors under another.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u32>,
    next: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
        if self.values.is_empty() {
            return lo;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(lo, hi)
    }
}
