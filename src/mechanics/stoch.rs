//! Stochastic mechanics: uniform draws on top of WyRand.
//! Note: helpers take `&RefCell<WyRand>`, so an owner holding the RNG can
//! draw from `&self`.

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use std::cell::RefCell;

/// Fresh RNG from a 64-bit seed.
#[inline]
pub fn seeded(seed: u64) -> RefCell<WyRand> {
    RefCell::new(WyRand::from_seed(seed.to_le_bytes()))
}

/// Raw 64-bit draw, used to derive child seeds.
#[inline]
pub fn next_seed(rng: &RefCell<WyRand>) -> u64 {
    rng.borrow_mut().next_u64()
}

/// Uniform in [0, 1).
#[inline]
pub fn unit(rng: &RefCell<WyRand>) -> f64 {
    let mut r = rng.borrow_mut();
    ((r.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p) with WyRand.
#[inline]
pub fn bernoulli(rng: &RefCell<WyRand>, p: f64) -> bool {
    unit(rng) < p.clamp(0.0, 1.0)
}

/// Uniform index in `0..n`. `n` must be non-zero.
#[inline]
pub fn index(rng: &RefCell<WyRand>, n: usize) -> usize {
    debug_assert!(n > 0);
    ((unit(rng) * n as f64) as usize).min(n.saturating_sub(1))
}

/// Uniform in [lo, hi).
#[inline]
pub fn range(rng: &RefCell<WyRand>, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * unit(rng)
}
