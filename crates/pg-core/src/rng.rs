//! Deterministic run-level and per-parcel RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every UCC decision for parcel `i` draws from a `ParcelRng` seeded by:
//!
//!   seed = run_seed XOR (i * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive parcel indices uniformly across the seed space.
//! This means:
//!
//! - Draws are a pure function of (run seed, parcel index) — the rerouting
//!   pass produces identical output whether it runs sequentially or on a
//!   Rayon pool.
//! - Appending parcels at the end of the list does not disturb the draws of
//!   existing parcels.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RunRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for operations outside the per-parcel rerouting pass.
///
/// Threaded explicitly through the pipeline instead of an ambient global
/// generator so runs are reproducible and components are testable alone.
pub struct RunRng(SmallRng);

impl RunRng {
    pub fn new(seed: u64) -> Self {
        RunRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Derive a child `RunRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> RunRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        RunRng(SmallRng::seed_from_u64(child_seed))
    }
}

// ── ParcelRng ─────────────────────────────────────────────────────────────────

/// Per-parcel deterministic RNG for the UCC rerouting pass.
///
/// The consolidation draw and the vehicle resample for one parcel both come
/// from the same `ParcelRng`, in that order.
pub struct ParcelRng(SmallRng);

impl ParcelRng {
    /// Seed deterministically from the run seed and a parcel's 0-based index.
    pub fn for_parcel(run_seed: u64, parcel_index: usize) -> Self {
        let seed = run_seed ^ (parcel_index as u64).wrapping_mul(MIXING_CONSTANT);
        ParcelRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}
