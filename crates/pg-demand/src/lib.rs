//! `pg-demand` — converts per-zone aggregate statistics into integer parcel
//! volumes, split across couriers by market share.
//!
//! Everything here is a pure function of its inputs; no I/O, no RNG.

mod estimator;

#[cfg(test)]
mod tests;

pub use estimator::{estimate_all, estimate_zone, split_by_courier, ZoneDemand};
