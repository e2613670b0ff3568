//! `pg-core` — foundational types for the parcel demand generator.
//!
//! This crate is a dependency of every other `pg-*` crate.  It intentionally
//! has no `pg-*` dependencies and minimal external ones (only `rand`,
//! `thiserror`, and `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `ZoneNum`, `DepotId`, `ParcelId`, `CourierId`, `SegmentId`, `MatrixPos` |
//! | [`vehicle`] | `VehicleType` codes and the UCC vehicle buckets           |
//! | [`config`]  | `ScenarioConfig`, `ScenarioLabel`                         |
//! | [`rng`]     | `RunRng` (run-level), `ParcelRng` (per-parcel)            |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ScenarioConfig, ScenarioLabel};
pub use error::{CoreError, CoreResult};
pub use ids::{CourierId, DepotId, MatrixPos, ParcelId, SegmentId, ZoneNum};
pub use rng::{ParcelRng, RunRng};
pub use vehicle::{UccVehicle, VehicleType};
