//! `pg-skim` — travel-cost matrix handling.
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`matrix`] | `SkimMatrix` — flat array reshaped to N×N, O(1) lookup   |
//! | [`repair`] | `RepairRules` — defective-cell and diagonal repairs      |
//! | [`units`]  | seconds→hours, metres→km, 4-decimal rounding             |
//! | [`parcel`] | `ParcelSkim` — depot-column sub-matrix in hours          |
//! | [`loader`] | binary `.mtx` reader                                     |

pub mod loader;
pub mod matrix;
pub mod parcel;
pub mod repair;
pub mod units;

mod error;

#[cfg(test)]
mod tests;

pub use error::{SkimError, SkimResult};
pub use loader::{read_mtx, read_mtx_bytes, read_mtx_reader};
pub use matrix::SkimMatrix;
pub use parcel::ParcelSkim;
pub use repair::RepairRules;
