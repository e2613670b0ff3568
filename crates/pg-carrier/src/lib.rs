//! `pg-carrier` — courier-side data: who delivers, from where, with what.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`courier`]  | `CourierRegistry`, `MarketShares`                      |
//! | [`depot`]    | `Depot`, `DepotIndex` (per-courier depot grouping)     |
//! | [`segments`] | `ConsolidationTable`, `VehicleShares` per logistic segment |
//! | [`loader`]   | CSV loaders for all of the above                       |

pub mod courier;
pub mod depot;
pub mod loader;
pub mod segments;

mod error;

#[cfg(test)]
mod tests;

pub use courier::{CourierRegistry, MarketShares};
pub use depot::{Depot, DepotIndex, DepotRef};
pub use error::{CarrierError, CarrierResult};
pub use loader::{
    load_consolidation_csv, load_consolidation_reader, load_depots_csv, load_depots_reader,
    load_shares_csv, load_shares_reader, load_vehicle_shares_csv, load_vehicle_shares_reader,
};
pub use segments::{ConsolidationTable, VehicleShares, SEGMENT_COUNT};
