//! `pg-zones` — zone data and the zone ↔ skim-position index.
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`zone`]   | `Zone`, `SupraZone`, `ZoneTable`                        |
//! | [`index`]  | `ZoneIndex` — external zone number ↔ dense matrix position |
//! | [`loader`] | CSV loaders for the zone table and supra-zone coordinates |

pub mod index;
pub mod loader;
pub mod zone;

mod error;


pub use error::{ZoneError, ZoneResult};
pub use index::ZoneIndex;
pub use loader::{load_supra_zones_csv, load_supra_zones_reader, load_zones_csv, load_zones_reader};
pub use zone::{SupraZone, Zone, ZoneTable};
