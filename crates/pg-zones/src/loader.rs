//! CSV zone-table loader.
//!
//! # CSV format
//!
//! One row per detailed zone:
//!
//! ```csv
//! zone,x,y,households,employment,zez,ucc_zone
//! 101,84512.0,447201.0,250.0,120.0,0,
//! 102,84880.0,447455.0,300.0,80.0,1,501
//! ```
//!
//! `zez` is `0`/`1`; `ucc_zone` may be empty for zones without a serving
//! consolidation center.
//!
//! Supra-zone coordinates come from a second file with only `zone,x,y`
//! columns; supra-zones carry no demand attributes.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pg_core::ZoneNum;

use crate::zone::{SupraZone, Zone, ZoneTable};
use crate::{ZoneError, ZoneResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ZoneRecord {
    zone:       u32,
    x:          f64,
    y:          f64,
    households: f64,
    employment: f64,
    zez:        u8,
    ucc_zone:   Option<u32>,
}

#[derive(Deserialize)]
struct SupraRecord {
    zone: u32,
    x:    f64,
    y:    f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the detailed zone table from a CSV file.
pub fn load_zones_csv(path: &Path) -> ZoneResult<ZoneTable> {
    let file = std::fs::File::open(path).map_err(ZoneError::Io)?;
    load_zones_reader(file)
}

/// Like [`load_zones_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded datasets.
pub fn load_zones_reader<R: Read>(reader: R) -> ZoneResult<ZoneTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut zones = Vec::new();

    for result in csv_reader.deserialize::<ZoneRecord>() {
        let row = result.map_err(|e| ZoneError::Parse(e.to_string()))?;
        zones.push(Zone {
            num:        ZoneNum(row.zone),
            x:          row.x,
            y:          row.y,
            households: row.households,
            employment: row.employment,
            zez:        row.zez != 0,
            ucc_zone:   row.ucc_zone.map(ZoneNum),
        });
    }

    ZoneTable::new(zones)
}

/// Load supra-zone coordinates from a CSV file.
pub fn load_supra_zones_csv(path: &Path) -> ZoneResult<Vec<SupraZone>> {
    let file = std::fs::File::open(path).map_err(ZoneError::Io)?;
    load_supra_zones_reader(file)
}

/// Like [`load_supra_zones_csv`] but accepts any `Read` source.
pub fn load_supra_zones_reader<R: Read>(reader: R) -> ZoneResult<Vec<SupraZone>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut supra = Vec::new();

    for result in csv_reader.deserialize::<SupraRecord>() {
        let row = result.map_err(|e| ZoneError::Parse(e.to_string()))?;
        supra.push(SupraZone { num: ZoneNum(row.zone), x: row.x, y: row.y });
    }

    Ok(supra)
}
