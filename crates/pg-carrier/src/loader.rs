//! CSV loaders for carrier-side tables.
//!
//! # Formats
//!
//! Depot table, one row per depot:
//!
//! ```csv
//! id,courier,zone,x,y
//! 1,DHL,101,84512.0,447201.0
//! 2,DPD,102,84880.0,447455.0
//! ```
//!
//! Market shares (`courier,share`), consolidation potential
//! (`segment,probability`), and the vehicle/fuel share grid (`segment`
//! followed by one numeric column per fuel×vehicle cell, wide format).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use pg_core::{DepotId, ZoneNum};

use crate::courier::{CourierRegistry, MarketShares};
use crate::depot::Depot;
use crate::segments::{ConsolidationTable, VehicleShares};
use crate::{CarrierError, CarrierResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DepotRecord {
    id:      u32,
    courier: String,
    zone:    u32,
    x:       f64,
    y:       f64,
}

#[derive(Deserialize)]
struct ShareRecord {
    courier: String,
    share:   f64,
}

#[derive(Deserialize)]
struct ConsolidationRecord {
    #[allow(dead_code)]
    segment:     u8,
    probability: f64,
}

// ── Depots ────────────────────────────────────────────────────────────────────

pub fn load_depots_csv(path: &Path) -> CarrierResult<Vec<Depot>> {
    let file = std::fs::File::open(path).map_err(CarrierError::Io)?;
    load_depots_reader(file)
}

pub fn load_depots_reader<R: Read>(reader: R) -> CarrierResult<Vec<Depot>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut depots = Vec::new();
    for result in csv_reader.deserialize::<DepotRecord>() {
        let row = result.map_err(|e| CarrierError::Parse(e.to_string()))?;
        depots.push(Depot {
            id:      DepotId(row.id),
            courier: row.courier,
            zone:    ZoneNum(row.zone),
            x:       row.x,
            y:       row.y,
        });
    }
    Ok(depots)
}

// ── Market shares ─────────────────────────────────────────────────────────────

/// Load the market-share table; returns the registry (codes sorted) plus the
/// aligned shares.
pub fn load_shares_csv(path: &Path) -> CarrierResult<(CourierRegistry, MarketShares)> {
    let file = std::fs::File::open(path).map_err(CarrierError::Io)?;
    load_shares_reader(file)
}

pub fn load_shares_reader<R: Read>(reader: R) -> CarrierResult<(CourierRegistry, MarketShares)> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut pairs = Vec::new();
    for result in csv_reader.deserialize::<ShareRecord>() {
        let row = result.map_err(|e| CarrierError::Parse(e.to_string()))?;
        pairs.push((row.courier, row.share));
    }

    let registry = CourierRegistry::new(pairs.iter().map(|(c, _)| c.clone()).collect());
    let shares = MarketShares::new(&pairs, &registry)?;
    Ok((registry, shares))
}

// ── Segment tables ────────────────────────────────────────────────────────────

pub fn load_consolidation_csv(path: &Path) -> CarrierResult<ConsolidationTable> {
    let file = std::fs::File::open(path).map_err(CarrierError::Io)?;
    load_consolidation_reader(file)
}

pub fn load_consolidation_reader<R: Read>(reader: R) -> CarrierResult<ConsolidationTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut probs = Vec::new();
    for result in csv_reader.deserialize::<ConsolidationRecord>() {
        let row = result.map_err(|e| CarrierError::Parse(e.to_string()))?;
        probs.push(row.probability);
    }
    ConsolidationTable::new(probs)
}

pub fn load_vehicle_shares_csv(path: &Path) -> CarrierResult<VehicleShares> {
    let file = std::fs::File::open(path).map_err(CarrierError::Io)?;
    load_vehicle_shares_reader(file)
}

/// The share grid is wide and its column count is data, so it is read as
/// untyped records rather than a serde struct.
pub fn load_vehicle_shares_reader<R: Read>(reader: R) -> CarrierResult<VehicleShares> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut raw = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| CarrierError::Parse(e.to_string()))?;
        // First field is the segment label; the rest are share cells.
        let row: Vec<f64> = record
            .iter()
            .skip(1)
            .map(|cell| {
                cell.trim()
                    .parse::<f64>()
                    .map_err(|_| CarrierError::Parse(format!("bad share cell {cell:?}")))
            })
            .collect::<CarrierResult<_>>()?;
        raw.push(row);
    }
    VehicleShares::from_raw(&raw)
}
