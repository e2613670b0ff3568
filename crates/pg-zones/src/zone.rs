//! Zone records and the sorted zone table.

use pg_core::ZoneNum;
use rustc_hash::FxHashMap;

use crate::{ZoneError, ZoneResult};

// ── Zone ──────────────────────────────────────────────────────────────────────

/// A detailed study-area zone: one areal demand unit.
#[derive(Clone, Debug)]
pub struct Zone {
    /// External zone number.
    pub num: ZoneNum,

    /// Centroid coordinates.  Carried through for downstream consumers;
    /// the generator itself never reads them.
    pub x: f64,
    pub y: f64,

    /// Household count, drives B2C demand.
    pub households: f64,

    /// Employment count, drives B2B demand.
    pub employment: f64,

    /// Zero-emission-zone flag.  Only ZEZ destinations are candidates for
    /// UCC rerouting.
    pub zez: bool,

    /// The consolidation-center zone serving this zone, if any.
    pub ucc_zone: Option<ZoneNum>,
}

// ── SupraZone ─────────────────────────────────────────────────────────────────

/// A coarse region outside the detailed study area.
///
/// Supra-zones share the skim index with detailed zones but carry no demand
/// attributes; they only ever appear as endpoints of cost lookups.
#[derive(Copy, Clone, Debug)]
pub struct SupraZone {
    pub num: ZoneNum,
    pub x:   f64,
    pub y:   f64,
}

// ── ZoneTable ─────────────────────────────────────────────────────────────────

/// Detailed zones sorted ascending by external number, with O(1) lookup.
///
/// The sort order is what fixes every zone's matrix position for the run, so
/// the table is immutable once built.
#[derive(Debug)]
pub struct ZoneTable {
    zones:  Vec<Zone>,
    by_num: FxHashMap<ZoneNum, usize>,
}

impl ZoneTable {
    /// Build from unordered zone records.
    ///
    /// Sorts by zone number and rejects duplicates and negative counts.
    pub fn new(mut zones: Vec<Zone>) -> ZoneResult<ZoneTable> {
        zones.sort_unstable_by_key(|z| z.num);

        let mut by_num = FxHashMap::with_capacity_and_hasher(zones.len(), Default::default());
        for (i, z) in zones.iter().enumerate() {
            for (field, value) in [("households", z.households), ("employment", z.employment)] {
                if value < 0.0 {
                    return Err(ZoneError::NegativeCount { zone: z.num, field, value });
                }
            }
            if by_num.insert(z.num, i).is_some() {
                return Err(ZoneError::DuplicateZone(z.num));
            }
        }

        Ok(ZoneTable { zones, by_num })
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zones in ascending zone-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    pub fn get(&self, num: ZoneNum) -> Option<&Zone> {
        self.by_num.get(&num).map(|&i| &self.zones[i])
    }

    /// Like [`get`](Self::get) but an unknown zone is an error.
    pub fn require(&self, num: ZoneNum) -> ZoneResult<&Zone> {
        self.get(num).ok_or(ZoneError::UnknownZone(num))
    }

    /// Zone numbers in ascending order.
    pub fn nums(&self) -> impl Iterator<Item = ZoneNum> + '_ {
        self.zones.iter().map(|z| z.num)
    }
}
