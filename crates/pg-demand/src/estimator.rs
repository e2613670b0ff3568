//! Demand estimation.
//!
//! Daily parcel volume per zone:
//!
//!   total = round(households × parcels_per_hh / success_rate_b2c
//!               + employment × parcels_per_empl / success_rate_b2b)
//!
//! Rounding is **half away from zero** (`f64::round`) throughout, both for
//! zone totals and courier splits.

use pg_core::{CourierId, ScenarioConfig, ZoneNum};
use pg_carrier::MarketShares;
use pg_zones::{Zone, ZoneTable};

// ── ZoneDemand ────────────────────────────────────────────────────────────────

/// Integer parcel demand of one zone, split per courier.
#[derive(Clone, Debug)]
pub struct ZoneDemand {
    pub zone: ZoneNum,

    /// Zone total before the courier split.
    pub total: u64,

    /// Per-courier counts in registry order.
    ///
    /// Each entry is rounded independently, so their sum may differ from
    /// `total` by a few parcels; see [`split_by_courier`].
    pub by_courier: Vec<u64>,
}

impl ZoneDemand {
    /// Sum of the courier splits — the number of parcels this zone will
    /// actually emit (not necessarily equal to `total`).
    pub fn emitted(&self) -> u64 {
        self.by_courier.iter().sum()
    }
}

// ── Estimation ────────────────────────────────────────────────────────────────

/// Total daily parcel volume of one zone.
pub fn estimate_zone(zone: &Zone, cfg: &ScenarioConfig) -> u64 {
    let b2c = zone.households * cfg.parcels_per_hh / cfg.success_rate_b2c;
    let b2b = zone.employment * cfg.parcels_per_empl / cfg.success_rate_b2b;
    (b2c + b2b).round() as u64
}

/// Split a zone total across couriers by market share.
///
/// Each courier's count is `round(share × total)` **independently** — the
/// splits are not renormalized, so `sum(splits)` can drift from `total` by a
/// few parcels for some zones.  This matches the source model and is kept as
/// documented behavior rather than silently corrected.
pub fn split_by_courier(total: u64, shares: &MarketShares) -> Vec<u64> {
    (0..shares.len() as u16)
        .map(|c| (shares.share(CourierId(c)) * total as f64).round() as u64)
        .collect()
}

/// Estimate demand for every zone, in ascending zone-number order.
pub fn estimate_all(
    zones:  &ZoneTable,
    shares: &MarketShares,
    cfg:    &ScenarioConfig,
) -> Vec<ZoneDemand> {
    zones
        .iter()
        .map(|zone| {
            let total = estimate_zone(zone, cfg);
            ZoneDemand {
                zone: zone.num,
                total,
                by_courier: split_by_courier(total, shares),
            }
        })
        .collect()
}
