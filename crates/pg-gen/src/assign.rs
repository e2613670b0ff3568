//! Nearest-depot assignment.
//!
//! For every zone with non-zero total demand and every courier, the depot
//! with the minimum travel time from its own zone to the destination zone is
//! selected from the depot sub-skim.  Ties go to the first depot in the
//! courier's ID-sorted depot list, so the result is a pure function of its
//! inputs.
//!
//! Zones with zero total demand are skipped entirely: no assignment is
//! attempted and no record is produced for them.

use pg_carrier::{CourierRegistry, DepotIndex};
use pg_core::{CourierId, DepotId, ZoneNum};
use pg_demand::ZoneDemand;
use pg_skim::ParcelSkim;
use pg_zones::ZoneIndex;

use crate::{GenError, GenResult};

/// One (zone, courier) → depot decision.
#[derive(Copy, Clone, Debug)]
pub struct Assignment {
    pub zone:       ZoneNum,
    pub courier:    CourierId,
    pub depot:      DepotId,
    /// Zone the chosen depot resides in — the parcels' origin zone.
    pub depot_zone: ZoneNum,
}

/// Assign a depot per courier to every zone with demand.
///
/// Output is zone-major (ascending zone number, the order of `demand`),
/// courier-minor (registry order).
pub fn assign_depots(
    demand:      &[ZoneDemand],
    zone_index:  &ZoneIndex,
    depot_index: &DepotIndex,
    parcel_skim: &ParcelSkim,
    registry:    &CourierRegistry,
) -> GenResult<Vec<Assignment>> {
    let mut assignments = Vec::new();

    for zd in demand {
        if zd.total == 0 {
            continue;
        }
        let zone_pos = zone_index.position_of(zd.zone)?;

        for courier in registry.ids() {
            let mut best: Option<(f64, &pg_carrier::DepotRef)> = None;
            for depot in depot_index.depots_of(courier) {
                let hours = parcel_skim.hours(zone_pos, depot.col);
                // Strict < keeps the first depot on ties.
                if best.is_none_or(|(b, _)| hours < b) {
                    best = Some((hours, depot));
                }
            }

            let (_, depot) = best.ok_or_else(|| GenError::NoDepotAvailable {
                courier: registry.code(courier).to_owned(),
                zone:    zd.zone,
            })?;

            assignments.push(Assignment {
                zone:       zd.zone,
                courier,
                depot:      depot.id,
                depot_zone: depot.zone,
            });
        }
    }

    Ok(assignments)
}
