//! Parcel record synthesis.
//!
//! Expands the integer (zone, courier) counts into individually identified
//! parcel records.  Records live in one append-only arena (`Vec<Parcel>`);
//! the UCC pass later mutates entries in place and appends new legs, never
//! reorders.

use pg_carrier::CourierRegistry;
use pg_core::{CourierId, DepotId, ParcelId, VehicleType, ZoneNum};
use pg_demand::ZoneDemand;
use rustc_hash::FxHashMap;

use crate::assign::Assignment;
use crate::{GenError, GenResult};

// ── Parcel ────────────────────────────────────────────────────────────────────

/// One individual shipment record.
#[derive(Clone, Debug, PartialEq)]
pub struct Parcel {
    /// Dense 1-based ID; renumbered after UCC rerouting.
    pub id: ParcelId,

    /// Origin zone — the dispatching depot's zone, or the UCC zone for a
    /// consolidated final leg.
    pub origin: ZoneNum,

    /// Destination zone.  Mutated to the UCC zone when a parcel is
    /// consolidated.
    pub destination: ZoneNum,

    /// Dispatching depot, unchanged by rerouting.
    pub depot: DepotId,

    pub courier: CourierId,

    /// Defaults to [`VehicleType::VAN`]; resampled on UCC final legs.
    pub vehicle: VehicleType,

    /// `true` on the appended UCC → original-destination leg.
    pub from_ucc: bool,

    /// `true` on a parcel redirected into a UCC.
    pub to_ucc: bool,
}

// ── Synthesis ─────────────────────────────────────────────────────────────────

/// Expand courier splits into parcel records.
///
/// IDs continue a single running counter across the whole output; ordering
/// is zone-major (ascending zone number), courier-minor (registry order).
/// The emitted count equals the sum of all courier splits.
pub fn synthesize(
    demand:      &[ZoneDemand],
    assignments: &[Assignment],
    registry:    &CourierRegistry,
) -> GenResult<Vec<Parcel>> {
    let by_key: FxHashMap<(ZoneNum, CourierId), &Assignment> = assignments
        .iter()
        .map(|a| ((a.zone, a.courier), a))
        .collect();

    let expected: u64 = demand.iter().map(|zd| zd.emitted()).sum();
    let mut parcels = Vec::with_capacity(expected as usize);
    let mut next_id: u32 = 1;

    for zd in demand {
        if zd.total == 0 {
            continue;
        }
        for (c, &count) in zd.by_courier.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let courier = CourierId(c as u16);
            let assignment =
                by_key
                    .get(&(zd.zone, courier))
                    .ok_or_else(|| GenError::MissingAssignment {
                        courier: registry.code(courier).to_owned(),
                        zone:    zd.zone,
                    })?;

            for _ in 0..count {
                parcels.push(Parcel {
                    id:          ParcelId(next_id),
                    origin:      assignment.depot_zone,
                    destination: zd.zone,
                    depot:       assignment.depot,
                    courier,
                    vehicle:     VehicleType::VAN,
                    from_ucc:    false,
                    to_ucc:      false,
                });
                next_id += 1;
            }
        }
    }

    Ok(parcels)
}
