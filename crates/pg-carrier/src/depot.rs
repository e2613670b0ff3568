//! Depot records and the per-courier depot index.

use pg_core::{CourierId, DepotId, MatrixPos, ZoneNum};
use pg_zones::ZoneIndex;

use crate::courier::CourierRegistry;
use crate::{CarrierError, CarrierResult};

// ── Depot ─────────────────────────────────────────────────────────────────────

/// A courier facility from which parcels are dispatched.
#[derive(Clone, Debug)]
pub struct Depot {
    pub id:      DepotId,
    /// Courier code as written in the depot table.
    pub courier: String,
    /// Zone the depot resides in.
    pub zone:    ZoneNum,
    /// Coordinates, carried through but unused by the generator.
    pub x:       f64,
    pub y:       f64,
}

// ── DepotRef ──────────────────────────────────────────────────────────────────

/// A depot resolved against the zone index and the sub-skim layout.
#[derive(Copy, Clone, Debug)]
pub struct DepotRef {
    pub id:   DepotId,
    /// Matrix position of the depot's zone.
    pub pos:  MatrixPos,
    /// Zone the depot resides in (the origin of its parcels).
    pub zone: ZoneNum,
    /// Column of this depot in the depot sub-skim.
    pub col:  usize,
}

// ── DepotIndex ────────────────────────────────────────────────────────────────

/// All depots sorted by ID, grouped per courier.
///
/// The sorted order fixes each depot's sub-skim column and the deterministic
/// tie-break order of nearest-depot selection.
#[derive(Debug)]
pub struct DepotIndex {
    all:        Vec<DepotRef>,
    /// Indices into `all`, one list per courier in registry order.
    by_courier: Vec<Vec<usize>>,
}

impl DepotIndex {
    /// Resolve and group depot records.
    ///
    /// Fails if a depot references an unknown courier or zone, if depot IDs
    /// repeat, or if any registry courier ends up with no depots.
    pub fn build(
        depots:     &[Depot],
        registry:   &CourierRegistry,
        zone_index: &ZoneIndex,
    ) -> CarrierResult<DepotIndex> {
        let mut sorted: Vec<&Depot> = depots.iter().collect();
        sorted.sort_unstable_by_key(|d| d.id);

        let mut all = Vec::with_capacity(sorted.len());
        let mut by_courier = vec![Vec::new(); registry.len()];

        for (col, depot) in sorted.iter().enumerate() {
            if col > 0 && sorted[col - 1].id == depot.id {
                return Err(CarrierError::DuplicateDepot(depot.id));
            }
            let courier = registry.id_of(&depot.courier).ok_or_else(|| {
                CarrierError::UnknownCourier { depot: depot.id, courier: depot.courier.clone() }
            })?;
            let pos = zone_index.position_of(depot.zone).map_err(|_| {
                CarrierError::DepotInUnknownZone { depot: depot.id, zone: depot.zone }
            })?;

            by_courier[courier.0 as usize].push(all.len());
            all.push(DepotRef { id: depot.id, pos, zone: depot.zone, col });
        }

        for id in registry.ids() {
            if by_courier[id.0 as usize].is_empty() {
                return Err(CarrierError::NoDepots(registry.code(id).to_owned()));
            }
        }

        Ok(DepotIndex { all, by_courier })
    }

    /// Every depot in ID-sorted order; defines the sub-skim columns.
    pub fn all(&self) -> &[DepotRef] {
        &self.all
    }

    /// Matrix positions of all depots, in sub-skim column order.
    pub fn positions(&self) -> Vec<MatrixPos> {
        self.all.iter().map(|d| d.pos).collect()
    }

    /// A courier's depots in ID-sorted order.
    pub fn depots_of(&self, courier: CourierId) -> impl Iterator<Item = &DepotRef> {
        self.by_courier[courier.0 as usize].iter().map(|&i| &self.all[i])
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
