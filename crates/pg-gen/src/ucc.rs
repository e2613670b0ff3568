//! UCC rerouting pass.
//!
//! Each parcel is either `DIRECT` (untouched) or transitions to `VIA_UCC`:
//! its destination becomes the zone's consolidation center and one new
//! final-leg parcel (UCC → original destination) is appended, with the
//! vehicle resampled from the segment's share distribution.  A transition
//! happens iff the destination is a zero-emission zone **and** a uniform
//! draw passes the segment's consolidation probability.
//!
//! # Two phases
//!
//! 1. **Decide** — per parcel, independent of every other parcel.  Draws
//!    come from a [`ParcelRng`] keyed by the parcel's 0-based index, so this
//!    phase may run on a Rayon pool (`parallel` feature) without changing a
//!    single output byte.
//! 2. **Apply** — sequential, ascending parcel index: mutate redirected
//!    parcels in place, append their final legs in the same order, then
//!    renumber all IDs `1..=total`.
//!
//! Conservation: `len(after) == len(before) + redirected`.

use pg_carrier::{ConsolidationTable, VehicleShares};
use pg_core::{ParcelId, ParcelRng, SegmentId, ZoneNum};
use pg_zones::ZoneTable;

use crate::synth::Parcel;
use crate::{GenError, GenResult};

/// A positive rerouting decision for one parcel.
#[derive(Copy, Clone, Debug)]
struct Redirect {
    ucc_zone: ZoneNum,
    vehicle:  pg_core::VehicleType,
}

/// Reroute a probabilistic subset of `parcels` through consolidation
/// centers.  Returns the number of redirected parcels.
pub fn reroute_via_ucc(
    parcels:       &mut Vec<Parcel>,
    zones:         &ZoneTable,
    consolidation: &ConsolidationTable,
    shares:        &VehicleShares,
    seed:          u64,
) -> GenResult<usize> {
    let segment = SegmentId::PARCELS;
    let prob = consolidation.probability(segment)?;

    // ── Phase 1: decide ───────────────────────────────────────────────────
    let decisions = decide(parcels, zones, prob, shares, segment, seed)?;

    // ── Phase 2: apply, ascending parcel index ────────────────────────────
    let mut legs = Vec::new();
    for (i, redirect) in decisions.into_iter().enumerate() {
        let Some(redirect) = redirect else { continue };
        let parcel = &mut parcels[i];
        let true_dest = parcel.destination;

        parcel.destination = redirect.ucc_zone;
        parcel.to_ucc = true;

        legs.push(Parcel {
            id:          ParcelId::INVALID, // renumbered below
            origin:      redirect.ucc_zone,
            destination: true_dest,
            depot:       parcel.depot,
            courier:     parcel.courier,
            vehicle:     redirect.vehicle,
            from_ucc:    true,
            to_ucc:      false,
        });
    }

    let redirected = legs.len();
    parcels.append(&mut legs);
    for (i, parcel) in parcels.iter_mut().enumerate() {
        parcel.id = ParcelId(i as u32 + 1);
    }

    Ok(redirected)
}

/// Evaluate the transition rule for one parcel.
///
/// Both draws for a parcel come from its own `ParcelRng`: the consolidation
/// draw first, the vehicle draw only on transition.
fn decide_one(
    index:   usize,
    parcel:  &Parcel,
    zones:   &ZoneTable,
    prob:    f64,
    shares:  &VehicleShares,
    segment: SegmentId,
    seed:    u64,
) -> GenResult<Option<Redirect>> {
    let zone = zones.require(parcel.destination)?;
    if !zone.zez {
        return Ok(None);
    }

    let mut rng = ParcelRng::for_parcel(seed, index);
    if rng.unit() >= prob {
        return Ok(None);
    }

    let ucc_zone = zone.ucc_zone.ok_or(GenError::MissingUccZone(zone.num))?;
    let vehicle = shares.sample(segment, rng.unit())?.vehicle_type();
    Ok(Some(Redirect { ucc_zone, vehicle }))
}

#[cfg(not(feature = "parallel"))]
fn decide(
    parcels: &[Parcel],
    zones:   &ZoneTable,
    prob:    f64,
    shares:  &VehicleShares,
    segment: SegmentId,
    seed:    u64,
) -> GenResult<Vec<Option<Redirect>>> {
    parcels
        .iter()
        .enumerate()
        .map(|(i, p)| decide_one(i, p, zones, prob, shares, segment, seed))
        .collect()
}

#[cfg(feature = "parallel")]
fn decide(
    parcels: &[Parcel],
    zones:   &ZoneTable,
    prob:    f64,
    shares:  &VehicleShares,
    segment: SegmentId,
    seed:    u64,
) -> GenResult<Vec<Option<Redirect>>> {
    use rayon::prelude::*;

    parcels
        .par_iter()
        .enumerate()
        .map(|(i, p)| decide_one(i, p, zones, prob, shares, segment, seed))
        .collect()
}
