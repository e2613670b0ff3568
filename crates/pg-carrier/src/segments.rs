//! Per-logistic-segment policy tables.
//!
//! Two tables drive the UCC scenario:
//!
//! - **Consolidation potential**: per segment, the probability that a
//!   ZEZ-bound delivery is consolidated through a UCC.
//! - **Vehicle shares**: per segment, the share of each vehicle×fuel
//!   combination on the UCC final leg.  The raw grid has
//!   [`FUELS_PER_VEHICLE`] fuel columns per vehicle bucket plus one trailing
//!   row and column for dangerous goods, which carry no consolidation
//!   potential and are dropped.  Fuel columns are summed per bucket and each
//!   segment row is cumulatively normalized for inverse-CDF sampling.

use pg_core::{SegmentId, UccVehicle};

use crate::{CarrierError, CarrierResult};

/// Logistic segments after the dangerous-goods row is dropped.
pub const SEGMENT_COUNT: usize = 7;

/// Fuel-type columns per vehicle bucket in the raw share grid.
pub const FUELS_PER_VEHICLE: usize = 5;

// ── ConsolidationTable ────────────────────────────────────────────────────────

/// Per-segment probability of rerouting a ZEZ-bound parcel through a UCC.
#[derive(Debug)]
pub struct ConsolidationTable {
    probs: Vec<f64>,
}

impl ConsolidationTable {
    pub fn new(probs: Vec<f64>) -> CarrierResult<ConsolidationTable> {
        if probs.len() < SEGMENT_COUNT {
            return Err(CarrierError::MalformedSegmentTable(format!(
                "consolidation table has {} segments, expected at least {SEGMENT_COUNT}",
                probs.len()
            )));
        }
        for (i, &p) in probs.iter().enumerate() {
            if !(0.0..=1.0).contains(&p) {
                return Err(CarrierError::MalformedSegmentTable(format!(
                    "consolidation probability {p} of segment {i} outside [0, 1]"
                )));
            }
        }
        Ok(ConsolidationTable { probs })
    }

    pub fn probability(&self, segment: SegmentId) -> CarrierResult<f64> {
        self.probs
            .get(segment.0 as usize)
            .copied()
            .ok_or(CarrierError::UnknownSegment(segment))
    }
}

// ── VehicleShares ─────────────────────────────────────────────────────────────

/// Cumulative per-segment vehicle-bucket distributions.
#[derive(Debug)]
pub struct VehicleShares {
    /// `cum[segment][bucket]`, each row ending at 1.0 (± float noise).
    cum: Vec<[f64; UccVehicle::COUNT]>,
}

impl VehicleShares {
    /// Tolerance for the final cumulative value reaching 1.0.
    pub const CUM_TOLERANCE: f64 = 1e-6;

    /// Collapse a raw vehicle×fuel share grid.
    ///
    /// `raw` is the full input table including the trailing dangerous-goods
    /// row and column, both of which are dropped here.
    pub fn from_raw(raw: &[Vec<f64>]) -> CarrierResult<VehicleShares> {
        let expected_cols = UccVehicle::COUNT * FUELS_PER_VEHICLE + 1;
        if raw.len() < SEGMENT_COUNT + 1 {
            return Err(CarrierError::MalformedSegmentTable(format!(
                "vehicle share table has {} rows, expected {}",
                raw.len(),
                SEGMENT_COUNT + 1
            )));
        }

        let mut cum = Vec::with_capacity(SEGMENT_COUNT);
        for (seg, row) in raw.iter().take(SEGMENT_COUNT).enumerate() {
            if row.len() != expected_cols {
                return Err(CarrierError::MalformedSegmentTable(format!(
                    "vehicle share row {seg} has {} columns, expected {expected_cols}",
                    row.len()
                )));
            }

            // Sum fixed-width fuel sub-ranges per bucket, dropping the last column.
            let mut buckets = [0.0f64; UccVehicle::COUNT];
            for (b, bucket) in buckets.iter_mut().enumerate() {
                let start = b * FUELS_PER_VEHICLE;
                *bucket = row[start..start + FUELS_PER_VEHICLE].iter().sum();
            }

            let total: f64 = buckets.iter().sum();
            if total <= 0.0 {
                return Err(CarrierError::MalformedSegmentTable(format!(
                    "vehicle shares of segment {seg} sum to {total}"
                )));
            }

            let mut running = 0.0;
            for bucket in buckets.iter_mut() {
                running += *bucket;
                *bucket = running / total;
            }
            cum.push(buckets);
        }

        Ok(VehicleShares { cum })
    }

    /// The cumulative distribution of one segment, for validation and tests.
    pub fn cumulative(&self, segment: SegmentId) -> CarrierResult<&[f64; UccVehicle::COUNT]> {
        self.cum
            .get(segment.0 as usize)
            .ok_or(CarrierError::UnknownSegment(segment))
    }

    /// Inverse-CDF sample: the first bucket whose cumulative share exceeds
    /// `draw`.
    ///
    /// Errors if no bucket qualifies — a distribution defect, never papered
    /// over with a default bucket.
    pub fn sample(&self, segment: SegmentId, draw: f64) -> CarrierResult<UccVehicle> {
        let cum = self.cumulative(segment)?;
        for (i, &c) in cum.iter().enumerate() {
            if c > draw {
                return Ok(UccVehicle::ALL[i]);
            }
        }
        Err(CarrierError::NoBucketSelected { segment, draw })
    }
}
