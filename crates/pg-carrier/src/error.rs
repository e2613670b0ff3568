use pg_core::{DepotId, SegmentId, ZoneNum};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarrierError {
    /// A courier in the market-share table has no depots.  Fatal: every
    /// courier that receives demand must be able to dispatch it.
    #[error("configuration error: courier {0} has no depots")]
    NoDepots(String),

    /// A depot references a courier absent from the market-share table.
    #[error("configuration error: depot {depot} references unknown courier {courier}")]
    UnknownCourier { depot: DepotId, courier: String },

    /// A depot sits in a zone without a matrix position.
    #[error("configuration error: depot {depot} in unknown zone {zone}")]
    DepotInUnknownZone { depot: DepotId, zone: ZoneNum },

    /// Duplicate depot identifier.
    #[error("data consistency error: duplicate depot {0}")]
    DuplicateDepot(DepotId),

    /// Market shares outside [0, 1] or summing above 1.
    #[error("data consistency error: {0}")]
    MalformedShares(String),

    /// Segment table with the wrong shape or a non-positive row sum.
    #[error("data consistency error: {0}")]
    MalformedSegmentTable(String),

    /// A cumulative vehicle-share draw found no bucket.  Surfaced instead of
    /// silently picking a default.
    #[error("sampling error: cumulative vehicle shares of segment {segment} select no bucket for draw {draw}")]
    NoBucketSelected { segment: SegmentId, draw: f64 },

    /// A segment missing from a configured table.
    #[error("configuration error: segment {0} missing from table")]
    UnknownSegment(SegmentId),

    #[error("carrier table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CarrierResult<T> = Result<T, CarrierError>;
