use pg_carrier::CarrierError;
use pg_core::{CoreError, ZoneNum};
use pg_skim::SkimError;
use pg_zones::ZoneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// Missing or contradictory run configuration detected by the pipeline
    /// itself (e.g. the UCC scenario without its policy tables).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A courier's depot list was empty at assignment time.  The depot index
    /// rejects this at build time already; this is the defensive backstop.
    #[error("no depot available for courier {courier} serving zone {zone}")]
    NoDepotAvailable { courier: String, zone: ZoneNum },

    /// A ZEZ-flagged destination without a configured UCC substitute zone.
    #[error("configuration error: zone {0} is flagged ZEZ but has no UCC zone")]
    MissingUccZone(ZoneNum),

    /// No depot assignment exists for a (zone, courier) pair that should
    /// have one.  Internal invariant violation.
    #[error("no depot assignment for courier {courier} in zone {zone}")]
    MissingAssignment { courier: String, zone: ZoneNum },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error(transparent)]
    Skim(#[from] SkimError),

    #[error(transparent)]
    Carrier(#[from] CarrierError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GenResult<T> = Result<T, GenError>;
