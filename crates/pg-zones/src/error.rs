use pg_core::ZoneNum;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZoneError {
    /// An external zone number has no matrix position (e.g. a depot placed
    /// in a zone outside the declared set).
    #[error("configuration error: zone {0} has no matrix position")]
    UnknownZone(ZoneNum),

    /// A matrix position outside `1..=N`.
    #[error("configuration error: matrix position {0} out of range (1..={1})")]
    PositionOutOfRange(u32, u32),

    /// Duplicate zone number in the zone table.
    #[error("data consistency error: duplicate zone {0} in zone table")]
    DuplicateZone(ZoneNum),

    /// A negative household or employment count.
    #[error("data consistency error: zone {zone} has negative {field} ({value})")]
    NegativeCount {
        zone:  ZoneNum,
        field: &'static str,
        value: f64,
    },

    #[error("zone table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
