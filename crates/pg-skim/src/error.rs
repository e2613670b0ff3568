use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkimError {
    /// Flat array length is not a perfect square.
    #[error("data consistency error: skim length {0} is not a perfect square")]
    NotSquare(usize),

    /// Matrix dimension disagrees with the zone index.
    #[error("data consistency error: skim dimension {skim} does not match zone count {zones}")]
    DimensionMismatch { skim: usize, zones: usize },

    /// A repair rule references a cell outside the matrix.
    #[error("configuration error: defective cell ({0}, {1}) outside matrix of dimension {2}")]
    CellOutOfRange(u32, u32, usize),

    /// Negative cost in the input data.
    #[error("data consistency error: negative cost {value} at flat index {index}")]
    NegativeCost { index: usize, value: f64 },

    #[error("skim parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SkimResult<T> = Result<T, SkimError>;
