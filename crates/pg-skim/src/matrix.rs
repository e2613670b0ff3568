//! Square travel-cost matrix over matrix positions.
//!
//! # Data layout
//!
//! Costs are stored as one flat row-major `Vec<f64>`; the cell for
//! `(origin, destination)` lives at `origin.index() * dim + dest.index()`.
//! The matrix is directed: `cost(a, b)` and `cost(b, a)` may differ.
//!
//! Values keep the raw stored unit (seconds for time skims, metres for
//! distance skims); unit conversion is a pure caller-side function, see
//! [`crate::units`].

use pg_core::MatrixPos;

use crate::{SkimError, SkimResult};

/// Square cost table addressed by 1-based matrix position pairs.
#[derive(Debug)]
pub struct SkimMatrix {
    data: Vec<f64>,
    dim:  usize,
}

impl SkimMatrix {
    /// Reshape a flat cost array into an N×N matrix, `N = sqrt(len)`.
    ///
    /// Fails if the length is not a perfect square or any cost is negative.
    pub fn from_flat(data: Vec<f64>) -> SkimResult<SkimMatrix> {
        let dim = (data.len() as f64).sqrt() as usize;
        if dim * dim != data.len() {
            return Err(SkimError::NotSquare(data.len()));
        }
        for (index, &value) in data.iter().enumerate() {
            if value < 0.0 {
                return Err(SkimError::NegativeCost { index, value });
            }
        }
        Ok(SkimMatrix { data, dim })
    }

    /// Matrix dimension N.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The run aborts early if the skim and the zone set disagree in size.
    pub fn check_dimension(&self, zone_count: usize) -> SkimResult<()> {
        if self.dim != zone_count {
            return Err(SkimError::DimensionMismatch { skim: self.dim, zones: zone_count });
        }
        Ok(())
    }

    /// Cost from `origin` to `destination` in the raw stored unit.
    #[inline]
    pub fn cost(&self, origin: MatrixPos, destination: MatrixPos) -> f64 {
        self.data[origin.index() * self.dim + destination.index()]
    }

    /// The full outgoing-cost row of `origin`.
    #[inline]
    pub fn row(&self, origin: MatrixPos) -> &[f64] {
        let start = origin.index() * self.dim;
        &self.data[start..start + self.dim]
    }

    pub(crate) fn set(&mut self, origin: MatrixPos, destination: MatrixPos, value: f64) {
        self.data[origin.index() * self.dim + destination.index()] = value;
    }
}
