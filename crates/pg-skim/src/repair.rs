//! Load-time skim repairs.
//!
//! Two defects in the source data are fixed once, right after loading:
//!
//! 1. Cells flagged as defective (known data gaps) are hard-set to a large
//!    sentinel cost in both directions, making them effectively unreachable.
//! 2. Diagonal cells arrive as 0; a zero intrazonal travel time would make
//!    every zone its own nearest depot location.  Each diagonal cell is
//!    replaced by `factor × min(nonzero costs in its row)`.
//!
//! The factor, the sentinel, and the defective-cell list are all tied to a
//! specific dataset, so they are fields here rather than constants.

use pg_core::MatrixPos;

use crate::matrix::SkimMatrix;
use crate::{SkimError, SkimResult};

/// Configurable repair rules applied once at load.
#[derive(Clone, Debug)]
pub struct RepairRules {
    /// Cells with known-bad values; each is repaired in both directions.
    pub defective: Vec<(MatrixPos, MatrixPos)>,

    /// Sentinel cost for defective cells, in the matrix's raw unit.
    pub unreachable_cost: f64,

    /// Diagonal replacement factor applied to the row's minimum nonzero cost.
    pub intrazonal_factor: f64,
}

impl Default for RepairRules {
    /// The reference dataset's values: no flagged cells, 1e7 sentinel,
    /// 0.7 intrazonal factor.
    fn default() -> Self {
        RepairRules {
            defective:         Vec::new(),
            unreachable_cost:  1.0e7,
            intrazonal_factor: 0.7,
        }
    }
}

impl RepairRules {
    /// Apply both repairs to `skim`, defective cells first.
    pub fn apply(&self, skim: &mut SkimMatrix) -> SkimResult<()> {
        let dim = skim.dim();

        for &(a, b) in &self.defective {
            if a.index() >= dim || b.index() >= dim {
                return Err(SkimError::CellOutOfRange(a.0, b.0, dim));
            }
            skim.set(a, b, self.unreachable_cost);
            skim.set(b, a, self.unreachable_cost);
        }

        for i in 0..dim {
            let pos = MatrixPos::from_index(i);
            let min_nonzero = skim
                .row(pos)
                .iter()
                .copied()
                .filter(|&c| c > 0.0)
                .fold(f64::INFINITY, f64::min);
            if min_nonzero.is_finite() {
                skim.set(pos, pos, self.intrazonal_factor * min_nonzero);
            }
            // A row of all zeros stays untouched; the dimension checks
            // upstream make this a degenerate single-zone case only.
        }

        Ok(())
    }
}
