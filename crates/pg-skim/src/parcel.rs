//! Depot sub-skim: the zones × depots travel-time slice used for assignment.
//!
//! Rows are all matrix positions, columns are the depots in depot-ID-sorted
//! order.  Values are the travel time **from the depot's zone to the row's
//! zone** (the delivery direction), converted to hours and rounded to 4
//! decimals.  The full skim is only needed to build this; assignment reads
//! nothing else.

use pg_core::MatrixPos;

use crate::matrix::SkimMatrix;
use crate::units::{round4, secs_to_hours};

/// Zones × depots travel-time table in hours.
#[derive(Debug)]
pub struct ParcelSkim {
    /// Row-major `[zone][depot]` hours.
    data:     Vec<f64>,
    n_depots: usize,
}

impl ParcelSkim {
    /// Extract the depot columns from a seconds-unit travel-time skim.
    ///
    /// `depot_positions[j]` is the matrix position of the zone holding depot
    /// column `j`.
    pub fn build(skim: &SkimMatrix, depot_positions: &[MatrixPos]) -> ParcelSkim {
        let dim = skim.dim();
        let n_depots = depot_positions.len();
        let mut data = vec![0.0; dim * n_depots];

        for (j, &depot_pos) in depot_positions.iter().enumerate() {
            let row = skim.row(depot_pos);
            for (i, &secs) in row.iter().enumerate() {
                data[i * n_depots + j] = round4(secs_to_hours(secs));
            }
        }

        ParcelSkim { data, n_depots }
    }

    pub fn n_depots(&self) -> usize {
        self.n_depots
    }

    /// Travel time in hours from depot column `depot_col` to `zone`.
    #[inline]
    pub fn hours(&self, zone: MatrixPos, depot_col: usize) -> f64 {
        self.data[zone.index() * self.n_depots + depot_col]
    }
}
