//! Unit tests for pg-skim.

use pg_core::MatrixPos;

use crate::matrix::SkimMatrix;

/// 3×3 seconds matrix with a zero diagonal, row-major.
fn sample() -> SkimMatrix {
    SkimMatrix::from_flat(vec![
        0.0, 600.0, 1200.0, //
        600.0, 0.0, 1800.0, //
        900.0, 1800.0, 0.0,
    ])
    .unwrap()
}

#[cfg(test)]
mod matrix {
    use super::*;
    use crate::SkimError;

    #[test]
    fn lookup_is_row_major_and_directed() {
        let m = sample();
        assert_eq!(m.dim(), 3);
        assert_eq!(m.cost(MatrixPos(1), MatrixPos(2)), 600.0);
        assert_eq!(m.cost(MatrixPos(3), MatrixPos(1)), 900.0);
        assert_ne!(m.cost(MatrixPos(1), MatrixPos(3)), m.cost(MatrixPos(3), MatrixPos(1)));
    }

    #[test]
    fn row_slice() {
        let m = sample();
        assert_eq!(m.row(MatrixPos(2)), &[600.0, 0.0, 1800.0]);
    }

    #[test]
    fn non_square_rejected() {
        let err = SkimMatrix::from_flat(vec![1.0; 8]).unwrap_err();
        assert!(matches!(err, SkimError::NotSquare(8)));
        assert!(err.to_string().contains("data consistency error"));
    }

    #[test]
    fn negative_cost_rejected() {
        let err = SkimMatrix::from_flat(vec![0.0, -1.0, 2.0, 0.0]).unwrap_err();
        assert!(matches!(err, SkimError::NegativeCost { index: 1, .. }));
    }

    #[test]
    fn dimension_check_against_zone_count() {
        let m = sample();
        assert!(m.check_dimension(3).is_ok());
        assert!(matches!(
            m.check_dimension(4),
            Err(SkimError::DimensionMismatch { skim: 3, zones: 4 })
        ));
    }
}

#[cfg(test)]
mod repair {
    use super::*;
    use crate::RepairRules;

    #[test]
    fn diagonal_gets_fraction_of_row_minimum() {
        let mut m = sample();
        RepairRules::default().apply(&mut m).unwrap();
        // Row 1 min nonzero = 600 → diagonal 420.
        assert_eq!(m.cost(MatrixPos(1), MatrixPos(1)), 0.7 * 600.0);
        // Row 3 min nonzero = 900 → diagonal 630.
        assert_eq!(m.cost(MatrixPos(3), MatrixPos(3)), 0.7 * 900.0);
    }

    #[test]
    fn intrazonal_factor_is_configurable() {
        let mut m = sample();
        let rules = RepairRules { intrazonal_factor: 0.5, ..Default::default() };
        rules.apply(&mut m).unwrap();
        assert_eq!(m.cost(MatrixPos(2), MatrixPos(2)), 0.5 * 600.0);
    }

    #[test]
    fn defective_cell_set_both_directions() {
        let mut m = sample();
        let rules = RepairRules {
            defective: vec![(MatrixPos(1), MatrixPos(3))],
            unreachable_cost: 9.9e6,
            ..Default::default()
        };
        rules.apply(&mut m).unwrap();
        assert_eq!(m.cost(MatrixPos(1), MatrixPos(3)), 9.9e6);
        assert_eq!(m.cost(MatrixPos(3), MatrixPos(1)), 9.9e6);
    }

    #[test]
    fn defective_cell_out_of_range_rejected() {
        let mut m = sample();
        let rules = RepairRules {
            defective: vec![(MatrixPos(1), MatrixPos(9))],
            ..Default::default()
        };
        assert!(rules.apply(&mut m).is_err());
    }
}

#[cfg(test)]
mod units {
    use crate::units::{meters_to_km, round4, secs_to_hours};

    #[test]
    fn conversions() {
        assert_eq!(secs_to_hours(3_600.0), 1.0);
        assert_eq!(meters_to_km(2_500.0), 2.5);
    }

    #[test]
    fn round4_behaviour() {
        assert_eq!(round4(0.123_449), 0.123_4);
        assert_eq!(round4(0.123_46), 0.123_5);
    }
}

#[cfg(test)]
mod parcel {
    use super::*;
    use crate::ParcelSkim;

    #[test]
    fn columns_hold_depot_to_zone_hours() {
        let m = sample();
        // Depots sit at positions 2 and 3.
        let ps = ParcelSkim::build(&m, &[MatrixPos(2), MatrixPos(3)]);
        assert_eq!(ps.n_depots(), 2);
        // Depot at pos 2 → zone 1: 600 s = 0.1667 h after rounding.
        assert_eq!(ps.hours(MatrixPos(1), 0), 0.166_7);
        // Depot at pos 3 → zone 2: 1800 s = 0.5 h.
        assert_eq!(ps.hours(MatrixPos(2), 1), 0.5);
    }
}

#[cfg(test)]
mod loader {
    use crate::loader::read_mtx_bytes;

    #[test]
    fn header_word_dropped() {
        let mut bytes = Vec::new();
        for word in [2i32, 0, 600, 600, 0] {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        let values = read_mtx_bytes(&bytes).unwrap();
        assert_eq!(values, [0.0, 600.0, 600.0, 0.0]);
    }

    #[test]
    fn truncated_file_rejected() {
        assert!(read_mtx_bytes(&[1, 2, 3]).is_err());
        assert!(read_mtx_bytes(&[]).is_err());
    }
}
