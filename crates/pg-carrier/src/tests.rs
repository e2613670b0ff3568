//! Unit tests for pg-carrier.

use pg_core::{CourierId, DepotId, ZoneNum};
use pg_zones::{Zone, ZoneIndex, ZoneTable};

use crate::courier::{CourierRegistry, MarketShares};
use crate::depot::{Depot, DepotIndex};

fn zone(num: u32) -> Zone {
    Zone {
        num: ZoneNum(num),
        x: 0.0,
        y: 0.0,
        households: 10.0,
        employment: 0.0,
        zez: false,
        ucc_zone: None,
    }
}

fn depot(id: u32, courier: &str, zone: u32) -> Depot {
    Depot { id: DepotId(id), courier: courier.to_owned(), zone: ZoneNum(zone), x: 0.0, y: 0.0 }
}

fn two_courier_setup() -> (CourierRegistry, MarketShares) {
    let pairs = vec![("DPD".to_owned(), 0.4), ("DHL".to_owned(), 0.6)];
    let registry = CourierRegistry::new(pairs.iter().map(|(c, _)| c.clone()).collect());
    let shares = MarketShares::new(&pairs, &registry).unwrap();
    (registry, shares)
}

#[cfg(test)]
mod courier {
    use super::*;
    use crate::CarrierError;

    #[test]
    fn registry_sorts_codes() {
        let (registry, shares) = two_courier_setup();
        assert_eq!(registry.code(CourierId(0)), "DHL");
        assert_eq!(registry.code(CourierId(1)), "DPD");
        assert_eq!(shares.share(CourierId(0)), 0.6);
        assert_eq!(shares.share(CourierId(1)), 0.4);
    }

    #[test]
    fn id_of_round_trip() {
        let (registry, _) = two_courier_setup();
        for id in registry.ids() {
            assert_eq!(registry.id_of(registry.code(id)), Some(id));
        }
        assert_eq!(registry.id_of("GLS"), None);
    }

    #[test]
    fn shares_may_sum_below_one() {
        let pairs = vec![("A".to_owned(), 0.3), ("B".to_owned(), 0.3)];
        let registry = CourierRegistry::new(vec!["A".into(), "B".into()]);
        assert!(MarketShares::new(&pairs, &registry).is_ok());
    }

    #[test]
    fn shares_above_one_rejected() {
        let pairs = vec![("A".to_owned(), 0.7), ("B".to_owned(), 0.7)];
        let registry = CourierRegistry::new(vec!["A".into(), "B".into()]);
        assert!(matches!(
            MarketShares::new(&pairs, &registry),
            Err(CarrierError::MalformedShares(_))
        ));
    }

    #[test]
    fn negative_share_rejected() {
        let pairs = vec![("A".to_owned(), -0.1)];
        let registry = CourierRegistry::new(vec!["A".into()]);
        assert!(MarketShares::new(&pairs, &registry).is_err());
    }
}

#[cfg(test)]
mod depot_index {
    use super::*;
    use crate::CarrierError;

    fn index_for(depots: &[Depot]) -> Result<DepotIndex, CarrierError> {
        let (registry, _) = two_courier_setup();
        let zones = ZoneTable::new(vec![zone(101), zone(102), zone(103)]).unwrap();
        let zone_index = ZoneIndex::build(&zones, 0, 0);
        DepotIndex::build(depots, &registry, &zone_index)
    }

    #[test]
    fn groups_by_courier_in_id_order() {
        let idx = index_for(&[
            depot(3, "DHL", 103),
            depot(1, "DHL", 101),
            depot(2, "DPD", 102),
        ])
        .unwrap();

        let dhl: Vec<u32> = idx.depots_of(CourierId(0)).map(|d| d.id.0).collect();
        assert_eq!(dhl, [1, 3]);
        let dpd: Vec<u32> = idx.depots_of(CourierId(1)).map(|d| d.id.0).collect();
        assert_eq!(dpd, [2]);

        // Columns follow global ID-sorted order.
        let cols: Vec<usize> = idx.all().iter().map(|d| d.col).collect();
        assert_eq!(cols, [0, 1, 2]);
        assert_eq!(idx.all()[0].id, DepotId(1));
    }

    #[test]
    fn courier_without_depots_is_fatal() {
        let err = index_for(&[depot(1, "DHL", 101)]).unwrap_err();
        assert!(matches!(err, CarrierError::NoDepots(ref c) if c == "DPD"));
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn unknown_courier_rejected() {
        let err = index_for(&[
            depot(1, "DHL", 101),
            depot(2, "DPD", 102),
            depot(3, "GLS", 103),
        ])
        .unwrap_err();
        assert!(matches!(err, CarrierError::UnknownCourier { depot: DepotId(3), .. }));
    }

    #[test]
    fn depot_in_unknown_zone_rejected() {
        let err = index_for(&[depot(1, "DHL", 999), depot(2, "DPD", 102)]).unwrap_err();
        assert!(matches!(
            err,
            CarrierError::DepotInUnknownZone { depot: DepotId(1), zone: ZoneNum(999) }
        ));
    }

    #[test]
    fn duplicate_depot_rejected() {
        let err = index_for(&[depot(1, "DHL", 101), depot(1, "DPD", 102)]).unwrap_err();
        assert!(matches!(err, CarrierError::DuplicateDepot(DepotId(1))));
    }
}

#[cfg(test)]
mod segments {
    use crate::segments::{ConsolidationTable, VehicleShares, FUELS_PER_VEHICLE, SEGMENT_COUNT};
    use crate::CarrierError;
    use pg_core::{SegmentId, UccVehicle};

    /// A raw grid where segment `s` puts all share mass on bucket `s % 7`.
    fn raw_grid() -> Vec<Vec<f64>> {
        let cols = UccVehicle::COUNT * FUELS_PER_VEHICLE + 1;
        (0..SEGMENT_COUNT + 1)
            .map(|s| {
                let mut row = vec![0.0; cols];
                row[(s % UccVehicle::COUNT) * FUELS_PER_VEHICLE] = 2.0;
                row
            })
            .collect()
    }

    #[test]
    fn consolidation_probability_lookup() {
        let t = ConsolidationTable::new(vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.95]).unwrap();
        assert_eq!(t.probability(SegmentId::PARCELS).unwrap(), 0.95);
        assert!(matches!(
            t.probability(SegmentId(9)),
            Err(CarrierError::UnknownSegment(SegmentId(9)))
        ));
    }

    #[test]
    fn consolidation_probability_out_of_range_rejected() {
        assert!(ConsolidationTable::new(vec![0.0; 6]).is_err()); // too short
        assert!(ConsolidationTable::new(vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 1.5]).is_err());
    }

    #[test]
    fn collapse_drops_trailing_row_and_column() {
        let shares = VehicleShares::from_raw(&raw_grid()).unwrap();
        // Only SEGMENT_COUNT rows survive.
        assert!(shares.cumulative(SegmentId(SEGMENT_COUNT as u8)).is_err());
        // Segment 0's mass is entirely in bucket 0.
        let cum = shares.cumulative(SegmentId(0)).unwrap();
        assert_eq!(cum[0], 1.0);
    }

    #[test]
    fn cumulative_reaches_one_for_every_segment() {
        let shares = VehicleShares::from_raw(&raw_grid()).unwrap();
        for s in 0..SEGMENT_COUNT as u8 {
            let cum = shares.cumulative(SegmentId(s)).unwrap();
            assert!(
                (cum[UccVehicle::COUNT - 1] - 1.0).abs() < VehicleShares::CUM_TOLERANCE,
                "segment {s} cumulative ends at {}",
                cum[UccVehicle::COUNT - 1]
            );
        }
    }

    #[test]
    fn fuel_columns_collapse_into_buckets() {
        let cols = UccVehicle::COUNT * FUELS_PER_VEHICLE + 1;
        let mut raw = vec![vec![0.0; cols]; SEGMENT_COUNT + 1];
        // Segment 6: half the mass spread over van fuel cells, half on truck.
        for f in 0..FUELS_PER_VEHICLE {
            raw[6][2 * FUELS_PER_VEHICLE + f] = 0.1; // van
        }
        raw[6][3 * FUELS_PER_VEHICLE] = 0.5; // truck
        // Other rows need nonzero mass to pass validation.
        for (s, row) in raw.iter_mut().enumerate() {
            if s != 6 {
                row[0] = 1.0;
            }
        }

        let shares = VehicleShares::from_raw(&raw).unwrap();
        let cum = shares.cumulative(SegmentId::PARCELS).unwrap();
        assert!((cum[2] - 0.5).abs() < 1e-12); // LEVV+moped+van = 0.5
        assert!((cum[3] - 1.0).abs() < 1e-12); // + truck = 1.0

        assert_eq!(shares.sample(SegmentId::PARCELS, 0.25).unwrap(), UccVehicle::Van);
        assert_eq!(shares.sample(SegmentId::PARCELS, 0.75).unwrap(), UccVehicle::Truck);
    }

    #[test]
    fn sample_never_defaults_past_the_distribution() {
        let shares = VehicleShares::from_raw(&raw_grid()).unwrap();
        // A draw at or above the final cumulative value must surface an error.
        let err = shares.sample(SegmentId(0), 1.0).unwrap_err();
        assert!(matches!(err, CarrierError::NoBucketSelected { segment: SegmentId(0), .. }));
        assert!(err.to_string().contains("sampling error"));
    }

    #[test]
    fn zero_mass_segment_rejected() {
        let mut raw = raw_grid();
        for cell in raw[3].iter_mut() {
            *cell = 0.0;
        }
        assert!(matches!(
            VehicleShares::from_raw(&raw),
            Err(CarrierError::MalformedSegmentTable(_))
        ));
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::loader::{load_depots_reader, load_shares_reader};
    use pg_core::{CourierId, DepotId};

    #[test]
    fn loads_depot_table() {
        let csv = "id,courier,zone,x,y\n2,DPD,102,1.0,2.0\n1,DHL,101,3.0,4.0\n";
        let depots = load_depots_reader(Cursor::new(csv)).unwrap();
        assert_eq!(depots.len(), 2);
        assert_eq!(depots[0].id, DepotId(2));
        assert_eq!(depots[1].courier, "DHL");
    }

    #[test]
    fn loads_shares_with_sorted_registry() {
        let csv = "courier,share\nDPD,0.4\nDHL,0.6\n";
        let (registry, shares) = load_shares_reader(Cursor::new(csv)).unwrap();
        assert_eq!(registry.code(CourierId(0)), "DHL");
        assert_eq!(shares.share(CourierId(0)), 0.6);
    }

    #[test]
    fn malformed_share_row_is_parse_error() {
        let csv = "courier,share\nDHL,lots\n";
        assert!(load_shares_reader(Cursor::new(csv)).is_err());
    }
}
