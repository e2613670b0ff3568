//! Unit tests for pg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DepotId, MatrixPos, ParcelId, SegmentId, ZoneNum};

    #[test]
    fn matrix_pos_is_one_based() {
        assert_eq!(MatrixPos(1).index(), 0);
        assert_eq!(MatrixPos(500).index(), 499);
        assert_eq!(MatrixPos::from_index(0), MatrixPos(1));
    }

    #[test]
    fn ordering() {
        assert!(ZoneNum(100) < ZoneNum(101));
        assert!(ParcelId(1) < ParcelId(2));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ZoneNum::INVALID.0, u32::MAX);
        assert_eq!(DepotId::INVALID.0, u32::MAX);
        assert_eq!(ParcelId::default(), ParcelId::INVALID);
    }

    #[test]
    fn parcels_segment_index() {
        assert_eq!(SegmentId::PARCELS.0, 6);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(ZoneNum(42).to_string(), "42");
        assert_eq!(MatrixPos(42).to_string(), "#42");
    }
}

#[cfg(test)]
mod vehicle {
    use crate::{UccVehicle, VehicleType};

    #[test]
    fn van_is_default_code() {
        assert_eq!(VehicleType::VAN, VehicleType(7));
        assert_eq!(UccVehicle::Van.vehicle_type(), VehicleType::VAN);
    }

    #[test]
    fn bucket_to_code_mapping() {
        let codes: Vec<u8> = UccVehicle::ALL.iter().map(|v| v.vehicle_type().0).collect();
        assert_eq!(codes, [8, 9, 7, 1, 5, 6, 6]);
    }
}

#[cfg(test)]
mod config {
    use crate::{ScenarioConfig, ScenarioLabel};

    fn base() -> ScenarioConfig {
        ScenarioConfig {
            label: ScenarioLabel::Reference,
            parcels_per_hh: 0.195,
            parcels_per_empl: 0.073,
            success_rate_b2c: 0.75,
            success_rate_b2b: 0.88,
            seed: 1,
            supra_zone_count: ScenarioConfig::DEFAULT_SUPRA_COUNT,
            supra_zone_offset: ScenarioConfig::DEFAULT_SUPRA_OFFSET,
        }
    }

    #[test]
    fn valid_config_passes() {
        base().validate().unwrap();
    }

    #[test]
    fn zero_success_rate_rejected() {
        let mut cfg = base();
        cfg.success_rate_b2c = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_demand_rate_rejected() {
        let mut cfg = base();
        cfg.parcels_per_empl = -0.1;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn label_parsing() {
        assert_eq!(ScenarioLabel::parse("REF").unwrap(), ScenarioLabel::Reference);
        assert_eq!(ScenarioLabel::parse(" UCC ").unwrap(), ScenarioLabel::Ucc);
        assert!(ScenarioLabel::parse("BAU").is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{ParcelRng, RunRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = RunRng::new(12345);
        let mut r2 = RunRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn parcel_rng_is_index_local() {
        let mut a = ParcelRng::for_parcel(7, 3);
        let mut b = ParcelRng::for_parcel(7, 3);
        let mut c = ParcelRng::for_parcel(7, 4);
        let (va, vb, vc) = (a.unit(), b.unit(), c.unit());
        assert_eq!(va, vb);
        assert_ne!(va, vc, "draws for adjacent parcels should diverge");
    }

    #[test]
    fn unit_in_range() {
        let mut rng = RunRng::new(0);
        for _ in 0..1000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
