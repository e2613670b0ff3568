//! Unit tests for pg-demand.

use pg_core::{ScenarioConfig, ScenarioLabel, ZoneNum};
use pg_carrier::{CourierRegistry, MarketShares};
use pg_zones::{Zone, ZoneTable};

use crate::{estimate_all, estimate_zone, split_by_courier};

fn cfg() -> ScenarioConfig {
    ScenarioConfig {
        label: ScenarioLabel::Reference,
        parcels_per_hh: 0.2,
        parcels_per_empl: 0.1,
        success_rate_b2c: 1.0,
        success_rate_b2b: 1.0,
        seed: 1,
        supra_zone_count: 0,
        supra_zone_offset: 0,
    }
}

fn zone(num: u32, households: f64, employment: f64) -> Zone {
    Zone {
        num: ZoneNum(num),
        x: 0.0,
        y: 0.0,
        households,
        employment,
        zez: false,
        ucc_zone: None,
    }
}

fn shares(pairs: &[(&str, f64)]) -> MarketShares {
    let owned: Vec<(String, f64)> = pairs.iter().map(|(c, s)| (c.to_string(), *s)).collect();
    let registry = CourierRegistry::new(owned.iter().map(|(c, _)| c.clone()).collect());
    MarketShares::new(&owned, &registry).unwrap()
}

#[cfg(test)]
mod totals {
    use super::*;

    #[test]
    fn household_and_employment_terms_add() {
        // 100 × 0.2 + 50 × 0.1 = 25
        assert_eq!(estimate_zone(&zone(1, 100.0, 50.0), &cfg()), 25);
    }

    #[test]
    fn success_rates_inflate_demand() {
        let mut c = cfg();
        c.success_rate_b2c = 0.5;
        // 100 × 0.2 / 0.5 = 40
        assert_eq!(estimate_zone(&zone(1, 100.0, 0.0), &c), 40);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 17 × 0.2 = 3.4 → 3; 18 × 0.2 = 3.6 → 4; 12.5 → 13.
        assert_eq!(estimate_zone(&zone(1, 17.0, 0.0), &cfg()), 3);
        assert_eq!(estimate_zone(&zone(1, 18.0, 0.0), &cfg()), 4);
        assert_eq!(estimate_zone(&zone(1, 62.5, 0.0), &cfg()), 13);
    }

    #[test]
    fn empty_zone_has_zero_demand() {
        assert_eq!(estimate_zone(&zone(1, 0.0, 0.0), &cfg()), 0);
    }
}

#[cfg(test)]
mod splits {
    use super::*;

    #[test]
    fn exact_shares_split_exactly() {
        let s = shares(&[("DHL", 0.6), ("DPD", 0.4)]);
        assert_eq!(split_by_courier(20, &s), [12, 8]);
    }

    #[test]
    fn independent_rounding_can_drift_from_total() {
        // Three couriers at 1/3 each of 100 → 33 + 33 + 33 = 99 ≠ 100.
        let third = 1.0 / 3.0;
        let s = shares(&[("A", third), ("B", third), ("C", third)]);
        let split = split_by_courier(100, &s);
        assert_eq!(split, [33, 33, 33]);
        assert_eq!(split.iter().sum::<u64>(), 99);
    }

    #[test]
    fn zero_share_courier_gets_nothing() {
        let s = shares(&[("DHL", 0.6), ("DPD", 0.0)]);
        assert_eq!(split_by_courier(20, &s), [12, 0]);
    }
}

#[cfg(test)]
mod all_zones {
    use super::*;

    #[test]
    fn iterates_zones_in_ascending_order() {
        let zones =
            ZoneTable::new(vec![zone(30, 10.0, 0.0), zone(10, 20.0, 0.0), zone(20, 0.0, 0.0)])
                .unwrap();
        let s = shares(&[("DHL", 0.6), ("DPD", 0.4)]);
        let demand = estimate_all(&zones, &s, &cfg());

        let nums: Vec<u32> = demand.iter().map(|d| d.zone.0).collect();
        assert_eq!(nums, [10, 20, 30]);
        assert_eq!(demand[0].total, 4);
        assert_eq!(demand[1].total, 0);
        assert_eq!(demand[1].emitted(), 0);
        assert_eq!(demand[2].total, 2);
    }

    #[test]
    fn emitted_matches_split_sum() {
        let zones = ZoneTable::new(vec![zone(1, 100.0, 0.0)]).unwrap();
        let s = shares(&[("DHL", 0.6), ("DPD", 0.4)]);
        let demand = estimate_all(&zones, &s, &cfg());
        assert_eq!(demand[0].emitted(), demand[0].by_courier.iter().sum::<u64>());
    }
}
