//! End-to-end run orchestration.
//!
//! [`PipelineBuilder`] collects the loaded inputs, validates them as a set
//! (the per-table checks already happened at load time) and resolves the
//! derived indices once.  [`Pipeline::run`] then executes the stages in
//! fixed order:
//!
//! 1. demand estimation per zone,
//! 2. nearest-depot assignment per (zone, courier),
//! 3. parcel synthesis,
//! 4. UCC rerouting (UCC scenario only),
//!
//! and returns the parcel set together with run-level KPIs.  Under the UCC
//! scenario the pre-rerouting parcel set is kept as the reference snapshot
//! so both can be written side by side.

use std::collections::BTreeMap;
use std::time::Instant;

use pg_carrier::{
    ConsolidationTable, CourierRegistry, Depot, DepotIndex, MarketShares, VehicleShares,
};
use pg_core::{ScenarioConfig, ScenarioLabel};
use pg_demand::estimate_all;
use pg_skim::{ParcelSkim, RepairRules, SkimMatrix};
use pg_zones::{ZoneIndex, ZoneTable};

use crate::assign::assign_depots;
use crate::kpi::{Kpi, KpiValue};
use crate::synth::{synthesize, Parcel};
use crate::ucc::reroute_via_ucc;
use crate::{GenError, GenResult};

// ── RunOutput ─────────────────────────────────────────────────────────────────

/// Everything a run produces.
pub struct RunOutput {
    /// Final parcel set, IDs dense `1..=len`.
    pub parcels: Vec<Parcel>,

    /// Pre-rerouting snapshot; present only under the UCC scenario.
    pub reference: Option<Vec<Parcel>>,

    /// Number of parcels redirected through a UCC (0 under REF).
    pub redirected: usize,

    pub kpi: Kpi,
}

// ── PipelineBuilder ───────────────────────────────────────────────────────────

/// Fluent collector for the run's inputs.
///
/// ```no_run
/// # use pg_gen::PipelineBuilder;
/// # fn demo(config: pg_core::ScenarioConfig, zones: pg_zones::ZoneTable,
/// #         skim: pg_skim::SkimMatrix, registry: pg_carrier::CourierRegistry,
/// #         shares: pg_carrier::MarketShares, depots: Vec<pg_carrier::Depot>)
/// # -> pg_gen::GenResult<()> {
/// let output = PipelineBuilder::new(config)
///     .zones(zones)
///     .skim(skim)
///     .couriers(registry, shares)
///     .depots(depots)
///     .build()?
///     .run()?;
/// # Ok(()) }
/// ```
pub struct PipelineBuilder {
    config:         ScenarioConfig,
    zones:          Option<ZoneTable>,
    skim:           Option<SkimMatrix>,
    repair:         RepairRules,
    registry:       Option<CourierRegistry>,
    shares:         Option<MarketShares>,
    depots:         Vec<Depot>,
    consolidation:  Option<ConsolidationTable>,
    vehicle_shares: Option<VehicleShares>,
}

impl PipelineBuilder {
    pub fn new(config: ScenarioConfig) -> PipelineBuilder {
        PipelineBuilder {
            config,
            zones: None,
            skim: None,
            repair: RepairRules::default(),
            registry: None,
            shares: None,
            depots: Vec::new(),
            consolidation: None,
            vehicle_shares: None,
        }
    }

    pub fn zones(mut self, zones: ZoneTable) -> Self {
        self.zones = Some(zones);
        self
    }

    /// Raw travel-time skim in seconds; repaired during [`build`](Self::build).
    pub fn skim(mut self, skim: SkimMatrix) -> Self {
        self.skim = Some(skim);
        self
    }

    /// Override the default skim repair rules.
    pub fn repair(mut self, repair: RepairRules) -> Self {
        self.repair = repair;
        self
    }

    pub fn couriers(mut self, registry: CourierRegistry, shares: MarketShares) -> Self {
        self.registry = Some(registry);
        self.shares = Some(shares);
        self
    }

    pub fn depots(mut self, depots: Vec<Depot>) -> Self {
        self.depots = depots;
        self
    }

    /// UCC policy tables; required iff the scenario label is `UCC`.
    pub fn ucc_policy(
        mut self,
        consolidation:  ConsolidationTable,
        vehicle_shares: VehicleShares,
    ) -> Self {
        self.consolidation = Some(consolidation);
        self.vehicle_shares = Some(vehicle_shares);
        self
    }

    /// Cross-validate the input set and resolve the derived indices.
    pub fn build(self) -> GenResult<Pipeline> {
        self.config.validate()?;

        let zones = required_input("zone table", self.zones)?;
        let mut skim = required_input("travel-time skim", self.skim)?;
        let registry = required_input("courier registry", self.registry)?;
        let shares = required_input("market shares", self.shares)?;
        if self.depots.is_empty() {
            return Err(GenError::Configuration("no depots supplied".to_owned()));
        }
        if shares.len() != registry.len() {
            return Err(GenError::Configuration(format!(
                "{} couriers but {} market shares",
                registry.len(),
                shares.len()
            )));
        }

        let ucc_policy = match self.config.label {
            ScenarioLabel::Reference => None,
            ScenarioLabel::Ucc => {
                let consolidation =
                    required_input("consolidation table (UCC scenario)", self.consolidation)?;
                let vehicle_shares =
                    required_input("vehicle share table (UCC scenario)", self.vehicle_shares)?;
                Some((consolidation, vehicle_shares))
            }
        };

        let zone_index = ZoneIndex::build(
            &zones,
            self.config.supra_zone_count,
            self.config.supra_zone_offset,
        );
        skim.check_dimension(zone_index.len())?;
        self.repair.apply(&mut skim)?;

        let depot_index = DepotIndex::build(&self.depots, &registry, &zone_index)?;
        let parcel_skim = ParcelSkim::build(&skim, &depot_index.positions());

        Ok(Pipeline {
            config: self.config,
            zones,
            zone_index,
            registry,
            shares,
            depot_index,
            parcel_skim,
            ucc_policy,
        })
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// A validated, ready-to-run generator.  [`run`](Self::run) is read-only and
/// deterministic for a fixed input set, so one pipeline can run repeatedly.
#[derive(Debug)]
pub struct Pipeline {
    config:      ScenarioConfig,
    zones:       ZoneTable,
    zone_index:  ZoneIndex,
    registry:    CourierRegistry,
    shares:      MarketShares,
    depot_index: DepotIndex,
    parcel_skim: ParcelSkim,
    ucc_policy:  Option<(ConsolidationTable, VehicleShares)>,
}

impl Pipeline {
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Execute all stages and collect KPIs.
    pub fn run(&self) -> GenResult<RunOutput> {
        let started = Instant::now();
        log::info!(
            "run start: scenario {}, {} zones, {} couriers, {} depots, seed {}",
            self.config.label,
            self.zones.len(),
            self.registry.len(),
            self.depot_index.len(),
            self.config.seed
        );

        let demand = estimate_all(&self.zones, &self.shares, &self.config);
        let demand_total: u64 = demand.iter().map(|zd| zd.total).sum();
        let emitted: u64 = demand.iter().map(|zd| zd.emitted()).sum();
        log::info!("demand estimated: {demand_total} parcels over {} zones", demand.len());

        let assignments = assign_depots(
            &demand,
            &self.zone_index,
            &self.depot_index,
            &self.parcel_skim,
            &self.registry,
        )?;
        log::info!("depots assigned: {} (zone, courier) pairs", assignments.len());

        let mut parcels = synthesize(&demand, &assignments, &self.registry)?;
        log::info!("parcels synthesized: {}", parcels.len());

        let (reference, redirected) = match &self.ucc_policy {
            None => (None, 0),
            Some((consolidation, vehicle_shares)) => {
                let snapshot = parcels.clone();
                let redirected = reroute_via_ucc(
                    &mut parcels,
                    &self.zones,
                    consolidation,
                    vehicle_shares,
                    self.config.seed,
                )?;
                log::info!("UCC rerouting: {redirected} parcels redirected");
                (Some(snapshot), redirected)
            }
        };

        let runtime = started.elapsed().as_secs_f64();
        let kpi = self.collect_kpi(&parcels, demand_total, emitted, redirected, runtime);
        log::info!("run done: {} parcels in {runtime:.3}s", parcels.len());

        Ok(RunOutput { parcels, reference, redirected, kpi })
    }

    fn collect_kpi(
        &self,
        parcels:      &[Parcel],
        demand_total: u64,
        emitted:      u64,
        redirected:   usize,
        runtime:      f64,
    ) -> Kpi {
        let mut per_courier = BTreeMap::new();
        for id in self.registry.ids() {
            let count = parcels.iter().filter(|p| p.courier == id).count();
            per_courier.insert(self.registry.code(id).to_owned(), KpiValue::Int(count as i64));
        }

        let mut kpi = Kpi::new();
        kpi.set_text("scenario", &self.config.label.to_string());
        kpi.set_int("seed", self.config.seed as i64);
        kpi.set_int("zones", self.zones.len() as i64);
        kpi.set_int("demand_total", demand_total as i64);
        kpi.set_int("parcels_emitted", emitted as i64);
        kpi.set_int("parcels_total", parcels.len() as i64);
        kpi.set_int("parcels_redirected", redirected as i64);
        kpi.set_map("parcels_per_courier", per_courier);
        kpi.set_float("runtime_s", runtime);
        kpi
    }
}

fn required_input<T>(name: &str, value: Option<T>) -> GenResult<T> {
    value.ok_or_else(|| GenError::Configuration(format!("pipeline input missing: {name}")))
}
