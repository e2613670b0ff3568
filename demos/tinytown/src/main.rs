//! tinytown — smallest example for the parcel demand generator.
//!
//! A six-zone town: four residential/mixed zones, a commerce park, and a
//! zero-emission city center served by a consolidation center at the town
//! edge.  Three couriers split the market.  The demo runs the reference
//! scenario and the UCC scenario back to back from embedded data; swap the
//! embedded CSVs for real zone, depot, and skim files to run at full scale.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use pg_carrier::segments::FUELS_PER_VEHICLE;
use pg_carrier::{
    load_consolidation_reader, load_depots_reader, load_shares_reader, VehicleShares,
    SEGMENT_COUNT,
};
use pg_core::{ScenarioLabel, UccVehicle};
use pg_gen::{parse_params_reader, KpiValue, PipelineBuilder, RunOutput};
use pg_output::{write_kpi, ParcelWriter};
use pg_skim::SkimMatrix;
use pg_zones::{load_zones_reader, ZoneTable};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Average network speed used to turn centroid distances into a time skim.
const SPEED_M_PER_S: f64 = 8.33; // 30 km/h

const OUTPUT_DIR: &str = "output/tinytown";

// ── Embedded datasets ─────────────────────────────────────────────────────────

// Zone 104 is the ZEZ city center; its parcels consolidate in zone 106,
// where the couriers' depots sit.
const ZONES_CSV: &str = "\
zone,x,y,households,employment,zez,ucc_zone\n\
101,1000.0,3000.0,520.0,40.0,0,\n\
102,1000.0,0.0,610.0,30.0,0,\n\
103,3000.0,1500.0,480.0,55.0,0,\n\
104,2000.0,1500.0,350.0,400.0,1,106\n\
105,3500.0,500.0,20.0,600.0,0,\n\
106,0.0,1500.0,5.0,120.0,0,\n\
";

const DEPOTS_CSV: &str = "\
id,courier,zone,x,y\n\
1,DHL,106,0.0,1500.0\n\
2,DPD,106,0.0,1500.0\n\
3,GLS,102,1000.0,0.0\n\
4,DHL,105,3500.0,500.0\n\
";

const SHARES_CSV: &str = "\
courier,share\n\
DHL,0.38\n\
DPD,0.33\n\
GLS,0.29\n\
";

// Segment 6 is the parcel segment; the others are listed for completeness.
const CONSOLIDATION_CSV: &str = "\
segment,probability\n\
0,0.05\n\
1,0.05\n\
2,0.10\n\
3,0.10\n\
4,0.05\n\
5,0.05\n\
6,0.45\n\
";

const PARAMS_REF: &str = "\
LABEL               = REF   :string\n\
PARCELS_PER_HH      = 0.10  :float\n\
PARCELS_PER_EMPL    = 0.05  :float\n\
PARCELS_SUCCESS_B2C = 0.75  :float\n\
PARCELS_SUCCESS_B2B = 0.90  :float\n\
SEED                = 42    :int\n\
SUPRA_ZONES         = 0     :int\n\
SUPRA_ZONE_OFFSET   = 0     :int\n\
";

const PARAMS_UCC: &str = "\
LABEL               = UCC   :string\n\
PARCELS_PER_HH      = 0.10  :float\n\
PARCELS_PER_EMPL    = 0.05  :float\n\
PARCELS_SUCCESS_B2C = 0.75  :float\n\
PARCELS_SUCCESS_B2B = 0.90  :float\n\
SEED                = 42    :int\n\
SUPRA_ZONES         = 0     :int\n\
SUPRA_ZONE_OFFSET   = 0     :int\n\
";

// ── Derived inputs ────────────────────────────────────────────────────────────

/// Symmetric centroid-distance time skim in seconds, zero diagonal.  The
/// pipeline's repair pass fills the intrazonal cells.
fn build_skim(zones: &ZoneTable) -> Result<SkimMatrix> {
    let coords: Vec<(f64, f64)> = zones.iter().map(|z| (z.x, z.y)).collect();
    let n = coords.len();

    let mut data = vec![0.0; n * n];
    for (i, &(xi, yi)) in coords.iter().enumerate() {
        for (j, &(xj, yj)) in coords.iter().enumerate() {
            let dist = ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt();
            data[i * n + j] = dist / SPEED_M_PER_S;
        }
    }
    Ok(SkimMatrix::from_flat(data)?)
}

/// UCC final-leg vehicle mix: 40 % LEVV, 10 % moped, 50 % van, all electric
/// columns.  Real runs load the full vehicle×fuel grid from CSV instead.
fn vehicle_shares() -> Result<VehicleShares> {
    let cols = UccVehicle::COUNT * FUELS_PER_VEHICLE + 1;
    let mut rows = Vec::with_capacity(SEGMENT_COUNT + 1);
    for _ in 0..SEGMENT_COUNT {
        let mut row = vec![0.0; cols];
        row[0] = 0.40;
        row[FUELS_PER_VEHICLE] = 0.10;
        row[2 * FUELS_PER_VEHICLE] = 0.50;
        rows.push(row);
    }
    rows.push(vec![0.0; cols]); // dangerous-goods row, dropped on load
    Ok(VehicleShares::from_raw(&rows)?)
}

// ── Scenario runs ─────────────────────────────────────────────────────────────

fn run_scenario(params: &str) -> Result<RunOutput> {
    let config = parse_params_reader(Cursor::new(params))?;
    let label = config.label;

    let zones = load_zones_reader(Cursor::new(ZONES_CSV))?;
    let skim = build_skim(&zones)?;
    let (registry, shares) = load_shares_reader(Cursor::new(SHARES_CSV))?;
    let depots = load_depots_reader(Cursor::new(DEPOTS_CSV))?;

    let mut builder = PipelineBuilder::new(config)
        .zones(zones)
        .skim(skim)
        .couriers(registry, shares)
        .depots(depots);
    if label == ScenarioLabel::Ucc {
        let consolidation = load_consolidation_reader(Cursor::new(CONSOLIDATION_CSV))?;
        builder = builder.ucc_policy(consolidation, vehicle_shares()?);
    }

    Ok(builder.build()?.run()?)
}

fn write_outputs(label: ScenarioLabel, output: &RunOutput) -> Result<()> {
    let dir = Path::new(OUTPUT_DIR);
    let (registry, _) = load_shares_reader(Cursor::new(SHARES_CSV))?;

    let mut writer = ParcelWriter::create(&dir.join(format!("ParcelDemand_{label}.csv")), label)?;
    writer.write_parcels(&output.parcels, &registry)?;
    writer.finish()?;

    // The UCC run also emits its pre-rerouting parcel set for comparison.
    if let Some(reference) = &output.reference {
        let mut writer = ParcelWriter::create(
            &dir.join("ParcelDemand_UCC_before.csv"),
            ScenarioLabel::Reference,
        )?;
        writer.write_parcels(reference, &registry)?;
        writer.finish()?;
    }

    write_kpi(&dir.join(format!("kpi_{label}.json")), &output.kpi)?;
    Ok(())
}

fn print_summary(label: ScenarioLabel, output: &RunOutput) {
    println!("{label}: {} parcels, {} redirected", output.parcels.len(), output.redirected);
    if let Some(KpiValue::Map(per_courier)) = output.kpi.get("parcels_per_courier") {
        for (code, count) in per_courier {
            let KpiValue::Int(count) = count else { continue };
            println!("  {code:<6} {count:>6}");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== tinytown — parcel demand generator ===");
    println!("6 zones | 3 couriers | 4 depots | ZEZ center with UCC");
    println!("(Swap the embedded CSVs for real zone/depot/skim files to scale up)");
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let t0 = Instant::now();

    let ref_output = run_scenario(PARAMS_REF)?;
    write_outputs(ScenarioLabel::Reference, &ref_output)?;
    print_summary(ScenarioLabel::Reference, &ref_output);
    println!();

    let ucc_output = run_scenario(PARAMS_UCC)?;
    write_outputs(ScenarioLabel::Ucc, &ucc_output)?;
    print_summary(ScenarioLabel::Ucc, &ucc_output);
    println!();

    println!("Both scenarios done in {:.3} s", t0.elapsed().as_secs_f64());
    println!("Output written to {OUTPUT_DIR}/");
    Ok(())
}
