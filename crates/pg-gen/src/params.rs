//! Params-file parser.
//!
//! # File format
//!
//! One `KEY = value :type` entry per line, with optional `# comment` after
//! the type tag; blank lines and lines without `=` are skipped:
//!
//! ```text
//! LABEL               = REF    :string
//! PARCELS_PER_HH      = 0.195  :float
//! PARCELS_PER_EMPL    = 0.073  :float
//! PARCELS_SUCCESS_B2C = 0.75   :float
//! PARCELS_SUCCESS_B2B = 0.88   :float
//! SEED                = 1      :int   # reproducibility
//! ```
//!
//! Every entry maps onto a fixed, typed [`ScenarioConfig`] field.  Unknown
//! keys, wrong type tags, and malformed values are configuration errors —
//! in particular the legacy `eval`/`variable` tags, which amounted to
//! executing the params file, are rejected outright.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use pg_core::{ScenarioConfig, ScenarioLabel};

use crate::{GenError, GenResult};

/// Keys accepted in a params file, with their required type tags.
const KNOWN_KEYS: &[(&str, &str)] = &[
    ("LABEL", "string"),
    ("PARCELS_PER_HH", "float"),
    ("PARCELS_PER_EMPL", "float"),
    ("PARCELS_SUCCESS_B2C", "float"),
    ("PARCELS_SUCCESS_B2B", "float"),
    ("SEED", "int"),
    ("SUPRA_ZONES", "int"),
    ("SUPRA_ZONE_OFFSET", "int"),
];

/// Parse a params file into a validated [`ScenarioConfig`].
pub fn parse_params_file(path: &Path) -> GenResult<ScenarioConfig> {
    let file = std::fs::File::open(path).map_err(GenError::Io)?;
    parse_params_reader(file)
}

/// Like [`parse_params_file`] for any `Read` source.
pub fn parse_params_reader<R: Read>(reader: R) -> GenResult<ScenarioConfig> {
    let mut label = None;
    let mut parcels_per_hh = None;
    let mut parcels_per_empl = None;
    let mut success_rate_b2c = None;
    let mut success_rate_b2b = None;
    let mut seed = None;
    let mut supra_zone_count = ScenarioConfig::DEFAULT_SUPRA_COUNT;
    let mut supra_zone_offset = ScenarioConfig::DEFAULT_SUPRA_OFFSET;

    for (line_no, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(GenError::Io)?;
        let Some((key, value, dtype)) = split_entry(&line) else {
            continue;
        };

        let expected = KNOWN_KEYS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, t)| *t)
            .ok_or_else(|| {
                GenError::Configuration(format!("unknown params key {key:?} on line {}", line_no + 1))
            })?;
        if dtype != expected {
            return Err(GenError::Configuration(format!(
                "params key {key} must be tagged :{expected}, got :{dtype}"
            )));
        }

        match key {
            "LABEL" => label = Some(ScenarioLabel::parse(value)?),
            "PARCELS_PER_HH" => parcels_per_hh = Some(parse_float(key, value)?),
            "PARCELS_PER_EMPL" => parcels_per_empl = Some(parse_float(key, value)?),
            "PARCELS_SUCCESS_B2C" => success_rate_b2c = Some(parse_float(key, value)?),
            "PARCELS_SUCCESS_B2B" => success_rate_b2b = Some(parse_float(key, value)?),
            "SEED" => seed = Some(parse_int(key, value)?),
            "SUPRA_ZONES" => supra_zone_count = parse_int(key, value)? as u32,
            "SUPRA_ZONE_OFFSET" => supra_zone_offset = parse_int(key, value)? as u32,
            _ => unreachable!("key validated against KNOWN_KEYS"),
        }
    }

    let config = ScenarioConfig {
        label: required("LABEL", label)?,
        parcels_per_hh: required("PARCELS_PER_HH", parcels_per_hh)?,
        parcels_per_empl: required("PARCELS_PER_EMPL", parcels_per_empl)?,
        success_rate_b2c: required("PARCELS_SUCCESS_B2C", success_rate_b2c)?,
        success_rate_b2b: required("PARCELS_SUCCESS_B2B", success_rate_b2b)?,
        seed: required("SEED", seed)?,
        supra_zone_count,
        supra_zone_offset,
    };
    config.validate()?;
    Ok(config)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Split a `KEY = value :type # comment` line; `None` for non-entry lines.
fn split_entry(line: &str) -> Option<(&str, &str, &str)> {
    let (key, rest) = line.split_once('=')?;
    let (value, rest) = rest.split_once(':')?;
    let dtype = rest.split('#').next().unwrap_or(rest);
    Some((key.trim(), value.trim(), dtype.trim()))
}

fn parse_float(key: &str, value: &str) -> GenResult<f64> {
    value.parse::<f64>().map_err(|_| {
        GenError::Configuration(format!("params key {key}: {value:?} is not a float"))
    })
}

fn parse_int(key: &str, value: &str) -> GenResult<u64> {
    value.parse::<u64>().map_err(|_| {
        GenError::Configuration(format!("params key {key}: {value:?} is not an integer"))
    })
}

fn required<T>(key: &str, value: Option<T>) -> GenResult<T> {
    value.ok_or_else(|| GenError::Configuration(format!("required params key {key} is missing")))
}
