//! Scenario configuration.
//!
//! The original parameter file drove the model through an untyped dictionary
//! with string-coded value types.  Here the whole run is configured through
//! one fixed, typed struct, validated once at load; anything outside this set
//! of fields is rejected by the params-file parser in `pg-gen`.

use crate::error::{CoreError, CoreResult};

// ── ScenarioLabel ─────────────────────────────────────────────────────────────

/// Which scenario the run executes.
///
/// `Ucc` enables the consolidation-center rerouting pass and the
/// `FROM_UCC`/`TO_UCC` output columns.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub enum ScenarioLabel {
    Reference,
    Ucc,
}

impl ScenarioLabel {
    /// Parse a scenario label as written in the params file (`REF` / `UCC`).
    pub fn parse(s: &str) -> CoreResult<ScenarioLabel> {
        match s.trim() {
            "REF" => Ok(ScenarioLabel::Reference),
            "UCC" => Ok(ScenarioLabel::Ucc),
            other => Err(CoreError::Configuration(format!(
                "unknown scenario label {other:?}: expected \"REF\" or \"UCC\""
            ))),
        }
    }
}

impl std::fmt::Display for ScenarioLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ScenarioLabel::Reference => "REF",
            ScenarioLabel::Ucc => "UCC",
        })
    }
}

// ── ScenarioConfig ────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Loaded from a params file by `pg_gen::params`, or constructed directly in
/// tests.  Always call [`validate`](Self::validate) before use.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScenarioConfig {
    /// Scenario selector (reference or UCC).
    pub label: ScenarioLabel,

    /// Average parcels generated per household per day (B2C demand).
    pub parcels_per_hh: f64,

    /// Average parcels generated per employed person per day (B2B demand).
    pub parcels_per_empl: f64,

    /// First-attempt delivery success rate for B2C; demand is inflated by
    /// its inverse to account for repeated delivery attempts.
    pub success_rate_b2c: f64,

    /// First-attempt delivery success rate for B2B.
    pub success_rate_b2b: f64,

    /// Master RNG seed.  The same seed always produces identical output.
    pub seed: u64,

    /// Number of supra-zones appended after the detailed zones in the skim.
    /// 43 in the reference dataset.
    pub supra_zone_count: u32,

    /// Base offset for synthesized supra-zone numbers: supra-zone `i`
    /// (0-based) gets external number `supra_zone_offset + i + 1`.
    pub supra_zone_offset: u32,
}

impl ScenarioConfig {
    /// Default supra-zone scheme of the reference dataset.
    pub const DEFAULT_SUPRA_COUNT: u32 = 43;
    pub const DEFAULT_SUPRA_OFFSET: u32 = 99_999_900;

    /// Check field ranges.  Success rates must be in (0, 1] (they are used
    /// as divisors); demand rates must be non-negative.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, rate) in [
            ("PARCELS_SUCCESS_B2C", self.success_rate_b2c),
            ("PARCELS_SUCCESS_B2B", self.success_rate_b2b),
        ] {
            if !(rate > 0.0 && rate <= 1.0) {
                return Err(CoreError::Configuration(format!(
                    "{name} must be in (0, 1], got {rate}"
                )));
            }
        }
        for (name, rate) in [
            ("PARCELS_PER_HH", self.parcels_per_hh),
            ("PARCELS_PER_EMPL", self.parcels_per_empl),
        ] {
            if !(rate >= 0.0) {
                return Err(CoreError::Configuration(format!(
                    "{name} must be non-negative, got {rate}"
                )));
            }
        }
        Ok(())
    }
}
