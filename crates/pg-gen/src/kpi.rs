//! Run-level KPI accumulator.
//!
//! An explicit value returned beside the parcel set — not a module-global —
//! so runs compose and tests can assert on it.  Values are JSON-serializable
//! scalars or nested maps; no contractual shape beyond that.

use std::collections::BTreeMap;

use serde::Serialize;

// ── KpiValue ──────────────────────────────────────────────────────────────────

/// A scalar or nested KPI value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KpiValue {
    Int(i64),
    Float(f64),
    Text(String),
    Map(BTreeMap<String, KpiValue>),
}

// ── Kpi ───────────────────────────────────────────────────────────────────────

/// Ordered key → value KPI map.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Kpi(BTreeMap<String, KpiValue>);

impl Kpi {
    pub fn new() -> Kpi {
        Kpi::default()
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.0.insert(key.to_owned(), KpiValue::Int(value));
    }

    pub fn set_float(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_owned(), KpiValue::Float(value));
    }

    pub fn set_text(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_owned(), KpiValue::Text(value.to_owned()));
    }

    pub fn set_map(&mut self, key: &str, value: BTreeMap<String, KpiValue>) {
        self.0.insert(key.to_owned(), KpiValue::Map(value));
    }

    pub fn get(&self, key: &str) -> Option<&KpiValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
