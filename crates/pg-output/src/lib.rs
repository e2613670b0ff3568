//! `pg-output` — run output writers for the parcel demand generator.
//!
//! | Module   | Contents                                             |
//! |----------|------------------------------------------------------|
//! | [`csv`]  | `ParcelWriter` — scenario-aware parcel CSV           |
//! | [`json`] | KPI JSON writer                                      |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pg_output::ParcelWriter;
//!
//! let mut writer = ParcelWriter::create(&dir.join("ParcelDemand_UCC.csv"), label)?;
//! writer.write_parcels(&output.parcels, &registry)?;
//! writer.finish()?;
//! pg_output::write_kpi(&dir.join("kpi.json"), &output.kpi)?;
//! ```

pub mod csv;
pub mod error;
pub mod json;


pub use csv::ParcelWriter;
pub use error::{OutputError, OutputResult};
pub use json::{kpi_to_string, write_kpi};
