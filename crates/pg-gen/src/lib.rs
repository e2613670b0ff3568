//! `pg-gen` — the generator pipeline.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`assign`]   | nearest-depot selection per (zone, courier)           |
//! | [`synth`]    | expansion of courier splits into `Parcel` records     |
//! | [`ucc`]      | UCC rerouting pass and vehicle resampling             |
//! | [`kpi`]      | run-level KPI accumulator                             |
//! | [`params`]   | params-file parser → `ScenarioConfig`                 |
//! | [`pipeline`] | `PipelineBuilder` / `Pipeline::run`                   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Rayon-parallel UCC decision pass (identical output).    |

pub mod assign;
pub mod kpi;
pub mod params;
pub mod pipeline;
pub mod synth;
pub mod ucc;

mod error;


pub use assign::{assign_depots, Assignment};
pub use error::{GenError, GenResult};
pub use kpi::{Kpi, KpiValue};
pub use params::{parse_params_file, parse_params_reader};
pub use pipeline::{Pipeline, PipelineBuilder, RunOutput};
pub use synth::{synthesize, Parcel};
pub use ucc::reroute_via_ucc;
