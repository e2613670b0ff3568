//! Base error type.
//!
//! Sub-crates define their own error enums (`ZoneError`, `SkimError`, …) and
//! the pipeline crate wraps them via `From` impls.  `CoreError` only covers
//! the failures this crate can detect itself: invalid scenario configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
