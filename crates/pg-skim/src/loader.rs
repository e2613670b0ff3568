//! Binary `.mtx` skim reader.
//!
//! The format is a flat array of little-endian 32-bit signed integers.  The
//! first word holds the zone count and is discarded; the remaining words are
//! the row-major cost cells.

use std::io::Read;
use std::path::Path;

use crate::{SkimError, SkimResult};

/// Read a `.mtx` file into a flat cost vector (header word dropped).
pub fn read_mtx(path: &Path) -> SkimResult<Vec<f64>> {
    let bytes = std::fs::read(path).map_err(SkimError::Io)?;
    read_mtx_bytes(&bytes)
}

/// Like [`read_mtx`] for an in-memory buffer.
pub fn read_mtx_bytes(bytes: &[u8]) -> SkimResult<Vec<f64>> {
    if bytes.len() % 4 != 0 {
        return Err(SkimError::Parse(format!(
            "mtx length {} is not a multiple of 4 bytes",
            bytes.len()
        )));
    }
    if bytes.len() < 4 {
        return Err(SkimError::Parse("mtx file has no header word".into()));
    }

    let mut values = Vec::with_capacity(bytes.len() / 4 - 1);
    for chunk in bytes[4..].chunks_exact(4) {
        let word = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        values.push(word as f64);
    }
    Ok(values)
}

/// Convenience wrapper so tests and the demo can consume any `Read` source.
pub fn read_mtx_reader<R: Read>(mut reader: R) -> SkimResult<Vec<f64>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(SkimError::Io)?;
    read_mtx_bytes(&bytes)
}
