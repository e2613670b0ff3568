//! KPI JSON backend.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use pg_gen::Kpi;

use crate::OutputResult;

/// Write the run KPIs as pretty-printed JSON, with a trailing newline.
pub fn write_kpi(path: &Path, kpi: &Kpi) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, kpi)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// The KPI JSON as a string, for logging and tests.
pub fn kpi_to_string(kpi: &Kpi) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(kpi)?)
}
