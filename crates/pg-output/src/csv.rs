//! Parcel CSV backend.
//!
//! Column layout is scenario-dependent: the two consolidation flag columns
//! exist only under the UCC scenario, so downstream REF consumers keep
//! seeing the historical six-column file.
//!
//! ```text
//! Parcel_ID,O_zone,D_zone,DepotNumber,CEP,VEHTYPE[,FROM_UCC,TO_UCC]
//! ```

use std::fs::File;
use std::path::Path;

use csv::Writer;
use pg_carrier::CourierRegistry;
use pg_core::ScenarioLabel;
use pg_gen::Parcel;

use crate::OutputResult;

const BASE_HEADER: [&str; 6] =
    ["Parcel_ID", "O_zone", "D_zone", "DepotNumber", "CEP", "VEHTYPE"];
const UCC_HEADER: [&str; 2] = ["FROM_UCC", "TO_UCC"];

/// Writes the parcel table of one run to a CSV file.
pub struct ParcelWriter {
    writer:    Writer<File>,
    ucc_flags: bool,
    finished:  bool,
}

impl ParcelWriter {
    /// Create `path` and write the header row for `label`'s column layout.
    pub fn create(path: &Path, label: ScenarioLabel) -> OutputResult<ParcelWriter> {
        let ucc_flags = label == ScenarioLabel::Ucc;
        let mut writer = Writer::from_path(path)?;

        let mut header: Vec<&str> = BASE_HEADER.to_vec();
        if ucc_flags {
            header.extend(UCC_HEADER);
        }
        writer.write_record(&header)?;

        Ok(ParcelWriter { writer, ucc_flags, finished: false })
    }

    /// Append parcel rows in slice order; courier IDs are written as their
    /// registry codes.
    pub fn write_parcels(
        &mut self,
        parcels:  &[Parcel],
        registry: &CourierRegistry,
    ) -> OutputResult<()> {
        for parcel in parcels {
            let mut record = vec![
                parcel.id.to_string(),
                parcel.origin.to_string(),
                parcel.destination.to_string(),
                parcel.depot.to_string(),
                registry.code(parcel.courier).to_owned(),
                parcel.vehicle.to_string(),
            ];
            if self.ucc_flags {
                record.push((parcel.from_ucc as u8).to_string());
                record.push((parcel.to_ucc as u8).to_string());
            }
            self.writer.write_record(&record)?;
        }
        Ok(())
    }

    /// Flush the file.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
