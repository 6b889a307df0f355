use serde::Serialize;
use std::fs;
use std::io::Write;

use super::metadata::DATE_FORMAT;
use crate::core::Selection;
use crate::errors::{Result, SamplerError};

pub trait SelectionIO {
    fn write(&self, path: &str) -> Result<()>;
    fn write_to(&self, writer: &mut impl Write) -> Result<()>;
}

#[derive(Serialize)]
struct SelectionEntry<'a> {
    id: &'a str,
    date: String,
    included: bool,
    label: &'a str,
}

impl SelectionIO for Selection<'_> {
    fn write(&self, path: &str) -> Result<()> {
        let file = fs::File::create(path)
            .map_err(|err| SamplerError::WriteError(format!("Failed to create {path}: {err}")))?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(&mut writer)
    }

    /// Writes one row per record in column order, with the date column
    /// echoed under its original name.
    fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        let to_write_error = |err: csv::Error| SamplerError::WriteError(err.to_string());
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer
            .write_record(["id", self.metadata().name(), "included", "label"])
            .map_err(to_write_error)?;
        for (record, &included) in self.metadata().iter().zip(self.inclusion()) {
            csv_writer
                .serialize(SelectionEntry {
                    id: &record.id,
                    date: record
                        .date
                        .map(|date| date.format(DATE_FORMAT).to_string())
                        .unwrap_or_default(),
                    included,
                    label: self.label(),
                })
                .map_err(to_write_error)?;
        }
        csv_writer
            .flush()
            .map_err(|err| SamplerError::WriteError(err.to_string()))?;
        Ok(())
    }
}
