use chrono::NaiveDate;
use std::fs;
use std::io;

use crate::core::{DateColumn, Record};
use crate::errors::{Result, SamplerError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait MetadataIO: Sized {
    fn read(path: &str, column: &str, delimiter: u8) -> Result<Self>;
    fn from_reader<R: io::Read>(reader: R, column: &str, delimiter: u8) -> Result<Self>;
}

impl MetadataIO for DateColumn {
    /// Reads a delimited metadata table with sample ids in the first column.
    fn read(path: &str, column: &str, delimiter: u8) -> Result<DateColumn> {
        let file = fs::File::open(path)
            .map_err(|err| SamplerError::ReadError(format!("Failed to open {path}: {err}")))?;
        Self::from_reader(io::BufReader::new(file), column, delimiter)
    }

    /// Reads the date column `column` from a delimited metadata table.
    ///
    /// Empty or unparseable dates are kept as records without a date. Rows whose
    /// id starts with `#` are directives or comments and are skipped.
    fn from_reader<R: io::Read>(reader: R, column: &str, delimiter: u8) -> Result<DateColumn> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|err| SamplerError::ReadError(format!("Failed to read header: {err}")))?;
        let column_index = headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| {
                SamplerError::ReadError(format!("Column `{column}` not found in metadata"))
            })?;
        if column_index == 0 {
            return Err(SamplerError::ReadError(format!(
                "Column `{column}` is the id column"
            )));
        }

        let mut records = Vec::new();
        for (line, row) in reader.records().enumerate() {
            let row = row.map_err(|err| {
                SamplerError::ReadError(format!("Failed to parse record {}: {err}", line + 1))
            })?;
            let id = row.get(0).unwrap_or_default();
            if id.starts_with('#') {
                log::debug!("Skipping directive row `{id}`");
                continue;
            }
            let value = row.get(column_index).unwrap_or_default();
            let date = parse_date(value);
            if date.is_none() && !value.trim().is_empty() {
                log::warn!("Unable to parse date `{value}` of sample `{id}`, treating as missing");
            }
            records.push(Record::new(id, date));
        }

        DateColumn::new(column, records)
    }
}

/// Parse a `YYYY-MM-DD` date. Returns `None` for empty or malformed values.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const METADATA: &str = "id\tcountry\tdate\n\
                            #q2:types\tcategorical\tcategorical\n\
                            A\tCH\t2019-12-31\n\
                            B\tCH\t2020-01-09\n\
                            C\tDE\t\n\
                            D\tDE\tunknown\n\
                            E\tFR\t2020-02-30\n";

    #[test]
    fn parse_dates() {
        assert_eq!(parse_date("2020-02-21"), NaiveDate::from_ymd_opt(2020, 2, 21));
        assert_eq!(parse_date(" 2020-02-21 "), NaiveDate::from_ymd_opt(2020, 2, 21));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2020-13-01"), None);
        assert_eq!(parse_date("21.02.2020"), None);
    }

    #[test]
    fn read_tsv() {
        let column = DateColumn::from_reader(METADATA.as_bytes(), "date", b'\t').unwrap();
        assert_eq!(column.name(), "date");
        assert_eq!(
            column.records(),
            &[
                Record::new("A", NaiveDate::from_ymd_opt(2019, 12, 31)),
                Record::new("B", NaiveDate::from_ymd_opt(2020, 1, 9)),
                Record::new("C", None),
                Record::new("D", None),
                Record::new("E", None),
            ]
        );
    }

    #[test]
    fn read_hash_prefixed_header() {
        let content = "#SampleID\tdate\n\
                       #q2:types\tcategorical\n\
                       A\t2020-01-01\n\
                       B\t2020-01-02\n";
        let column = DateColumn::from_reader(content.as_bytes(), "date", b'\t').unwrap();
        assert_eq!(column.ids().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(column.n_absent(), 0);
    }

    #[test]
    fn missing_column() {
        let result = DateColumn::from_reader(METADATA.as_bytes(), "collection_date", b'\t');
        assert!(matches!(result, Err(SamplerError::ReadError(_))));
        let result = DateColumn::from_reader(METADATA.as_bytes(), "id", b'\t');
        assert!(matches!(result, Err(SamplerError::ReadError(_))));
    }

    #[test]
    fn duplicate_ids() {
        let content = "id,date\nA,2020-01-01\nA,2020-01-02\n";
        let result = DateColumn::from_reader(content.as_bytes(), "date", b',');
        assert!(matches!(result, Err(SamplerError::InvalidParameter(_))));
    }

    #[test]
    #[serial]
    fn read_file() {
        let tmp_path = std::env::temp_dir().join("test_metadata.tsv");
        let path = tmp_path.to_str().unwrap();
        std::fs::write(path, METADATA).unwrap();
        let column = DateColumn::read(path, "date", b'\t').unwrap();
        assert_eq!(column.len(), 5);
        assert_eq!(column.n_absent(), 3);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn read_missing_file() {
        let result = DateColumn::read("/nonexistent/metadata.tsv", "date", b'\t');
        assert!(matches!(result, Err(SamplerError::ReadError(_))));
    }
}
