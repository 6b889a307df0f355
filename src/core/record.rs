//! Dated records and the ordered column that holds them.

use chrono::NaiveDate;
use derive_more::Deref;
use itertools::Itertools;

use crate::errors::{Result, SamplerError};

/// A single sample identifier paired with its collection date.
///
/// The date is `None` when it was missing or could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    pub id: String,
    pub date: Option<NaiveDate>,
}

impl Record {
    pub fn new(id: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            id: id.into(),
            date,
        }
    }

    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}

/// An ordered, named collection of records with unique identifiers.
///
/// The column dereferences to its records, so it can be iterated and indexed
/// like a slice. Order is the order of ingestion and is never changed.
#[derive(Clone, Debug, PartialEq, Eq, Deref)]
pub struct DateColumn {
    name: String,
    #[deref]
    records: Vec<Record>,
}

impl DateColumn {
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Result<Self> {
        if let Some(id) = records.iter().map(|record| record.id.as_str()).duplicates().next() {
            return Err(SamplerError::InvalidParameter(format!(
                "Duplicate record id `{id}`"
            )));
        }
        Ok(Self {
            name: name.into(),
            records,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.id.as_str())
    }

    /// Earliest date in the column, ignoring absent dates.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.iter().filter_map(|record| record.date).min()
    }

    pub fn n_absent(&self) -> usize {
        self.records.iter().filter(|record| !record.is_dated()).count()
    }
}
