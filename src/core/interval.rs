//! Implicit partition of dated records into fixed-length day windows.
//!
//! An interval is never materialized on its own. Records are grouped by the
//! integer key `floor((date - anchor) / days_per_interval)`, so intervals
//! without eligible records have no representation at all.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

use super::record::Record;

pub type IntervalKey = i64;

/// Key of the interval that contains `date`.
///
/// Returns `None` for dates before the anchor. Intervals are closed on the
/// lower bound and open on the upper bound.
pub fn interval_key(
    anchor: NaiveDate,
    date: NaiveDate,
    days_per_interval: i64,
) -> Option<IntervalKey> {
    let offset = date.signed_duration_since(anchor).num_days();
    if offset < 0 {
        return None;
    }
    Some(offset / days_per_interval)
}

/// Groups of record indices keyed by interval, in ascending key order.
///
/// Keys are kept ordered so that a seeded random stream is consumed in the
/// same order on every run.
#[derive(Clone, Debug, PartialEq)]
pub struct Intervals {
    anchor: NaiveDate,
    days_per_interval: i64,
    groups: BTreeMap<IntervalKey, Vec<usize>>,
}

impl Intervals {
    /// Partition `records` in a single pass. Records without a date or dated
    /// before the anchor are not assigned to any interval.
    pub fn partition(records: &[Record], anchor: NaiveDate, days_per_interval: i64) -> Self {
        let mut groups: BTreeMap<IntervalKey, Vec<usize>> = BTreeMap::new();
        for (index, record) in records.iter().enumerate() {
            let Some(date) = record.date else {
                continue;
            };
            if let Some(key) = interval_key(anchor, date, days_per_interval) {
                groups.entry(key).or_default().push(index);
            }
        }
        Self {
            anchor,
            days_per_interval,
            groups,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn days_per_interval(&self) -> i64 {
        self.days_per_interval
    }

    /// First day of the interval with the given key.
    pub fn start(&self, key: IntervalKey) -> NaiveDate {
        self.anchor + Duration::days(key * self.days_per_interval)
    }

    pub fn get(&self, key: IntervalKey) -> Option<&[usize]> {
        self.groups.get(&key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IntervalKey, &[usize])> {
        self.groups
            .iter()
            .map(|(&key, members)| (key, members.as_slice()))
    }

    /// Number of non-empty intervals.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records assigned to any interval.
    pub fn n_eligible(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
