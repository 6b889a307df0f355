use chrono::NaiveDate;
use std::collections::HashMap;

use super::record::DateColumn;

/// Label attached to every selection produced by longitudinal subsampling.
pub const LABEL: &str = "subsample_longitudinal";

/// Per-record inclusion decision, aligned with the date column it was drawn
/// from.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<'a> {
    inclusion: Vec<bool>,
    metadata: &'a DateColumn,
    anchor: NaiveDate,
    days_per_interval: i64,
    label: &'static str,
}

impl<'a> Selection<'a> {
    pub(crate) fn new(
        inclusion: Vec<bool>,
        metadata: &'a DateColumn,
        anchor: NaiveDate,
        days_per_interval: i64,
    ) -> Self {
        debug_assert_eq!(inclusion.len(), metadata.len());
        Self {
            inclusion,
            metadata,
            anchor,
            days_per_interval,
            label: LABEL,
        }
    }

    /// Inclusion flags in the order of the originating column.
    pub fn inclusion(&self) -> &[bool] {
        &self.inclusion
    }

    /// The date column the selection was drawn from.
    pub fn metadata(&self) -> &'a DateColumn {
        self.metadata
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Anchor date the interval boundaries were computed from.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn days_per_interval(&self) -> i64 {
        self.days_per_interval
    }

    /// Pairs of record id and inclusion flag, in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, bool)> + '_ {
        self.metadata
            .ids()
            .zip(self.inclusion.iter().copied())
    }

    /// Inclusion flag of a single record. Scans the column; use
    /// [`Selection::inclusion_by_id`] for repeated lookups.
    pub fn is_included(&self, id: &str) -> Option<bool> {
        self.iter()
            .find(|(record_id, _)| *record_id == id)
            .map(|(_, included)| included)
    }

    pub fn inclusion_by_id(&self) -> HashMap<&'a str, bool> {
        self.iter().collect()
    }

    pub fn included_ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.iter()
            .filter(|(_, included)| *included)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;

    #[test]
    fn keyed_by_record_id() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let column = DateColumn::new(
            "date",
            vec![
                Record::new("b", Some(date)),
                Record::new("a", None),
                Record::new("c", Some(date)),
            ],
        )
        .unwrap();
        let selection = Selection::new(vec![true, false, true], &column, date, 7);

        assert_eq!(selection.label(), "subsample_longitudinal");
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec![("b", true), ("a", false), ("c", true)]
        );
        assert_eq!(selection.is_included("a"), Some(false));
        assert_eq!(selection.is_included("z"), None);
        assert_eq!(selection.included_ids().collect::<Vec<_>>(), vec!["b", "c"]);

        let by_id = selection.inclusion_by_id();
        assert_eq!(by_id.len(), 3);
        assert!(!by_id["a"]);
        assert!(by_id["b"]);
        assert_eq!(by_id.get("z"), None);
        assert_eq!(selection.metadata(), &column);
    }
}
