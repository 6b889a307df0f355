use chrono::NaiveDate;
use std::fmt;

use crate::core::{IntervalKey, Intervals, Selection};

/// Number of eligible and selected records in one non-empty interval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalCount {
    pub key: IntervalKey,
    pub start: NaiveDate,
    pub eligible: usize,
    pub included: usize,
}

impl fmt::Display for IntervalCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IntervalCount(key={},start={},eligible={},included={})",
            self.key, self.start, self.eligible, self.included
        )
    }
}

/// Trait extension to summarize the outcome of a selection
pub trait SelectionSummary {
    fn n_included(&self) -> usize;
    fn n_excluded(&self) -> usize;
    fn interval_counts(&self) -> Vec<IntervalCount>;
}

impl SelectionSummary for Selection<'_> {
    fn n_included(&self) -> usize {
        self.inclusion().iter().filter(|&&included| included).count()
    }

    fn n_excluded(&self) -> usize {
        self.inclusion().len() - self.n_included()
    }

    /// Count eligible and included records per interval, in ascending order.
    fn interval_counts(&self) -> Vec<IntervalCount> {
        let intervals = Intervals::partition(
            self.metadata().records(),
            self.anchor(),
            self.days_per_interval(),
        );
        let inclusion = self.inclusion();
        intervals
            .iter()
            .map(|(key, members)| IntervalCount {
                key,
                start: intervals.start(key),
                eligible: members.len(),
                included: members.iter().filter(|&&member| inclusion[member]).count(),
            })
            .collect()
    }
}
