//! Statistics and summary trait implementations

pub mod selection;

pub use selection::IntervalCount;
pub use selection::SelectionSummary;
