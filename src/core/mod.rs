//! This module contains the core datatypes and the sampling algorithm.

mod interval;
pub mod record;
pub mod sampler;
pub mod selection;

pub use interval::{IntervalKey, Intervals, interval_key};
pub use record::{DateColumn, Record};
pub use sampler::{IntervalSampler, select};
pub use selection::{LABEL, Selection};
