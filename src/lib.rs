pub mod args;
pub mod config;
pub mod core;
pub mod errors;
pub mod readwrite;
pub mod runner;
pub mod stats;

pub use crate::core::{DateColumn, IntervalSampler, LABEL, Record, Selection, select};
pub use crate::errors::{Result, SamplerError};
