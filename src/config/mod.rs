//! Configuration data structures for sampling runs.

mod parameters;

pub use parameters::{DEFAULT_DAYS_PER_INTERVAL, Parameters, ParametersError};
