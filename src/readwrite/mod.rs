//! IO traits for reading metadata and writing selections.

mod metadata;
mod selection;

pub use metadata::{DATE_FORMAT, MetadataIO, parse_date};
pub use selection::SelectionIO;
