//! All errors that can occur in the genome-sampler library.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum SamplerError {
    InvalidParameter(String),
    EmptyInput(String),
    ReadError(String),
    WriteError(String),
}

pub type Result<T> = std::result::Result<T, SamplerError>;

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SamplerError::InvalidParameter(message) => {
                write!(f, "InvalidParameterError: {}", message)
            }
            SamplerError::EmptyInput(message) => {
                write!(f, "EmptyInputError: {}", message)
            }
            SamplerError::ReadError(message) => {
                write!(f, "ReadError: {}", message)
            }
            SamplerError::WriteError(message) => {
                write!(f, "WriteError: {}", message)
            }
        }
    }
}

impl std::error::Error for SamplerError {}
