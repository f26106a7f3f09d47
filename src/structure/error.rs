use nom::error::{Error, ErrorKind};
use thiserror::Error;

/// A structure string that can't be turned into a matcher. These come from registry data,
/// never from the IBAN being validated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("structure length {length} is not a multiple of 3")]
    InvalidLength { length: usize },

    #[error("unknown character class '{letter}'")]
    UnknownClass { letter: char },

    #[error("repeat count '{count}' is not a 2-digit decimal number")]
    InvalidCount { count: String },

    #[error("repeat count must be positive")]
    ZeroCount,

    #[error("the structure could not be compiled: {0}")]
    InvalidPattern(String),
}

impl<'a> nom::error::ParseError<&'a str> for StructureError {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        StructureError::from(Error::new(input, kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> From<Error<&'a str>> for StructureError {
    fn from(value: Error<&'a str>) -> Self {
        // nom only gives up on its own when a trailing triplet is cut short
        StructureError::InvalidLength {
            length: value.input.chars().count(),
        }
    }
}
