use std::fmt;

/// All errors that can occur while building a header blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// A packer write was requested with a width other than 1, 2 or 4.
    InvalidWidth(usize),
    /// The record has no entries, the loader cannot interpret such a header.
    EmptySpec,
    /// A value does not fit the header field that stores it.
    SpecTooLarge(String),
    /// A label is empty or contains non-ASCII bytes.
    InvalidLabel { index: usize },
    /// An entry's kind does not match the schema's entry kind.
    EntryKindMismatch { index: usize },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth(width) => {
                write!(f, "invalid field width {width}, must be 1, 2 or 4")
            }
            Self::EmptySpec => write!(f, "header spec has no entries"),
            Self::SpecTooLarge(msg) => write!(f, "spec too large: {msg}"),
            Self::InvalidLabel { index } => {
                write!(f, "label {index} must be non-empty ASCII")
            }
            Self::EntryKindMismatch { index } => {
                write!(f, "entry {index} does not match the schema's entry kind")
            }
        }
    }
}

impl std::error::Error for HeaderError {}
