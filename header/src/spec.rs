use serde::{Deserialize, Serialize};

use crate::error::HeaderError;
use crate::schema::{EntryKind, SchemaConfig};

/// Largest entry count that fits the one-byte count field.
pub const MAX_ENTRIES: usize = 255;

/// Longest label that still fits the one-byte length field, which stores
/// `len + 1` to cover the null terminator.
pub const MAX_LABEL_LEN: usize = 254;

/// One output class descriptor. The entry index is the model's output class
/// index, so order is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    Label { text: String },
    Action { threshold: f32, text: String },
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Label { .. } => EntryKind::Label,
            Self::Action { .. } => EntryKind::Action,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Label { text } | Self::Action { text, .. } => text,
        }
    }
}

/// The input record describing a model's input window and output classes.
///
/// Thresholds are packed as given; keeping them finite and inside
/// `[0.0, 1.0]` is the caller's responsibility, the firmware tolerates
/// out-of-range values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelHeaderSpec {
    /// Sampling interval. `None` packs as 0 when the schema carries the field.
    #[serde(default)]
    pub samples_period: Option<u16>,
    pub samples_length: u16,
    pub sample_dimensions: u8,
    pub entries: Vec<Entry>,
}

impl ModelHeaderSpec {
    /// Checks the limits the one-byte count and length fields impose, plus
    /// that every entry matches the schema's entry kind.
    ///
    /// The firmware trusts these fields unconditionally, so an over-limit
    /// record must fail here instead of silently wrapping in the packer.
    pub fn validate(&self, schema: &SchemaConfig) -> Result<(), HeaderError> {
        if self.entries.is_empty() {
            return Err(HeaderError::EmptySpec);
        }
        if self.entries.len() > MAX_ENTRIES {
            return Err(HeaderError::SpecTooLarge(format!(
                "{} entries, the count field holds at most {MAX_ENTRIES}",
                self.entries.len(),
            )));
        }

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.kind() != schema.entry_kind {
                return Err(HeaderError::EntryKindMismatch { index });
            }

            let text = entry.text();
            if text.is_empty() || !text.is_ascii() {
                return Err(HeaderError::InvalidLabel { index });
            }
            if text.len() > MAX_LABEL_LEN {
                return Err(HeaderError::SpecTooLarge(format!(
                    "label {index} is {} bytes, the length field holds at most {MAX_LABEL_LEN}",
                    text.len(),
                )));
            }
        }

        Ok(())
    }
}
