use crate::schema::{EntryKind, SchemaConfig};
use crate::spec::{Entry, ModelHeaderSpec};

/// Fixed prefix of an action entry: threshold (4), length byte (1) and the
/// null terminator (1) around the label text.
const ACTION_FIXED_SIZE: usize = 4 + 1 + 1;

/// Byte sizes derived from one record and schema pair.
///
/// A pure function of its inputs, recomputed on every assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Sum of the schema's scalar field widths.
    pub fixed_size: usize,
    /// All entries including per-entry padding, minus the final entry's pad.
    pub entries_size: usize,
    pub header_size: usize,
    /// `header_size` rounded up to the next multiple of 4.
    pub model_offset: usize,
}

/// Bytes needed to reach the next 4-byte boundary, 0 when already aligned.
pub(crate) fn pad4(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Size of one entry on disk, not counting its trailing alignment padding.
pub(crate) fn entry_size(entry: &Entry) -> usize {
    match entry {
        Entry::Label { text } => text.len() + 1,
        Entry::Action { text, .. } => ACTION_FIXED_SIZE + text.len(),
    }
}

/// Computes every derived size for `spec` laid out per `schema`.
///
/// Total function over pre-validated records, nothing is checked here.
/// Action structs are 4-byte aligned, but the final one stays unpadded
/// within `header_size`: the loader reads the entries through a flexible
/// array member, and the header as a whole is re-aligned by `model_offset`.
pub fn compute_layout(schema: &SchemaConfig, spec: &ModelHeaderSpec) -> HeaderLayout {
    let fixed_size = schema.fixed_size();

    let mut entries_size = 0;
    let mut last_padding = 0;
    for entry in &spec.entries {
        let size = entry_size(entry);
        last_padding = match schema.entry_kind {
            EntryKind::Label => 0,
            EntryKind::Action => pad4(size),
        };
        entries_size += size + last_padding;
    }
    // Drop the trailing pad. A no-op for label entries and for empty records.
    entries_size -= last_padding;

    let header_size = fixed_size + entries_size;
    let model_offset = header_size + pad4(header_size);

    HeaderLayout {
        fixed_size,
        entries_size,
        header_size,
        model_offset,
    }
}
