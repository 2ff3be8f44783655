//! Header schema revisions.
//!
//! The on-disk format went through several incompatible revisions. Rather
//! than one module per revision, a `SchemaConfig` names the ordered scalar
//! fields with their widths and the entry shape, so the fixed size and every
//! offset fall out of a single iteration over the field list.

/// The scalar fields a header revision can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// Format sanity check read first by the loader.
    Magic,
    /// Size of the fixed part plus all entries, excluding final padding.
    HeaderSize,
    /// 4-byte-aligned offset where the model weight blob starts.
    ModelOffset,
    /// Sampling interval, absent in older revisions.
    SamplesPeriod,
    /// Number of time samples per inference window.
    SamplesLength,
    /// Number of sensor axes per sample.
    SampleDimensions,
    /// Run of zero bytes kept for future fields.
    Reserved,
    /// Number of entries that follow the fixed part.
    EntryCount,
}

/// Which on-disk shape the variable-length entries use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Bare null-terminated strings, packed back to back.
    Label,
    /// Threshold, length byte and string, each struct aligned to 4 bytes.
    Action,
}

/// One header revision: the ordered scalar field list and the entry shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaConfig {
    pub fields: &'static [(HeaderField, usize)],
    pub entry_kind: EntryKind,
}

impl SchemaConfig {
    /// Labels revision: bare strings, four reserved bytes, 16 fixed bytes.
    pub const LABELS: Self = Self {
        fields: &[
            (HeaderField::Magic, 4),
            (HeaderField::HeaderSize, 2),
            (HeaderField::ModelOffset, 2),
            (HeaderField::SamplesLength, 2),
            (HeaderField::SampleDimensions, 1),
            (HeaderField::Reserved, 4),
            (HeaderField::EntryCount, 1),
        ],
        entry_kind: EntryKind::Label,
    };

    /// Actions revision: per-class thresholds, six reserved bytes, 20 fixed
    /// bytes. This is the revision the current firmware reads.
    pub const ACTIONS: Self = Self {
        fields: &[
            (HeaderField::Magic, 4),
            (HeaderField::HeaderSize, 2),
            (HeaderField::ModelOffset, 2),
            (HeaderField::SamplesPeriod, 2),
            (HeaderField::SamplesLength, 2),
            (HeaderField::SampleDimensions, 1),
            (HeaderField::Reserved, 6),
            (HeaderField::EntryCount, 1),
        ],
        entry_kind: EntryKind::Action,
    };

    /// Size of the scalar part of the header.
    pub fn fixed_size(&self) -> usize {
        self.fields.iter().map(|&(_, width)| width).sum()
    }
}
