//! Drives the packer over one record to produce the finished header bytes.

use crate::error::HeaderError;
use crate::layout::{compute_layout, entry_size, pad4};
use crate::pack;
use crate::schema::{HeaderField, SchemaConfig};
use crate::spec::{Entry, ModelHeaderSpec};

/// ASCII "MODL". The loader reads this first as a format sanity check.
pub const HEADER_MAGIC: u32 = 0x4D4F444C;

/// Packs `spec` into a fresh header buffer laid out per `schema`.
///
/// The buffer is `model_offset` bytes long and the model weight blob is
/// appended right after it, so everything past `header_size` must stay
/// zero. Field order is part of the on-wire contract: the scalar fields in
/// schema order, then the entries in record order.
pub fn assemble(schema: &SchemaConfig, spec: &ModelHeaderSpec) -> Result<Vec<u8>, HeaderError> {
    spec.validate(schema)?;

    let layout = compute_layout(schema, spec);
    if layout.model_offset > u16::MAX as usize {
        return Err(HeaderError::SpecTooLarge(format!(
            "header spans {} bytes, the size fields hold at most {}",
            layout.model_offset,
            u16::MAX,
        )));
    }

    let mut buf = vec![0; layout.model_offset];
    let mut offset = 0;

    for &(field, width) in schema.fields {
        let value = match field {
            HeaderField::Magic => HEADER_MAGIC,
            HeaderField::HeaderSize => layout.header_size as u32,
            HeaderField::ModelOffset => layout.model_offset as u32,
            HeaderField::SamplesPeriod => u32::from(spec.samples_period.unwrap_or(0)),
            HeaderField::SamplesLength => u32::from(spec.samples_length),
            HeaderField::SampleDimensions => u32::from(spec.sample_dimensions),
            HeaderField::EntryCount => spec.entries.len() as u32,
            HeaderField::Reserved => {
                // Written out as an explicit run of zero bytes, never skipped.
                for _ in 0..width {
                    offset = pack::write_uint(&mut buf, offset, 0, 1)?;
                }
                continue;
            }
        };
        offset = pack::write_uint(&mut buf, offset, value, width)?;
    }

    let last = spec.entries.len() - 1;
    for (index, entry) in spec.entries.iter().enumerate() {
        match entry {
            Entry::Label { text } => {
                offset = pack::write_bytes(&mut buf, offset, text.as_bytes());
                offset = pack::write_uint(&mut buf, offset, 0, 1)?;
            }
            Entry::Action { threshold, text } => {
                offset = pack::write_f32(&mut buf, offset, *threshold);
                offset = pack::write_uint(&mut buf, offset, text.len() as u32 + 1, 1)?;
                offset = pack::write_bytes(&mut buf, offset, text.as_bytes());
                offset = pack::write_uint(&mut buf, offset, 0, 1)?;
                // The zeroed buffer already holds the pad bytes, only the
                // cursor moves. The final entry stays unpadded, matching
                // `header_size`.
                if index < last {
                    offset += pad4(entry_size(entry));
                }
            }
        }
    }

    debug_assert_eq!(offset, layout.header_size);
    Ok(buf)
}
