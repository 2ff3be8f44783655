//! Builds the binary header prepended to an ML4F model blob.
//!
//! The header describes the model's input window and output classes. The
//! firmware loader consumes it by casting the byte buffer to a packed C
//! struct, so every field is little-endian at a fixed offset and the model
//! bytes start at a 4-byte-aligned offset right after the header.

mod blob;
mod error;
mod layout;
pub mod pack;
pub mod render;
mod schema;
mod spec;

pub use blob::{HEADER_MAGIC, assemble};
pub use error::HeaderError;
pub use layout::{HeaderLayout, compute_layout};
pub use schema::{EntryKind, HeaderField, SchemaConfig};
pub use spec::{Entry, MAX_ENTRIES, MAX_LABEL_LEN, ModelHeaderSpec};
