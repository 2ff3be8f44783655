//! Text projections of a finished header blob.
//!
//! Both renderers reproduce the exact same bytes in two encodings; the
//! formatting carries no semantic weight.

/// Renders the blob as a C `uint32_t` array literal, four words per line.
///
/// The blob length must be a multiple of 4, which the assembler guarantees
/// through the aligned model offset.
pub fn c_array(blob: &[u8]) -> String {
    debug_assert_eq!(blob.len() % 4, 0);

    let mut code = format!("const uint32_t header_data[{}] = {{", blob.len() / 4);
    for (i, word) in blob.chunks_exact(4).enumerate() {
        if i % 4 == 0 {
            code.push_str("\n    ");
        }
        // chunks_exact yields 4-byte slices, the conversion cannot fail.
        let value = u32::from_le_bytes(word.try_into().unwrap());
        code.push_str(&format!("0x{value:08X}, "));
    }
    code.push_str("\n};\n");
    code
}

/// Renders the blob as a DeviceScript `hex` template literal, two uppercase
/// digits per byte with no separators.
pub fn hex_literal(blob: &[u8]) -> String {
    let mut hex = String::from("const headerBlob = hex`");
    for byte in blob {
        hex.push_str(&format!("{byte:02X}"));
    }
    hex.push_str("`;\n");
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_blob_renders_empty_forms() {
        assert_eq!(c_array(&[]), "const uint32_t header_data[0] = {\n};\n");
        assert_eq!(hex_literal(&[]), "const headerBlob = hex``;\n");
    }

    #[test]
    fn words_are_little_endian_uppercase() {
        let blob = [0x4C, 0x44, 0x4F, 0x4D, 0xFF, 0x00, 0xAB, 0x01];
        assert_eq!(
            c_array(&blob),
            "const uint32_t header_data[2] = {\n    0x4D4F444C, 0x01AB00FF, \n};\n"
        );
    }

    #[test]
    fn lines_break_after_four_words() {
        let blob = [0u8; 20];
        assert_eq!(
            c_array(&blob),
            "const uint32_t header_data[5] = {\n    \
             0x00000000, 0x00000000, 0x00000000, 0x00000000, \n    \
             0x00000000, \n};\n"
        );
    }

    #[test]
    fn hex_bytes_have_no_separators() {
        assert_eq!(
            hex_literal(&[0x4C, 0x44, 0x4F, 0x4D, 0x00]),
            "const headerBlob = hex`4C444F4D00`;\n"
        );
    }
}
