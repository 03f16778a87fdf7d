//! Byte-level decoding of on-disk layout files.
//!
//! MSKLC writes .klc files as UTF-16LE with a BOM; hand-edited files are
//! often plain UTF-8. The parser itself only sees `&str`.

use super::error::{KlcError, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use std::io::Cursor;

const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_UTF16_BE: [u8; 2] = [0xFE, 0xFF];
const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decodes raw layout-file bytes into text, sniffing the BOM.
///
/// Without a BOM the data is treated as UTF-8.
pub fn decode_layout_bytes(data: &[u8]) -> Result<String> {
    if data.starts_with(&BOM_UTF16_LE) {
        decode_utf16::<LittleEndian>(&data[2..])
    } else if data.starts_with(&BOM_UTF16_BE) {
        decode_utf16::<BigEndian>(&data[2..])
    } else if data.starts_with(&BOM_UTF8) {
        decode_utf8(&data[3..])
    } else {
        decode_utf8(data)
    }
}

fn decode_utf16<E: ByteOrder>(data: &[u8]) -> Result<String> {
    if data.len() % 2 != 0 {
        return Err(KlcError::TruncatedUtf16(data.len()));
    }
    let mut cursor = Cursor::new(data);
    let mut units = Vec::with_capacity(data.len() / 2);
    while (cursor.position() as usize) < data.len() {
        // read_u16 cannot fail here; length is even and in-bounds
        let unit = cursor
            .read_u16::<E>()
            .map_err(|_| KlcError::TruncatedUtf16(data.len()))?;
        units.push(unit);
    }
    String::from_utf16(&units).map_err(|_| KlcError::InvalidUtf16(0))
}

fn decode_utf8(data: &[u8]) -> Result<String> {
    String::from_utf8(data.to_vec())
        .map_err(|e| KlcError::InvalidUtf8(e.utf8_error().valid_up_to()))
}
