//! Length-prefixed, multi-encoding string reads.

use value_summary_buffers::Reader;

use crate::constants::{STRING_ENCODING_LATIN1, STRING_ENCODING_TWO_BYTE, STRING_ENCODING_UTF8};
use crate::error::SummaryError;

/// Reads one encoded string.
///
/// The 2-byte header packs a length in the low 14 bits and an encoding in
/// the top 2 bits. A zero length yields `""` and consumes only the header.
/// For the two-byte encoding the length counts UTF-16 code units, so the
/// payload is `length * 2` bytes. Latin-1 bytes map to U+0000..U+00FF
/// one-to-one; UTF-8 and UTF-16 decode lossily (malformed sequences become
/// U+FFFD).
pub fn read_string(reader: &mut Reader) -> Result<String, SummaryError> {
    let encoding_and_length = reader.try_u16()?;
    let length = (encoding_and_length & 0x3fff) as usize;
    let encoding = (encoding_and_length >> 14) as u8;
    if length == 0 {
        return Ok(String::new());
    }

    match encoding {
        STRING_ENCODING_LATIN1 => {
            let bytes = reader.try_buf(length)?;
            Ok(bytes.iter().map(|&b| b as char).collect())
        }
        STRING_ENCODING_UTF8 => {
            let bytes = reader.try_buf(length)?;
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        STRING_ENCODING_TWO_BYTE => {
            let bytes = reader.try_buf(length * 2)?;
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            Ok(String::from_utf16_lossy(&units))
        }
        // The 2-bit field has one unassigned value; nothing is consumed
        // beyond the header for it.
        _ => Ok(String::new()),
    }
}
