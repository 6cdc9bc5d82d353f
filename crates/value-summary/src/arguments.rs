//! Argument-list entry point: sentinels, version gate, argument cap.

use value_summary_buffers::Reader;

use crate::constants::{
    EXPECTED_VALUE_SUMMARIES_VERSION, EXPIRED_VALUES_MAGIC, MAX_ARGUMENTS_TO_RECORD,
    ZERO_ARGUMENTS_MAGIC,
};
use crate::decoder::SummaryDecoder;
use crate::error::SummaryError;
use crate::summary::{ArgumentSummaries, Shape};

/// Reads the format version word at offset 0 of a values buffer.
///
/// Public so callers can probe a buffer before committing to a decode.
pub fn buffer_version(buffer: &[u8]) -> Result<u32, SummaryError> {
    let mut reader = Reader::new(buffer);
    Ok(reader.try_u32()?)
}

/// Decodes the recorded argument list of one traced call.
///
/// `values_buffer_index` is either a real byte offset into `buffer` or one
/// of two sentinels: [`ZERO_ARGUMENTS_MAGIC`] short-circuits to an empty
/// argument list and [`EXPIRED_VALUES_MAGIC`] to
/// [`ArgumentSummaries::Expired`], in both cases without touching the
/// buffer. Otherwise the buffer's version word must match
/// [`EXPECTED_VALUE_SUMMARIES_VERSION`] — a mismatch fails the whole call —
/// and up to [`MAX_ARGUMENTS_TO_RECORD`] summaries are decoded from the
/// argument count at the given offset, each starting at depth 0.
pub fn argument_summaries(
    buffer: &[u8],
    shapes: &[Shape],
    values_buffer_index: i64,
) -> Result<ArgumentSummaries, SummaryError> {
    if values_buffer_index == ZERO_ARGUMENTS_MAGIC {
        return Ok(ArgumentSummaries::Arguments(Vec::new()));
    }
    if values_buffer_index == EXPIRED_VALUES_MAGIC {
        return Ok(ArgumentSummaries::Expired);
    }

    let version = buffer_version(buffer)?;
    if version != EXPECTED_VALUE_SUMMARIES_VERSION {
        return Err(SummaryError::UnexpectedVersion {
            expected: EXPECTED_VALUE_SUMMARIES_VERSION,
            received: version,
        });
    }

    let mut decoder = SummaryDecoder::at_offset(buffer, shapes, values_buffer_index as usize);
    let argc = decoder.reader.try_u32()?;
    let mut args = Vec::new();
    let mut i = 0;
    while i < argc && i < MAX_ARGUMENTS_TO_RECORD {
        args.push(decoder.read_value_summary(0)?);
        i += 1;
    }
    Ok(ArgumentSummaries::Arguments(args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::ValueSummary;
    use value_summary_buffers::Writer;

    #[test]
    fn test_buffer_version() {
        let mut w = Writer::new();
        w.u32(7);
        let data = w.flush();
        assert_eq!(buffer_version(&data), Ok(7));
    }

    #[test]
    fn test_buffer_version_short_buffer() {
        assert_eq!(
            buffer_version(&[0x01, 0x02]),
            Err(SummaryError::UnexpectedEof)
        );
    }

    #[test]
    fn test_zero_arguments_sentinel_skips_buffer() {
        // The buffer carries a bogus version word; the sentinel must win.
        let buffer = [0xff, 0xff, 0xff, 0xff];
        assert_eq!(
            argument_summaries(&buffer, &[], ZERO_ARGUMENTS_MAGIC),
            Ok(ArgumentSummaries::Arguments(Vec::new()))
        );
    }

    #[test]
    fn test_expired_sentinel_skips_buffer() {
        let buffer = [0xff, 0xff, 0xff, 0xff];
        assert_eq!(
            argument_summaries(&buffer, &[], EXPIRED_VALUES_MAGIC),
            Ok(ArgumentSummaries::Expired)
        );
    }

    #[test]
    fn test_version_mismatch_is_fatal() {
        let mut w = Writer::new();
        w.u32(EXPECTED_VALUE_SUMMARIES_VERSION + 1);
        w.u32(0); // argc, never reached
        let data = w.flush();
        assert_eq!(
            argument_summaries(&data, &[], 4),
            Err(SummaryError::UnexpectedVersion {
                expected: EXPECTED_VALUE_SUMMARIES_VERSION,
                received: EXPECTED_VALUE_SUMMARIES_VERSION + 1,
            })
        );
    }

    #[test]
    fn test_decodes_arguments_at_offset() {
        let mut w = Writer::new();
        w.u32(EXPECTED_VALUE_SUMMARIES_VERSION);
        w.u32(2); // argc
        w.u8(0x12); // bool true: type 0x02, flags 1
        w.u8(0x61); // inline int 5: type 0x01, flags 6
        let data = w.flush();
        assert_eq!(
            argument_summaries(&data, &[], 4),
            Ok(ArgumentSummaries::Arguments(vec![
                ValueSummary::Bool(true),
                ValueSummary::Int(5),
            ]))
        );
    }

    #[test]
    fn test_argument_cap() {
        let mut w = Writer::new();
        w.u32(EXPECTED_VALUE_SUMMARIES_VERSION);
        w.u32(6); // argc above the recording cap
        for _ in 0..MAX_ARGUMENTS_TO_RECORD {
            w.u8(0x03); // undefined
        }
        let data = w.flush();
        let ArgumentSummaries::Arguments(args) = argument_summaries(&data, &[], 4).unwrap() else {
            panic!("expected arguments");
        };
        assert_eq!(args.len(), MAX_ARGUMENTS_TO_RECORD as usize);
    }
}
