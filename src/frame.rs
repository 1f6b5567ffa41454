//! Frame splitting and word addressing.
//!
//! A frame is a fixed block of [`FRAME_SIZE`] bytes read atomically from the
//! archive. Its layout is:
//!
//! ```text
//! +----------------+----------+------------------------------------------+
//! | leading block  | type tag | record body (tag-dependent layout)        |
//! | 2 words, 8 B   | 1 word   | 890 words                                 |
//! +----------------+----------+------------------------------------------+
//!                  ^ record word 0
//! ```
//!
//! The leading block is a reserved record-count marker and is discarded.
//! [`RecordWords`] exposes the remaining 891 words with **record-word**
//! addressing, so layout tables index the archive format directly.
//!
//! # See also
//! ------------
//! * [`decode_frame`] – Length check, tag extraction and dispatch.
//! * [`crate::records::Record::from_words`] – Per-variant layouts.
use log::trace;
use nom::{bytes::complete::take, multi::count, number::complete::be_u32, IResult};

use crate::{
    constants::{FRAME_SIZE, LEADING_WORDS, RECORD_BYTES, RECORD_WORDS, TAG_OFFSET, WORD_SIZE},
    conversion::{be_uint, ibm360_to_f64, ibm_float, orbit_range, OrbitRange},
    records::{Record, RecordType},
    IrisError,
};

/// Read-only view over the record words of one frame.
///
/// The backing array always holds exactly [`RECORD_WORDS`] words, so every
/// accessor with a compile-time offset below [`RECORD_WORDS`] is infallible.
#[derive(Debug, Clone, Copy)]
pub struct RecordWords<'a> {
    bytes: &'a [u8; RECORD_BYTES],
}

impl<'a> RecordWords<'a> {
    pub fn new(bytes: &'a [u8; RECORD_BYTES]) -> Self {
        RecordWords { bytes }
    }

    /// Raw 4 bytes of record word `index`.
    pub fn word(&self, index: usize) -> [u8; 4] {
        let start = index * WORD_SIZE;
        [
            self.bytes[start],
            self.bytes[start + 1],
            self.bytes[start + 2],
            self.bytes[start + 3],
        ]
    }

    /// Record word `index` as an unsigned integer.
    pub fn uint(&self, index: usize) -> u32 {
        be_uint(&self.word(index)) as u32
    }

    /// Record word `index` as a legacy float.
    pub fn float(&self, index: usize) -> f64 {
        ibm360_to_f64(self.word(index))
    }

    /// Record word `index` as a packed orbit range.
    pub fn orbit_range(&self, index: usize) -> OrbitRange {
        orbit_range(self.word(index))
    }

    /// Bytes of the record words `start..end`.
    pub fn span(&self, start: usize, end: usize) -> &'a [u8] {
        &self.bytes[start * WORD_SIZE..end * WORD_SIZE]
    }

    /// Legacy floats from record word `start` to the end of the frame.
    ///
    /// The length is always `RECORD_WORDS - start`; no length field stored in
    /// the frame is consulted.
    pub fn float_tail(&self, start: usize) -> Result<Vec<f64>, IrisError> {
        let (_, values) = count(ibm_float, RECORD_WORDS - start)(self.span(start, RECORD_WORDS))?;
        Ok(values)
    }

    /// Type tag stored in record word 0.
    pub fn tag(&self) -> u32 {
        self.uint(TAG_OFFSET)
    }
}

/// Split a frame into its leading block and the record body.
fn split_frame(input: &[u8]) -> IResult<&[u8], u32> {
    let (input, _leading) = take(LEADING_WORDS * WORD_SIZE)(input)?;
    be_u32(input)
}

/// Decode one archive frame into its type and record.
///
/// Arguments
/// -----------------
/// * `frame`: the raw bytes of exactly one frame.
///
/// Return
/// ----------
/// * `(RecordType, Record)` on success.
///
/// Errors
/// ----------
/// * [`IrisError::TruncatedInput`] if `frame` is not exactly [`FRAME_SIZE`] bytes,
///   reported before any field is decoded.
/// * [`IrisError::UnrecognizedRecordType`] if the tag is outside `1..=8`.
///
/// Decoding is all-or-nothing: no partial record is ever returned.
pub fn decode_frame(frame: &[u8]) -> Result<(RecordType, Record), IrisError> {
    if frame.len() != FRAME_SIZE {
        return Err(IrisError::truncated(frame.len()));
    }

    let (_, tag) = split_frame(frame)?;
    let record_type = RecordType::try_from(tag)?;

    let body: &[u8; RECORD_BYTES] = frame[LEADING_WORDS * WORD_SIZE..]
        .try_into()
        .map_err(|_| IrisError::truncated(frame.len()))?;
    let words = RecordWords::new(body);
    trace!("decoding {record_type} frame");

    let record = Record::from_words(record_type, &words)?;
    Ok((record_type, record))
}

#[cfg(test)]
mod test_frame {
    use super::*;
    use crate::constants::TRAILING_LEN;

    fn frame_with_tag(tag: u32) -> Vec<u8> {
        let mut frame = vec![0u8; FRAME_SIZE];
        frame[..8].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 0xDE, 0xAD, 0xBE, 0xEF]);
        frame[8..12].copy_from_slice(&tag.to_be_bytes());
        frame
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        for len in [0usize, 1, 8, 12, FRAME_SIZE - 1, FRAME_SIZE + 1, 2 * FRAME_SIZE] {
            let frame = vec![0u8; len];
            assert_eq!(decode_frame(&frame), Err(IrisError::truncated(len)));
        }
    }

    #[test]
    fn test_length_checked_before_tag() {
        // a bad tag in a short frame still reports the length
        let mut frame = frame_with_tag(42);
        frame.pop();
        assert_eq!(
            decode_frame(&frame),
            Err(IrisError::truncated(FRAME_SIZE - 1))
        );
    }

    #[test]
    fn test_rejects_unknown_tags() {
        for tag in [0u32, 9, 0xFFFF_FFFF] {
            assert_eq!(
                decode_frame(&frame_with_tag(tag)),
                Err(IrisError::UnrecognizedRecordType(tag))
            );
        }
    }

    #[test]
    fn test_leading_block_is_ignored() {
        let (record_type, record) = decode_frame(&frame_with_tag(5)).unwrap();
        assert_eq!(record_type, RecordType::NoiseEquivalentRadiance);
        assert_eq!(record.record_type(), RecordType::NoiseEquivalentRadiance);
    }

    #[test]
    fn test_record_words_addressing() {
        let mut frame = frame_with_tag(2);
        // record word 1 is frame word 3
        frame[12..16].copy_from_slice(&[0x00, 0x07, 0x00, 0x09]);
        // last record word
        frame[FRAME_SIZE - 4..].copy_from_slice(&[0x41, 0x10, 0x00, 0x00]);

        let body: &[u8; RECORD_BYTES] = frame[8..].try_into().unwrap();
        let words = RecordWords::new(body);
        assert_eq!(words.tag(), 2);
        assert_eq!(words.orbit_range(1), OrbitRange { start: 7, end: 9 });
        assert_eq!(words.uint(1), 0x0007_0009);
        assert_eq!(words.float(RECORD_WORDS - 1), 1.0);

        let tail = words.float_tail(29).unwrap();
        assert_eq!(tail.len(), TRAILING_LEN);
        assert_eq!(tail[TRAILING_LEN - 1], 1.0);
        assert!(words.float_tail(RECORD_WORDS).unwrap().is_empty());
    }
}
