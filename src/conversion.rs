//! # Word-level numeric decoders
//!
//! Every field of an archive frame is built from 4-byte **big-endian** words.
//! This module turns those raw words into Rust values:
//!
//! * [`ibm360_to_f64`] – legacy IBM System/360 single-precision float → `f64`,
//! * [`be_uint`] – N big-endian bytes → unsigned integer,
//! * [`orbit_range`] – one word split into a `(start, end)` pair of `u16`.
//!
//! The same decoders are also exposed as [`nom`] parsers ([`ibm_float`],
//! [`orbit_range_parser`]) so that contiguous spans of a frame can be consumed
//! with `nom::multi::count`.
//!
//! ## Legacy float layout
//!
//! ```text
//!  31 | 30 ........ 24 | 23 ..................... 0
//!  S  | biased exponent |  fraction (6 hex digits)
//! ```
//!
//! value = (-1)^S × 0.F₁F₂…F₆ (base 16) × 16^(exponent − 64)
//!
//! All decoders are total: every input word produces a value.
use nom::{
    number::complete::{be_u16, be_u32},
    sequence::tuple,
    IResult,
};

/// Bias of the 7-bit legacy exponent.
const EXPONENT_BIAS: i32 = 64;

/// Mask selecting the 24 fraction bits of a legacy float.
const FRACTION_MASK: u32 = 0x00FF_FFFF;

/// Pair of orbit numbers packed into one word.
///
/// No ordering is enforced between `start` and `end`: degenerate or reversed
/// ranges are passed through as stored in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrbitRange {
    pub start: u16,
    pub end: u16,
}

/// Exact power of two as an `f64`, for `k` inside the normal exponent range.
fn pow2(k: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&k));
    f64::from_bits(((k + 1023) as u64) << 52)
}

/// Decode a legacy float already assembled as a big-endian `u32`.
///
/// Arguments
/// -----------------
/// * `bits`: the 32 raw bits of the word, most significant byte first.
///
/// Return
/// ----------
/// * The decoded value. A zero fraction always yields `+0.0`, whatever the
///   sign bit and exponent.
///
/// See also
/// ------------
/// * [`ibm360_to_f64`] – Same decoder starting from the raw 4 bytes.
pub fn ibm360_from_bits(bits: u32) -> f64 {
    let fraction = bits & FRACTION_MASK;
    if fraction == 0 {
        return 0.0;
    }

    let exponent = ((bits >> 24) & 0x7F) as i32 - EXPONENT_BIAS;

    // 0.F (base 16) = fraction / 2^24, and 16^e = 2^(4e)
    let magnitude = f64::from(fraction) * pow2(4 * exponent - 24);

    if bits >> 31 == 1 {
        -magnitude
    } else {
        magnitude
    }
}

/// Decode one legacy IBM System/360 float word into an `f64`.
///
/// The 24-bit fraction and the power-of-16 scale are both exactly
/// representable in `f64`, so the conversion is lossless.
///
/// Arguments
/// -----------------
/// * `word`: the 4 bytes of the field, big-endian.
///
/// Return
/// ----------
/// * The signed real value encoded by the word.
///
/// See also
/// ------------
/// * [`ibm_float`] – nom parser wrapping this decoder.
pub fn ibm360_to_f64(word: [u8; 4]) -> f64 {
    ibm360_from_bits(u32::from_be_bytes(word))
}

/// Decode N big-endian bytes as an unsigned integer.
///
/// Arguments
/// -----------------
/// * `bytes`: at most 8 bytes, most significant first. An empty slice yields `0`.
///
/// Return
/// ----------
/// * The unsigned integer formed by concatenating the bytes.
pub fn be_uint(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    bytes
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte))
}

/// Split one word into a `(start, end)` orbit pair.
///
/// The first two bytes are the start orbit, the last two the end orbit, both
/// big-endian.
pub fn orbit_range(word: [u8; 4]) -> OrbitRange {
    OrbitRange {
        start: be_uint(&word[..2]) as u16,
        end: be_uint(&word[2..]) as u16,
    }
}

/// nom parser consuming one legacy float word.
pub fn ibm_float(input: &[u8]) -> IResult<&[u8], f64> {
    let (input, bits) = be_u32(input)?;
    Ok((input, ibm360_from_bits(bits)))
}

/// nom parser consuming one packed orbit-range word.
pub fn orbit_range_parser(input: &[u8]) -> IResult<&[u8], OrbitRange> {
    let (input, (start, end)) = tuple((be_u16, be_u16))(input)?;
    Ok((input, OrbitRange { start, end }))
}
