//! # Constants for the IRIS archive format
//!
//! This module centralizes the **frame geometry** of the archive and the
//! **record-word offsets** shared by several record layouts.
//!
//! ## Overview
//!
//! - Frame and word sizes
//! - Size of the discarded leading block
//! - Start offset and length of the trailing legacy-float arrays
//! - Geometry of the SUMMARY orbit-entry block
//!
//! All offsets below are expressed in **record words**: record word `0` is the
//! type tag, i.e. frame word `LEADING_WORDS`.

// -------------------------------------------------------------------------------------------------
// Frame geometry
// -------------------------------------------------------------------------------------------------

/// Size in bytes of one word, the atomic unit of the format.
pub const WORD_SIZE: usize = 4;

/// Size in bytes of one archive frame.
pub const FRAME_SIZE: usize = 3572;

/// Number of words in one frame.
pub const FRAME_WORDS: usize = FRAME_SIZE / WORD_SIZE;

/// Number of reserved words preceding the type tag (the 8-byte leading block).
pub const LEADING_WORDS: usize = 2;

/// Number of record words, type tag included.
pub const RECORD_WORDS: usize = FRAME_WORDS - LEADING_WORDS;

/// Size in bytes of the record body, type tag included.
pub const RECORD_BYTES: usize = RECORD_WORDS * WORD_SIZE;

// -------------------------------------------------------------------------------------------------
// Shared layout offsets
// -------------------------------------------------------------------------------------------------

/// Record word holding the type tag.
pub const TAG_OFFSET: usize = 0;

/// First record word of every trailing legacy-float array.
pub const TRAILING_START: usize = 29;

/// Number of values in every trailing legacy-float array.
pub const TRAILING_LEN: usize = RECORD_WORDS - TRAILING_START;

/// First record word of the SUMMARY orbit-entry block.
pub const ORBIT_ENTRIES_START: usize = 25;

/// Number of words making up one orbit entry (two 4-word time stamps).
pub const ORBIT_ENTRY_WORDS: usize = 8;

/// Number of orbit entries carried by a SUMMARY record.
pub const ORBIT_ENTRY_COUNT: usize = 18;

const _: () = assert!(FRAME_SIZE % WORD_SIZE == 0);
const _: () = assert!(TRAILING_LEN == 862);
const _: () = assert!(ORBIT_ENTRIES_START + ORBIT_ENTRY_COUNT * ORBIT_ENTRY_WORDS <= RECORD_WORDS);
