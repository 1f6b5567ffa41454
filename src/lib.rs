//! # iris_archive
//!
//! Decoder for the IRIS (infrared interferometer spectrometer) telemetry
//! archive: fixed 3572-byte frames of big-endian words, many of them legacy
//! IBM System/360 floats, each carrying one of eight record types.
//!
//! ## Modules
//!
//! * [`conversion`] – word-level decoders (legacy float, unsigned, orbit range).
//! * [`frame`] – frame validation, record-word addressing, [`decode_frame`].
//! * [`records`] – [`RecordType`], [`Record`] and the per-type layouts.
//! * [`archive`] – [`ArchiveReader`] over a byte source, [`ArchiveSummary`] tally.
//! * [`constants`] – frame geometry and shared offsets.
pub mod archive;
pub mod constants;
pub mod conversion;
pub mod frame;
pub mod iris_errors;
pub mod records;

pub use archive::{ArchiveReader, ArchiveSummary};
pub use conversion::OrbitRange;
pub use frame::decode_frame;
pub use iris_errors::IrisError;
pub use records::{Record, RecordType};
