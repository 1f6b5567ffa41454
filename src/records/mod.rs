//! # Record types and layout dispatch
//!
//! Every frame carries exactly one record, selected by the type tag stored in
//! record word 0. This module defines:
//!
//! * [`RecordType`] – the closed set of eight tags,
//! * [`Record`] – the decoded record, one variant per tag,
//! * [`Record::from_words`] – exhaustive dispatch to the per-variant layouts.
//!
//! ## Layouts
//! -----------------
//! | tag | type                               | layout                          |
//! |-----|------------------------------------|---------------------------------|
//! | 1   | `SUMMARY`                          | [`SummaryRecord`]               |
//! | 2   | `COLD_REFERENCE`                   | [`ReferenceSpectrum`]           |
//! | 3   | `WARM_REFERENCE`                   | [`ReferenceSpectrum`]           |
//! | 4   | `AVERAGE_RESPONSIVITY`             | [`OrbitCurve`]                  |
//! | 5   | `NOISE_EQUIVALENT_RADIANCE`        | [`OrbitCurve`]                  |
//! | 6   | `AVERAGE_INSTRUMENT_TEMP`          | [`OrbitCurve`]                  |
//! | 7   | `SD_INSTRUMENT_TEMP`               | [`OrbitCurve`]                  |
//! | 8   | `CALIBRATED_ATMOSPHERIC_SPECTRUM`  | [`AtmosphericSpectrum`]         |
//!
//! Each layout reads its fields by explicit record-word offsets; the
//! tag-to-layout mapping is a `match` the compiler checks for completeness.
use std::fmt;

use crate::{frame::RecordWords, IrisError};

pub mod calibration;
pub mod spectrum;
pub mod summary;

pub use calibration::{OrbitCurve, ReferenceSpectrum};
pub use spectrum::AtmosphericSpectrum;
pub use summary::{MeanSd, OrbitEntry, SummaryRecord};

/// Type tag of an archive record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    Summary = 1,
    ColdReference = 2,
    WarmReference = 3,
    AverageResponsivity = 4,
    NoiseEquivalentRadiance = 5,
    AverageInstrumentTemp = 6,
    SdInstrumentTemp = 7,
    CalibratedAtmosphericSpectrum = 8,
}

impl RecordType {
    /// Every record type, in tag order.
    pub const ALL: [RecordType; 8] = [
        RecordType::Summary,
        RecordType::ColdReference,
        RecordType::WarmReference,
        RecordType::AverageResponsivity,
        RecordType::NoiseEquivalentRadiance,
        RecordType::AverageInstrumentTemp,
        RecordType::SdInstrumentTemp,
        RecordType::CalibratedAtmosphericSpectrum,
    ];

    /// Numeric tag as stored in the archive.
    pub fn tag(self) -> u32 {
        self as u32
    }

    /// Upper-case name used by the archive documentation.
    pub fn name(self) -> &'static str {
        match self {
            RecordType::Summary => "SUMMARY",
            RecordType::ColdReference => "COLD_REFERENCE",
            RecordType::WarmReference => "WARM_REFERENCE",
            RecordType::AverageResponsivity => "AVERAGE_RESPONSIVITY",
            RecordType::NoiseEquivalentRadiance => "NOISE_EQUIVALENT_RADIANCE",
            RecordType::AverageInstrumentTemp => "AVERAGE_INSTRUMENT_TEMP",
            RecordType::SdInstrumentTemp => "SD_INSTRUMENT_TEMP",
            RecordType::CalibratedAtmosphericSpectrum => "CALIBRATED_ATMOSPHERIC_SPECTRUM",
        }
    }
}

impl TryFrom<u32> for RecordType {
    type Error = IrisError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        RecordType::ALL
            .into_iter()
            .find(|record_type| record_type.tag() == tag)
            .ok_or(IrisError::UnrecognizedRecordType(tag))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One decoded archive record.
///
/// Records own all their fields and keep no reference to the frame they were
/// decoded from.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Summary(Box<SummaryRecord>),
    ColdReference(ReferenceSpectrum),
    WarmReference(ReferenceSpectrum),
    AverageResponsivity(OrbitCurve),
    NoiseEquivalentRadiance(OrbitCurve),
    AverageInstrumentTemp(OrbitCurve),
    SdInstrumentTemp(OrbitCurve),
    CalibratedAtmosphericSpectrum(AtmosphericSpectrum),
}

impl Record {
    /// Decode the record words of a frame with the layout of `record_type`.
    ///
    /// Arguments
    /// -----------------
    /// * `record_type`: the tag already read from record word 0.
    /// * `words`: the record words of the frame.
    ///
    /// Return
    /// ----------
    /// * The fully populated [`Record`] variant matching `record_type`.
    ///
    /// See also
    /// ------------
    /// * [`crate::frame::decode_frame`] – Validates the frame and reads the tag.
    pub fn from_words(record_type: RecordType, words: &RecordWords) -> Result<Self, IrisError> {
        let record = match record_type {
            RecordType::Summary => Record::Summary(Box::new(SummaryRecord::from_words(words)?)),
            RecordType::ColdReference => {
                Record::ColdReference(ReferenceSpectrum::from_words(words)?)
            }
            RecordType::WarmReference => {
                Record::WarmReference(ReferenceSpectrum::from_words(words)?)
            }
            RecordType::AverageResponsivity => {
                Record::AverageResponsivity(OrbitCurve::from_words(words)?)
            }
            RecordType::NoiseEquivalentRadiance => {
                Record::NoiseEquivalentRadiance(OrbitCurve::from_words(words)?)
            }
            RecordType::AverageInstrumentTemp => {
                Record::AverageInstrumentTemp(OrbitCurve::from_words(words)?)
            }
            RecordType::SdInstrumentTemp => {
                Record::SdInstrumentTemp(OrbitCurve::from_words(words)?)
            }
            RecordType::CalibratedAtmosphericSpectrum => {
                Record::CalibratedAtmosphericSpectrum(AtmosphericSpectrum::from_words(words)?)
            }
        };
        Ok(record)
    }

    /// Type tag of this record.
    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Summary(_) => RecordType::Summary,
            Record::ColdReference(_) => RecordType::ColdReference,
            Record::WarmReference(_) => RecordType::WarmReference,
            Record::AverageResponsivity(_) => RecordType::AverageResponsivity,
            Record::NoiseEquivalentRadiance(_) => RecordType::NoiseEquivalentRadiance,
            Record::AverageInstrumentTemp(_) => RecordType::AverageInstrumentTemp,
            Record::SdInstrumentTemp(_) => RecordType::SdInstrumentTemp,
            Record::CalibratedAtmosphericSpectrum(_) => RecordType::CalibratedAtmosphericSpectrum,
        }
    }

    /// Trailing legacy-float array of the record, if its layout has one.
    pub fn trailing_values(&self) -> Option<&[f64]> {
        match self {
            Record::Summary(_) => None,
            Record::ColdReference(reference) | Record::WarmReference(reference) => {
                Some(&reference.intensity)
            }
            Record::AverageResponsivity(curve)
            | Record::NoiseEquivalentRadiance(curve)
            | Record::AverageInstrumentTemp(curve)
            | Record::SdInstrumentTemp(curve) => Some(&curve.values),
            Record::CalibratedAtmosphericSpectrum(spectrum) => Some(&spectrum.specific_intensity),
        }
    }
}

#[cfg(test)]
mod test_records {
    use super::*;
    use crate::constants::{RECORD_BYTES, TRAILING_LEN};

    #[test]
    fn test_record_type_tags() {
        for (i, record_type) in RecordType::ALL.into_iter().enumerate() {
            assert_eq!(record_type.tag(), i as u32 + 1);
            assert_eq!(RecordType::try_from(i as u32 + 1), Ok(record_type));
        }
        assert_eq!(
            RecordType::try_from(0),
            Err(IrisError::UnrecognizedRecordType(0))
        );
        assert_eq!(
            RecordType::try_from(9),
            Err(IrisError::UnrecognizedRecordType(9))
        );
    }

    #[test]
    fn test_record_type_display() {
        assert_eq!(RecordType::Summary.to_string(), "SUMMARY");
        assert_eq!(
            format!("{:<12}|", RecordType::SdInstrumentTemp),
            "SD_INSTRUMENT_TEMP|"
        );
        assert_eq!(format!("{:<9}|", RecordType::Summary), "SUMMARY  |");
    }

    #[test]
    fn test_dispatch_matches_tag() {
        let body = [0u8; RECORD_BYTES];
        let words = RecordWords::new(&body);
        for record_type in RecordType::ALL {
            let record = Record::from_words(record_type, &words).unwrap();
            assert_eq!(record.record_type(), record_type);
            match record.trailing_values() {
                Some(values) => assert_eq!(values.len(), TRAILING_LEN),
                None => assert_eq!(record_type, RecordType::Summary),
            }
        }
    }
}
