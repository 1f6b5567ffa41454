//! Calibration records: reference spectra and per-orbit-range curves.
//!
//! Both layouts open with the orbit range they cover (record word 1) and end
//! with a trailing legacy-float array spanning record words
//! `TRAILING_START..RECORD_WORDS`.
//!
//! ```text
//! word  1        2        3..=6                  7..=28      29 ...... 890
//!      +--------+--------+----------------------+-----------+-------------+
//!      | orbits | count  | peak value/position  | reserved  | curve       |
//!      +--------+--------+----------------------+-----------+-------------+
//! ```
//!
//! [`OrbitCurve`] layouts only use the orbit range and the curve.
use crate::{
    constants::TRAILING_START,
    conversion::OrbitRange,
    frame::RecordWords,
    IrisError,
};

const ORBIT_RANGE: usize = 1;
const SPECTRA_COUNT: usize = 2;
const AVG_PEAK_VALUE: usize = 3;
const SD_PEAK_VALUE: usize = 4;
const AVG_PEAK_POSITION: usize = 5;
const SD_PEAK_POSITION: usize = 6;

/// Averaged cold or warm reference spectrum (tags 2 and 3).
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSpectrum {
    /// Orbits over which the reference was averaged.
    pub orbits: OrbitRange,
    /// Number of spectra entering the average.
    pub spectra_count: u32,
    pub avg_peak_value: f64,
    pub sd_peak_value: f64,
    pub avg_peak_position: f64,
    pub sd_peak_position: f64,
    /// Averaged reference spectrum intensity.
    pub intensity: Vec<f64>,
}

impl ReferenceSpectrum {
    pub(crate) fn from_words(words: &RecordWords) -> Result<Self, IrisError> {
        Ok(ReferenceSpectrum {
            orbits: words.orbit_range(ORBIT_RANGE),
            spectra_count: words.uint(SPECTRA_COUNT),
            avg_peak_value: words.float(AVG_PEAK_VALUE),
            sd_peak_value: words.float(SD_PEAK_VALUE),
            avg_peak_position: words.float(AVG_PEAK_POSITION),
            sd_peak_position: words.float(SD_PEAK_POSITION),
            intensity: words.float_tail(TRAILING_START)?,
        })
    }
}

/// Curve tabulated over an orbit range (tags 4 to 7).
///
/// Depending on the tag, `values` holds the average responsivity, the noise
/// equivalent radiance, or the mean / standard deviation of the instrument
/// temperatures.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCurve {
    pub orbits: OrbitRange,
    pub values: Vec<f64>,
}

impl OrbitCurve {
    pub(crate) fn from_words(words: &RecordWords) -> Result<Self, IrisError> {
        Ok(OrbitCurve {
            orbits: words.orbit_range(ORBIT_RANGE),
            values: words.float_tail(TRAILING_START)?,
        })
    }
}
