//! CALIBRATED_ATMOSPHERIC_SPECTRUM record (tag 8).
//!
//! One calibrated interferogram sample: acquisition time and footprint,
//! instrument housekeeping (temperatures, calibration voltages, counters) and
//! the specific-intensity curve occupying the rest of the frame.
//!
//! | words      | content                                                     |
//! |------------|-------------------------------------------------------------|
//! | `1..=8`    | orbit, spectrum number, day, hour, minute, second, lat, lon |
//! | `9..=17`   | height, solar elevation, 7 temperatures (float)             |
//! | `18`       | IMCC position (uint)                                        |
//! | `19..=22`  | +/0/- voltage calibration, calibration transducer (float)   |
//! | `25`, `26` | bit error count, gain pulses outside center (float)         |
//! | `27`       | time indicator (uint)                                       |
//! | `29..`     | specific intensity (float, 862 values)                      |
use crate::{constants::TRAILING_START, frame::RecordWords, IrisError};

const ORBIT_NUMBER: usize = 1;
const SPECTRUM_NUMBER: usize = 2;
const DAY: usize = 3;
const HOUR: usize = 4;
const MINUTE: usize = 5;
const SECOND: usize = 6;
const LATITUDE: usize = 7;
const LONGITUDE: usize = 8;
const HEIGHT: usize = 9;
const SOLAR_ELEVATION_ANGLE: usize = 10;
const BOLO_TEMP: usize = 11;
const BLACKBODY_TEMP: usize = 12;
const BLACKBODY_TEMP_REDUNDANT: usize = 13;
const BEAMSPLITTER_TEMP: usize = 14;
const MMMD_TEMP: usize = 15;
const IMCC_TEMP: usize = 16;
const CS_TEMP: usize = 17;
const IMCC_POSITION: usize = 18;
const POSITIVE_VOLT_CAL: usize = 19;
const ZERO_VOLT_CAL: usize = 20;
const NEGATIVE_VOLT_CAL: usize = 21;
const CAL_TRANSDUCER: usize = 22;
const BIT_ERROR_COUNT: usize = 25;
const GAIN_PULSES_OUTSIDE_CENTER: usize = 26;
const TIME_INDICATOR: usize = 27;

#[derive(Debug, Clone, PartialEq)]
pub struct AtmosphericSpectrum {
    pub orbit_number: u32,
    pub spectrum_number: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub latitude: u32,
    pub longitude: u32,
    pub height: f64,
    pub solar_elevation_angle: f64,
    pub bolo_temp: f64,
    pub blackbody_temp: f64,
    pub blackbody_temp_redundant: f64,
    pub beamsplitter_temp: f64,
    pub mmmd_temp: f64,
    pub imcc_temp: f64,
    pub cs_temp: f64,
    pub imcc_position: u32,
    pub positive_volt_cal: f64,
    pub zero_volt_cal: f64,
    pub negative_volt_cal: f64,
    pub cal_transducer: f64,
    pub bit_error_count: f64,
    pub gain_pulses_outside_center: f64,
    pub time_indicator: u32,
    pub specific_intensity: Vec<f64>,
}

impl AtmosphericSpectrum {
    pub(crate) fn from_words(words: &RecordWords) -> Result<Self, IrisError> {
        Ok(AtmosphericSpectrum {
            orbit_number: words.uint(ORBIT_NUMBER),
            spectrum_number: words.uint(SPECTRUM_NUMBER),
            day: words.uint(DAY),
            hour: words.uint(HOUR),
            minute: words.uint(MINUTE),
            second: words.uint(SECOND),
            latitude: words.uint(LATITUDE),
            longitude: words.uint(LONGITUDE),
            height: words.float(HEIGHT),
            solar_elevation_angle: words.float(SOLAR_ELEVATION_ANGLE),
            bolo_temp: words.float(BOLO_TEMP),
            blackbody_temp: words.float(BLACKBODY_TEMP),
            blackbody_temp_redundant: words.float(BLACKBODY_TEMP_REDUNDANT),
            beamsplitter_temp: words.float(BEAMSPLITTER_TEMP),
            mmmd_temp: words.float(MMMD_TEMP),
            imcc_temp: words.float(IMCC_TEMP),
            cs_temp: words.float(CS_TEMP),
            imcc_position: words.uint(IMCC_POSITION),
            positive_volt_cal: words.float(POSITIVE_VOLT_CAL),
            zero_volt_cal: words.float(ZERO_VOLT_CAL),
            negative_volt_cal: words.float(NEGATIVE_VOLT_CAL),
            cal_transducer: words.float(CAL_TRANSDUCER),
            bit_error_count: words.float(BIT_ERROR_COUNT),
            gain_pulses_outside_center: words.float(GAIN_PULSES_OUTSIDE_CENTER),
            time_indicator: words.uint(TIME_INDICATOR),
            specific_intensity: words.float_tail(TRAILING_START)?,
        })
    }
}

#[cfg(test)]
mod test_spectrum {
    use super::*;
    use crate::constants::{RECORD_BYTES, TRAILING_LEN};

    /// Legacy float with exponent 1 and a single leading hex digit: `digit`.
    fn small_float(digit: u8) -> [u8; 4] {
        [0x41, digit << 4, 0x00, 0x00]
    }

    #[test]
    fn test_spectrum_layout() {
        let mut body = [0u8; RECORD_BYTES];
        let mut put = |word: usize, bytes: [u8; 4]| {
            body[word * 4..word * 4 + 4].copy_from_slice(&bytes);
        };

        for word in 1..=8usize {
            put(word, (word as u32 * 10).to_be_bytes());
        }
        for word in 9..=17usize {
            put(word, small_float(word as u8 - 8));
        }
        put(18, 77u32.to_be_bytes());
        for word in 19..=22usize {
            put(word, small_float(word as u8 - 9));
        }
        put(23, [0xFF; 4]);
        put(24, [0xFF; 4]);
        put(25, small_float(14));
        put(26, small_float(15));
        put(27, 3u32.to_be_bytes());
        put(28, [0xFF; 4]);
        put(29, [0xC0, 0x80, 0x00, 0x00]);

        let spectrum = AtmosphericSpectrum::from_words(&RecordWords::new(&body)).unwrap();

        assert_eq!(spectrum.orbit_number, 10);
        assert_eq!(spectrum.spectrum_number, 20);
        assert_eq!(spectrum.day, 30);
        assert_eq!(spectrum.hour, 40);
        assert_eq!(spectrum.minute, 50);
        assert_eq!(spectrum.second, 60);
        assert_eq!(spectrum.latitude, 70);
        assert_eq!(spectrum.longitude, 80);
        assert_eq!(spectrum.height, 1.0);
        assert_eq!(spectrum.solar_elevation_angle, 2.0);
        assert_eq!(spectrum.bolo_temp, 3.0);
        assert_eq!(spectrum.blackbody_temp, 4.0);
        assert_eq!(spectrum.blackbody_temp_redundant, 5.0);
        assert_eq!(spectrum.beamsplitter_temp, 6.0);
        assert_eq!(spectrum.mmmd_temp, 7.0);
        assert_eq!(spectrum.imcc_temp, 8.0);
        assert_eq!(spectrum.cs_temp, 9.0);
        assert_eq!(spectrum.imcc_position, 77);
        assert_eq!(spectrum.positive_volt_cal, 10.0);
        assert_eq!(spectrum.zero_volt_cal, 11.0);
        assert_eq!(spectrum.negative_volt_cal, 12.0);
        assert_eq!(spectrum.cal_transducer, 13.0);
        assert_eq!(spectrum.bit_error_count, 14.0);
        assert_eq!(spectrum.gain_pulses_outside_center, 15.0);
        assert_eq!(spectrum.time_indicator, 3);
        assert_eq!(spectrum.specific_intensity.len(), TRAILING_LEN);
        assert_eq!(spectrum.specific_intensity[0], -0.5);
    }
}
