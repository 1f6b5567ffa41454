//! SUMMARY record (tag 1): file-level description of an archive.
//!
//! The summary carries the spectral sampling of the archive, the orbit range
//! it covers, mean / standard-deviation statistics of six instrument
//! temperatures, and a fixed block of 18 orbit entries.
//!
//! ## Record-word layout
//! -----------------
//! | words      | content                                              |
//! |------------|------------------------------------------------------|
//! | `1`        | satellite id (uint)                                  |
//! | `2..=4`    | initial / final wave number, increment (float)       |
//! | `5`        | start / end orbit (orbit range)                      |
//! | `7..=18`   | mean, sd pairs: bolometer, blackbody, beamsplitter,  |
//! |            | MDM, IMCC, CS temperatures (float)                   |
//! | `22`       | RCS count (float)                                    |
//! | `24`       | orbit count (uint)                                   |
//! | `25..169`  | 18 orbit entries of 8 words (uint)                   |
//!
//! Words 6, 19..=21 and 23 are reserved.
use std::fmt;

use itertools::Itertools;
use nom::{multi::fill, number::complete::be_u32, sequence::tuple, IResult};

use crate::{
    constants::{ORBIT_ENTRIES_START, ORBIT_ENTRY_COUNT, ORBIT_ENTRY_WORDS},
    conversion::OrbitRange,
    frame::RecordWords,
    IrisError,
};

const SATELLITE_ID: usize = 1;
const INITIAL_WAVE_NUMBER: usize = 2;
const FINAL_WAVE_NUMBER: usize = 3;
const WAVE_NUMBER_INCREMENT: usize = 4;
const ORBIT_RANGE: usize = 5;
const BOLOMETER_TEMP: usize = 7;
const BLACKBODY_TEMP: usize = 9;
const BEAMSPLITTER_TEMP: usize = 11;
const MDM_TEMP: usize = 13;
const IMCC_TEMP: usize = 15;
const CS_TEMP: usize = 17;
const RCS_COUNT: usize = 22;
const ORBIT_COUNT: usize = 24;

/// Mean and standard deviation of a temperature over the archive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeanSd {
    pub mean: f64,
    pub sd: f64,
}

impl MeanSd {
    /// Read a `(mean, sd)` pair from two consecutive float words.
    fn from_words(words: &RecordWords, index: usize) -> Self {
        MeanSd {
            mean: words.float(index),
            sd: words.float(index + 1),
        }
    }
}

/// One entry of the SUMMARY orbit block: start and end time stamps of an
/// orbit, four unsigned words each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrbitEntry {
    pub start: [u32; 4],
    pub end: [u32; 4],
}

fn time_stamp(input: &[u8]) -> IResult<&[u8], [u32; 4]> {
    let (input, (a, b, c, d)) = tuple((be_u32, be_u32, be_u32, be_u32))(input)?;
    Ok((input, [a, b, c, d]))
}

fn orbit_entry(input: &[u8]) -> IResult<&[u8], OrbitEntry> {
    let (input, (start, end)) = tuple((time_stamp, time_stamp))(input)?;
    Ok((input, OrbitEntry { start, end }))
}

impl fmt::Display for OrbitEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.start.iter().join(" "),
            self.end.iter().join(" ")
        )
    }
}

/// Decoded SUMMARY record.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub satellite_id: u32,
    pub initial_wave_number: f64,
    pub final_wave_number: f64,
    pub wave_number_increment: f64,
    /// Orbits covered by the archive.
    pub orbits: OrbitRange,
    pub bolometer_temp: MeanSd,
    /// Blackbody temperature.
    pub bb_temp: MeanSd,
    /// Beamsplitter temperature.
    pub bs_temp: MeanSd,
    pub mdm_temp: MeanSd,
    pub imcc_temp: MeanSd,
    pub cs_temp: MeanSd,
    pub rcs_count: f64,
    pub orbit_count: u32,
    pub orbit_entries: [OrbitEntry; ORBIT_ENTRY_COUNT],
}

impl SummaryRecord {
    pub(crate) fn from_words(words: &RecordWords) -> Result<Self, IrisError> {
        let mut orbit_entries = [OrbitEntry::default(); ORBIT_ENTRY_COUNT];
        let block = words.span(
            ORBIT_ENTRIES_START,
            ORBIT_ENTRIES_START + ORBIT_ENTRY_COUNT * ORBIT_ENTRY_WORDS,
        );
        fill(orbit_entry, &mut orbit_entries)(block)?;

        Ok(SummaryRecord {
            satellite_id: words.uint(SATELLITE_ID),
            initial_wave_number: words.float(INITIAL_WAVE_NUMBER),
            final_wave_number: words.float(FINAL_WAVE_NUMBER),
            wave_number_increment: words.float(WAVE_NUMBER_INCREMENT),
            orbits: words.orbit_range(ORBIT_RANGE),
            bolometer_temp: MeanSd::from_words(words, BOLOMETER_TEMP),
            bb_temp: MeanSd::from_words(words, BLACKBODY_TEMP),
            bs_temp: MeanSd::from_words(words, BEAMSPLITTER_TEMP),
            mdm_temp: MeanSd::from_words(words, MDM_TEMP),
            imcc_temp: MeanSd::from_words(words, IMCC_TEMP),
            cs_temp: MeanSd::from_words(words, CS_TEMP),
            rcs_count: words.float(RCS_COUNT),
            orbit_count: words.uint(ORBIT_COUNT),
            orbit_entries,
        })
    }
}

impl fmt::Display for SummaryRecord {
    /// Render the scalar fields as a fixed-width two-column table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABEL_WIDTH: usize = 20;
        const VALUE_WIDTH: usize = 40;

        let temp = |t: &MeanSd| format!("{} (sd {})", t.mean, t.sd);
        let fields = [
            ("Satellite", self.satellite_id.to_string()),
            (
                "Wave numbers",
                format!(
                    "{} .. {} step {}",
                    self.initial_wave_number, self.final_wave_number, self.wave_number_increment
                ),
            ),
            (
                "Orbits",
                format!("{} .. {}", self.orbits.start, self.orbits.end),
            ),
            ("Bolometer temp", temp(&self.bolometer_temp)),
            ("Blackbody temp", temp(&self.bb_temp)),
            ("Beamsplitter temp", temp(&self.bs_temp)),
            ("MDM temp", temp(&self.mdm_temp)),
            ("IMCC temp", temp(&self.imcc_temp)),
            ("CS temp", temp(&self.cs_temp)),
            ("RCS count", self.rcs_count.to_string()),
            ("Orbit count", self.orbit_count.to_string()),
        ];

        let border = format!(
            "+{:-<label$}+{:-<value$}+",
            "",
            "",
            label = LABEL_WIDTH + 1,
            value = VALUE_WIDTH + 1
        );

        writeln!(f, "{border}")?;
        writeln!(
            f,
            "| {:<label$}| {:<value$}|",
            "IRIS Summary",
            "",
            label = LABEL_WIDTH,
            value = VALUE_WIDTH
        )?;
        writeln!(f, "{border}")?;
        for (label, value) in fields {
            writeln!(
                f,
                "| {:<label$}| {:<value$}|",
                label,
                value,
                label = LABEL_WIDTH,
                value = VALUE_WIDTH
            )?;
        }
        writeln!(f, "{border}")
    }
}
