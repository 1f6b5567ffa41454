//! # Archive reader and per-type tally
//!
//! An IRIS archive is a plain concatenation of [`FRAME_SIZE`]-byte frames.
//! [`ArchiveReader`] cuts any [`Read`] source into frames and lazily decodes
//! them, yielding `(RecordType, Record)` pairs in file order.
//!
//! ## End of archive and truncation
//! -----------------
//! * a read returning 0 bytes at a frame boundary is a clean end;
//! * a final chunk of `1..FRAME_SIZE` bytes is a [`IrisError::TruncatedInput`];
//! * short reads from the source are retried until the frame is complete.
//!
//! After the first error the reader stops: frame boundaries cannot be
//! recovered once a frame is corrupt.
//!
//! ## Tally
//! -----------------
//! [`ArchiveSummary`] groups the decoded records by type in arrival order and
//! renders a `Record type | Count` table with comfy-table.
//!
//! ## Example
//! ```rust, no_run
//! use camino::Utf8Path;
//! use iris_archive::archive::{ArchiveReader, ArchiveSummary};
//!
//! let reader = ArchiveReader::open(Utf8Path::new("iris_d.bin"))?;
//! let summary = ArchiveSummary::tally(reader, None)?;
//! println!("{summary}");
//! # Ok::<(), iris_archive::IrisError>(())
//! ```
use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    iter::FusedIterator,
};

use camino::Utf8Path;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use log::{debug, info, warn};

use crate::{
    constants::FRAME_SIZE,
    frame::decode_frame,
    records::{Record, RecordType},
    IrisError,
};

/// Lazy, forward-only decoder over the frames of an archive.
///
/// See also
/// ------------
/// * [`ArchiveReader::open`] – Build a reader over a file on disk.
/// * [`decode_frame`] – Decoder applied to every frame.
#[derive(Debug)]
pub struct ArchiveReader<R> {
    source: R,
    buffer: Vec<u8>,
    frames_read: usize,
    finished: bool,
}

impl ArchiveReader<BufReader<File>> {
    /// Open an archive file for decoding.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: location of the archive.
    ///
    /// Return
    /// ----------
    /// * A reader over the buffered file, or [`IrisError::IoError`] if the file
    ///   cannot be opened.
    pub fn open(path: &Utf8Path) -> Result<Self, IrisError> {
        let file = File::open(path)?;
        info!("opened IRIS archive {path}");
        Ok(ArchiveReader::new(BufReader::new(file)))
    }
}

impl<R: Read> ArchiveReader<R> {
    pub fn new(source: R) -> Self {
        ArchiveReader {
            source,
            buffer: vec![0u8; FRAME_SIZE],
            frames_read: 0,
            finished: false,
        }
    }

    /// Number of complete frames consumed so far.
    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    /// Give back the underlying byte source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Fill the frame buffer from the source.
    ///
    /// Return
    /// ----------
    /// * `Ok(true)` when a full frame was read, `Ok(false)` at a clean end of
    ///   archive, [`IrisError::TruncatedInput`] on a partial final frame.
    fn fill_frame(&mut self) -> Result<bool, IrisError> {
        let mut filled = 0;
        while filled < FRAME_SIZE {
            match self.source.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }

        match filled {
            0 => Ok(false),
            FRAME_SIZE => Ok(true),
            partial => Err(IrisError::truncated(partial)),
        }
    }
}

impl<R: Read> Iterator for ArchiveReader<R> {
    type Item = Result<(RecordType, Record), IrisError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let decoded = match self.fill_frame() {
            Ok(false) => {
                self.finished = true;
                info!("end of archive after {} frames", self.frames_read);
                return None;
            }
            Ok(true) => {
                self.frames_read += 1;
                decode_frame(&self.buffer)
            }
            Err(err) => Err(err),
        };

        match &decoded {
            Ok((record_type, _)) => debug!("frame {}: {record_type}", self.frames_read),
            Err(err) => {
                self.finished = true;
                warn!("aborting archive after {} frames: {err}", self.frames_read);
            }
        }
        Some(decoded)
    }
}

impl<R: Read> FusedIterator for ArchiveReader<R> {}

/// Records of an archive grouped by type, in order of first arrival.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveSummary {
    groups: Vec<(RecordType, Vec<Record>)>,
}

impl ArchiveSummary {
    /// Group a sequence of decoded records by type.
    ///
    /// Arguments
    /// -----------------
    /// * `records`: decoded `(type, record)` pairs, typically an [`ArchiveReader`].
    ///
    /// Return
    /// ----------
    /// * The grouped records, or the first error met in the sequence.
    pub fn from_records<I>(records: I) -> Result<Self, IrisError>
    where
        I: IntoIterator<Item = Result<(RecordType, Record), IrisError>>,
    {
        let mut summary = ArchiveSummary::default();
        for item in records {
            let (record_type, record) = item?;
            summary.push(record_type, record);
        }
        Ok(summary)
    }

    /// Decode an archive, at most `limit` frames when given, and group it.
    pub fn tally<R: Read>(
        reader: ArchiveReader<R>,
        limit: Option<usize>,
    ) -> Result<Self, IrisError> {
        match limit {
            Some(limit) => ArchiveSummary::from_records(reader.take(limit)),
            None => ArchiveSummary::from_records(reader),
        }
    }

    fn push(&mut self, record_type: RecordType, record: Record) {
        match self.groups.iter_mut().find(|(t, _)| *t == record_type) {
            Some((_, records)) => records.push(record),
            None => self.groups.push((record_type, vec![record])),
        }
    }

    /// Number of records of `record_type`.
    pub fn count(&self, record_type: RecordType) -> usize {
        self.records_of(record_type).len()
    }

    /// Records of `record_type`, in archive order.
    pub fn records_of(&self, record_type: RecordType) -> &[Record] {
        self.groups
            .iter()
            .find(|(t, _)| *t == record_type)
            .map(|(_, records)| records.as_slice())
            .unwrap_or_default()
    }

    /// Total number of records.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// `(type, count)` pairs in order of first arrival.
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, usize)> + '_ {
        self.groups
            .iter()
            .map(|(record_type, records)| (*record_type, records.len()))
    }
}

impl std::fmt::Display for ArchiveSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![Cell::new("Record type"), Cell::new("Count")]);
        for (record_type, count) in self.iter() {
            table.add_row(Row::from(vec![
                Cell::new(record_type.name()),
                Cell::new(count).set_alignment(CellAlignment::Right),
            ]));
        }

        write!(f, "{table}")
    }
}
