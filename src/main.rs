use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use iris_archive::{ArchiveReader, ArchiveSummary, Record, RecordType};
use log::error;

/// Decode an IRIS telemetry archive and count its records by type.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Path of the archive file
    archive: Utf8PathBuf,

    /// Decode at most this many frames
    #[arg(long)]
    count: Option<usize>,

    /// Also print the SUMMARY record of the archive
    #[arg(long)]
    show_summary: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let summary = match ArchiveReader::open(&args.archive)
        .and_then(|reader| ArchiveSummary::tally(reader, args.count))
    {
        Ok(summary) => summary,
        Err(err) => {
            error!("failed to decode {}: {err}", args.archive);
            eprintln!("ERROR: {}: {err}", args.archive);
            return ExitCode::FAILURE;
        }
    };

    if args.show_summary {
        for record in summary.records_of(RecordType::Summary) {
            if let Record::Summary(file_summary) = record {
                println!("{file_summary}");
            }
        }
    }

    println!("{summary}");
    println!("Total records: {}", summary.total());
    ExitCode::SUCCESS
}
