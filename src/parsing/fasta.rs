//! Parser for FASTA files using noodles.
//!
//! Reads every record of a reference FASTA into memory as uppercase text.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::parsing::ParseError;

const FASTA_EXTENSIONS: [&str; 3] = ["fa", "fasta", "fna"];
const COMPRESSED_EXTENSIONS: [&str; 2] = ["gz", "bgz"];

fn has_extension(ext: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| ext.eq_ignore_ascii_case(c))
}

/// File name of a FASTA path with its compression and FASTA extensions removed.
///
/// Returns `None` when the file name does not end in a FASTA extension,
/// optionally followed by `.gz` or `.bgz`.
///
/// # Examples
///
/// ```
/// use map_strings::parsing::fasta::fasta_stem;
/// use std::path::Path;
///
/// assert_eq!(fasta_stem(Path::new("refs/sample_1.fna.gz")), Some("sample_1"));
/// assert_eq!(fasta_stem(Path::new("sample.bam")), None);
/// ```
#[must_use]
pub fn fasta_stem(path: &Path) -> Option<&str> {
    let file_name = path.file_name()?.to_str()?;
    let (mut stem, mut ext) = file_name.rsplit_once('.')?;

    if has_extension(ext, &COMPRESSED_EXTENSIONS) {
        (stem, ext) = stem.rsplit_once('.')?;
    }

    has_extension(ext, &FASTA_EXTENSIONS).then_some(stem)
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| has_extension(ext, &COMPRESSED_EXTENSIONS))
}

/// Read all record sequences from a FASTA file, uppercased, in file order.
///
/// A record with no sequence lines yields an empty string, which contains
/// nothing when searched.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, or `ParseError::InvalidFormat` if no records are found.
pub fn parse_fasta_records(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = std::fs::File::open(path)?;

    let records = if is_gzipped(path) {
        // bgzip is a series of gzip members, so a multi-member decoder covers both
        let reader = BufReader::new(MultiGzDecoder::new(file));
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))?
    } else {
        let reader = BufReader::new(file);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))?
    };

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "No sequences found in FASTA file {}",
            path.display()
        )));
    }

    Ok(records)
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<String>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let uppercase: Vec<u8> = record
            .sequence()
            .as_ref()
            .iter()
            .map(u8::to_ascii_uppercase)
            .collect();

        // Content is unvalidated; stray non-UTF-8 bytes become U+FFFD and never match
        records.push(String::from_utf8_lossy(&uppercase).into_owned());
    }

    Ok(records)
}
