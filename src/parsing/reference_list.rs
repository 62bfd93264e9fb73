//! Parser for reference list files.
//!
//! One reference per line, whitespace separated:
//!
//! ```text
//! # path                  name
//! assemblies/s1.fa.gz     sample_1
//! assemblies/s2.fasta
//! ```
//!
//! When the name column is missing the file stem is used, with compression
//! and FASTA extensions removed (`s2.fasta` -> `s2`). Blank lines and lines
//! starting with `#` are skipped.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::parsing::fasta::fasta_stem;
use crate::parsing::ParseError;

/// A reference to load: its display name and FASTA location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub name: String,
    pub path: PathBuf,
}

impl ReferenceEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Entry named after its file
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = default_reference_name(&path);
        Self { name, path }
    }
}

/// Derive a display name from a FASTA path
///
/// FASTA files are named by [`fasta_stem`]; any other path keeps its full
/// file name.
#[must_use]
pub fn default_reference_name(path: &Path) -> String {
    if let Some(stem) = fasta_stem(path) {
        return stem.to_string();
    }

    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Parse a reference list file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if a line has more than two columns or the
/// list holds no references.
pub fn read_reference_list(path: &Path) -> Result<Vec<ReferenceEntry>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_reference_list(BufReader::new(file))
}

/// Parse reference list text from any reader
///
/// # Errors
///
/// See [`read_reference_list`].
pub fn parse_reference_list<R: BufRead>(reader: R) -> Result<Vec<ReferenceEntry>, ParseError> {
    let mut entries = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let entry = match fields.as_slice() {
            [path] => ReferenceEntry::from_path(*path),
            [path, name] => ReferenceEntry::new(*name, *path),
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "Line {}: expected '<path> [<name>]', found {} columns",
                    line_num + 1,
                    fields.len()
                )));
            }
        };
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No references found in reference list".to_string(),
        ));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_list() {
        let text = "# header\nrefs/a.fa\tstrain_a\n\nrefs/b.fasta.gz\n";
        let entries = parse_reference_list(text.as_bytes()).unwrap();

        assert_eq!(
            entries,
            vec![
                ReferenceEntry::new("strain_a", "refs/a.fa"),
                ReferenceEntry::new("b", "refs/b.fasta.gz"),
            ]
        );
    }

    #[test]
    fn test_too_many_columns() {
        let result = parse_reference_list("a.fa a extra\n".as_bytes());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_empty_list() {
        let result = parse_reference_list("# only a comment\n\n".as_bytes());
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_default_reference_name() {
        assert_eq!(default_reference_name(Path::new("/x/y/sample.fa")), "sample");
        assert_eq!(default_reference_name(Path::new("sample.fna.bgz")), "sample");
        assert_eq!(default_reference_name(Path::new("sample.contigs")), "sample.contigs");
        assert_eq!(default_reference_name(Path::new("sample.txt.gz")), "sample.txt.gz");
    }
}
