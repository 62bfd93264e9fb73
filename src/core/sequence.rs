use std::path::Path;

use tracing::debug;

use crate::parsing::fasta::parse_fasta_records;
use crate::parsing::reference_list::ReferenceEntry;
use crate::parsing::ParseError;

/// A named reference sequence loaded from one FASTA file.
///
/// A file may hold several records (contigs, plasmids). Each record is kept
/// separately so that a query never matches across a record boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Display name written to the presence list
    pub name: String,

    /// Uppercased record sequences, in file order
    pub records: Vec<String>,
}

impl Sequence {
    /// Create a sequence with a single record.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: vec![content.into()],
        }
    }

    /// Create a sequence from several records.
    pub fn with_records(name: impl Into<String>, records: Vec<String>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Load a sequence from a FASTA file (plain or gzip-compressed).
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
    /// if a record is malformed, or `ParseError::InvalidFormat` if the file has
    /// no records.
    pub fn load(name: impl Into<String>, path: &Path) -> Result<Self, ParseError> {
        let records = parse_fasta_records(path)?;
        Ok(Self::with_records(name, records))
    }

    /// Exact, case-sensitive containment within any single record.
    ///
    /// A query longer than every record is never contained.
    #[must_use]
    pub fn contains(&self, query: &str) -> bool {
        self.records.iter().any(|record| record.contains(query))
    }

    /// Total number of bases over all records
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.records.iter().map(String::len).sum()
    }
}

/// Immutable collection of reference sequences shared by all search workers.
#[derive(Debug, Clone, Default)]
pub struct SequenceStore {
    sequences: Vec<Sequence>,
}

impl SequenceStore {
    pub fn from_sequences(sequences: Vec<Sequence>) -> Self {
        Self { sequences }
    }

    /// Load every entry of a reference list, in list order.
    ///
    /// # Errors
    ///
    /// Fails on the first reference that cannot be read or parsed.
    pub fn load_all(entries: &[ReferenceEntry]) -> Result<Self, ParseError> {
        let mut sequences = Vec::with_capacity(entries.len());

        for entry in entries {
            let sequence = Sequence::load(entry.name.clone(), &entry.path)?;
            debug!(
                "Loaded {} ({} records, {} bp) from {}",
                sequence.name,
                sequence.records.len(),
                sequence.total_length(),
                entry.path.display()
            );
            sequences.push(sequence);
        }

        Ok(Self::from_sequences(sequences))
    }

    /// Whether sequence `index` contains `query`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn contains(&self, index: usize, query: &str) -> bool {
        self.sequences[index].contains(query)
    }

    /// Display name of sequence `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn name(&self, index: usize) -> &str {
        &self.sequences[index].name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.iter()
    }
}
