//! Core data types for exact string mapping.
//!
//! - [`Sequence`]: a named reference made of one or more FASTA records
//! - [`SequenceStore`]: the immutable reference collection shared by search workers
//! - [`reverse_complement`]: nucleotide reverse complement used for strand-agnostic search
//! - [`MapError`], [`MapSummary`]: run-level error and result types

pub mod revcomp;
pub mod sequence;
pub mod types;

pub use revcomp::reverse_complement;
pub use sequence::{Sequence, SequenceStore};
pub use types::{MapError, MapSummary};
