//! Readers for the inputs of a mapping run.
//!
//! - **FASTA files**: reference sequences, plain or gzip/bgzip compressed
//! - **Reference lists**: one `<fasta path> [<name>]` pair per line
//! - **Query files**: one k-mer or unitig per line
//!
//! ## Example
//!
//! ```rust,no_run
//! use map_strings::parsing::{queries::read_queries, reference_list::read_reference_list};
//! use map_strings::SequenceStore;
//! use std::path::Path;
//!
//! let entries = read_reference_list(Path::new("references.txt")).unwrap();
//! let store = SequenceStore::load_all(&entries).unwrap();
//! let queries = read_queries(Path::new("unitigs.txt")).unwrap();
//! ```

use thiserror::Error;

pub mod fasta;
pub mod queries;
pub mod reference_list;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}
