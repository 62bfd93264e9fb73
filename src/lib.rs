//! # map-strings
//!
//! Report which reference sequences contain each of a set of k-mers or unitigs.
//!
//! Association pipelines produce many short sequence elements (k-mers,
//! unitigs) and need to know, for each one, which genomes it occurs in.
//! `map-strings` loads a set of reference FASTA files into memory and tests
//! every query for an exact occurrence on either strand, writing a presence
//! list with one line per query that was found:
//!
//! ```text
//! ACGTTGCA | sample_1:1 sample_7:1
//! ```
//!
//! ## Features
//!
//! - **Strand-agnostic**: each query is searched together with its reverse complement
//! - **Parallel**: references are split over a fixed pool of worker threads
//! - **Deterministic**: output order depends only on the inputs and the worker count
//! - **Compressed input**: gzip and bgzip FASTA files are read directly
//!
//! ## Example
//!
//! ```rust,no_run
//! use map_strings::parsing::{queries::read_queries, reference_list::read_reference_list};
//! use map_strings::output::PresenceWriter;
//! use map_strings::{map_queries, SequenceStore};
//! use std::path::Path;
//!
//! let entries = read_reference_list(Path::new("references.txt")).unwrap();
//! let store = SequenceStore::load_all(&entries).unwrap();
//! let queries = read_queries(Path::new("unitigs.txt")).unwrap();
//!
//! let mut sink = PresenceWriter::create(Path::new("presence.txt")).unwrap();
//! let summary = map_queries(&store, &queries, 4, &mut sink).unwrap();
//! println!("{} queries found", summary.queries_with_hits);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Reference sequences, reverse complement, and run-level types
//! - [`matching`]: Partitioning and the parallel search engine
//! - [`parsing`]: FASTA, reference list, and query file readers
//! - [`output`]: Presence list formatting and sinks
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod output;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::revcomp::reverse_complement;
pub use core::sequence::{Sequence, SequenceStore};
pub use core::types::{MapError, MapSummary};
pub use matching::engine::{map_queries, SearchCoordinator};
pub use matching::partition::{partition, WorkRange};
