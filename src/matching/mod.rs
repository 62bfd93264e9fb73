//! Parallel exact search of queries against reference sequences.
//!
//! This module provides the search engine:
//!
//! - [`partition`](partition::partition): splits the references into balanced, contiguous ranges
//! - [`search_chunk`](chunk::search_chunk): forward and reverse-complement search over one range
//! - [`SearchCoordinator`]: fans each query out over a reusable worker pool and merges results
//!
//! ## Ordering
//!
//! The `N` references are split into one range per worker; the first
//! `N % workers` ranges take one extra reference. For each query, every
//! non-empty range is searched as a separate task and the matching names are
//! concatenated in range order, never in completion order. Output is
//! therefore byte-identical across runs with the same worker count. Changing
//! the worker count can change the order of names on a line, but not which
//! names appear.
//!
//! ## Example
//!
//! ```rust
//! use map_strings::{Sequence, SequenceStore, SearchCoordinator};
//!
//! let store = SequenceStore::from_sequences(vec![
//!     Sequence::new("ref1", "ACGTACGT"),
//!     Sequence::new("ref2", "TTTT"),
//! ]);
//!
//! let coordinator = SearchCoordinator::new(&store, 2).unwrap();
//! let mut lines: Vec<String> = Vec::new();
//! coordinator.run(["ACGT", "AAAA", "GGGG"], &mut lines).unwrap();
//!
//! assert_eq!(lines, vec!["ACGT | ref1:1", "AAAA | ref2:1"]);
//! ```

pub mod chunk;
pub mod engine;
pub mod partition;

pub use engine::{map_queries, SearchCoordinator};
pub use partition::WorkRange;
