use serde::Serialize;
use thiserror::Error;

use crate::parsing::ParseError;

/// Errors that abort a mapping run
#[derive(Error, Debug)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Counters describing one completed mapping run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MapSummary {
    /// Number of reference sequences searched
    pub references: usize,

    /// Worker threads used for the search
    pub workers: usize,

    /// Number of queries processed
    pub queries: usize,

    /// Queries found in at least one reference (lines written)
    pub queries_with_hits: usize,

    /// Sum over all queries of the number of references containing them
    pub total_hits: usize,
}

impl MapSummary {
    /// Fraction of queries with at least one hit, 0.0 when no queries were run
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        if self.queries == 0 {
            0.0
        } else {
            self.queries_with_hits as f64 / self.queries as f64
        }
    }
}
