use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::core::revcomp::reverse_complement;
use crate::core::sequence::SequenceStore;
use crate::core::types::{MapError, MapSummary};
use crate::matching::chunk::search_chunk;
use crate::matching::partition::{partition, WorkRange};
use crate::output::{format_presence_line, OutputSink};

/// Runs queries against a reference store on a fixed pool of worker threads.
///
/// The reference collection is partitioned once, and every query is fanned
/// out as one task per non-empty partition. Results are merged in partition
/// order, so the output for a given store, query list and worker count is
/// always identical.
pub struct SearchCoordinator<'a> {
    store: &'a SequenceStore,
    ranges: Vec<WorkRange>,
    pool: ThreadPool,
}

impl<'a> SearchCoordinator<'a> {
    /// Partition `store` and start `workers` search threads.
    ///
    /// # Errors
    ///
    /// Returns `MapError::Config` if `workers` is zero or the thread pool
    /// cannot be created.
    pub fn new(store: &'a SequenceStore, workers: usize) -> Result<Self, MapError> {
        let ranges = partition(store.len(), workers)?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("map-worker-{idx}"))
            .build()
            .map_err(|e| MapError::Config(format!("Failed to build worker pool: {e}")))?;

        debug!(
            "Partitioned {} references over {} workers: {:?}",
            store.len(),
            workers,
            ranges
                .iter()
                .map(|r| (r.start, r.end))
                .collect::<Vec<_>>()
        );

        Ok(Self {
            store,
            ranges,
            pool,
        })
    }

    /// Number of worker threads
    #[must_use]
    pub fn workers(&self) -> usize {
        self.ranges.len()
    }

    /// Partition layout used for every query
    #[must_use]
    pub fn ranges(&self) -> &[WorkRange] {
        &self.ranges
    }

    /// Names of all references containing `query` in either orientation.
    ///
    /// Names come in partition order, then ascending index order within a
    /// partition, regardless of which worker finishes first.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'a str> {
        let reverse_query = reverse_complement(query);
        let reverse_query = reverse_query.as_str();
        let store = self.store;

        // One slot per partition keeps the merge in submission order
        let mut chunk_hits: Vec<Vec<&'a str>> = vec![Vec::new(); self.ranges.len()];

        self.pool.scope(|scope| {
            for (hits, &range) in chunk_hits.iter_mut().zip(&self.ranges) {
                if range.is_empty() {
                    continue;
                }
                scope.spawn(move |_| {
                    *hits = search_chunk(query, reverse_query, store, range);
                });
            }
        });

        chunk_hits.concat()
    }

    /// Search every query in order and write a presence line for each hit.
    ///
    /// Queries with no hits produce no line. The sink is flushed once all
    /// queries are done.
    ///
    /// # Errors
    ///
    /// Returns `MapError::Io` as soon as the sink fails; remaining queries
    /// are not searched.
    pub fn run<I, Q, S>(&self, queries: I, sink: &mut S) -> Result<MapSummary, MapError>
    where
        I: IntoIterator<Item = Q>,
        Q: AsRef<str>,
        S: OutputSink + ?Sized,
    {
        let mut summary = MapSummary {
            references: self.store.len(),
            workers: self.workers(),
            ..MapSummary::default()
        };

        for query in queries {
            let query = query.as_ref();
            let hits = self.search(query);
            summary.queries += 1;

            if let Some(line) = format_presence_line(query, &hits) {
                sink.append_line(&line)?;
                summary.queries_with_hits += 1;
                summary.total_hits += hits.len();
            }
        }

        sink.finish()?;
        Ok(summary)
    }
}

/// Map every query against `store` with `workers` threads, writing to `sink`.
///
/// # Errors
///
/// Returns `MapError::Config` for a zero worker count (before any search),
/// or `MapError::Io` if the sink cannot be written.
pub fn map_queries<Q, S>(
    store: &SequenceStore,
    queries: &[Q],
    workers: usize,
    sink: &mut S,
) -> Result<MapSummary, MapError>
where
    Q: AsRef<str>,
    S: OutputSink + ?Sized,
{
    let coordinator = SearchCoordinator::new(store, workers)?;

    info!(
        "Calling {} unitigs against {} references with {} workers...",
        queries.len(),
        store.len(),
        workers
    );
    let summary = coordinator.run(queries, sink)?;
    info!(
        "Done: {} of {} queries found in at least one reference",
        summary.queries_with_hits, summary.queries
    );

    Ok(summary)
}
