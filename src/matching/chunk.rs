//! Search of one partition of the reference collection.

use crate::core::sequence::SequenceStore;
use crate::matching::partition::WorkRange;

/// Names of the references in `range` that contain `query` or `reverse_query`.
///
/// References are tested in ascending index order and names are returned in
/// that order. The store is only read, so disjoint ranges can be searched
/// concurrently.
///
/// # Panics
///
/// Panics if `range` extends past the end of `store`.
#[must_use]
pub fn search_chunk<'s>(
    query: &str,
    reverse_query: &str,
    store: &'s SequenceStore,
    range: WorkRange,
) -> Vec<&'s str> {
    range
        .indices()
        .filter(|&idx| store.contains(idx, query) || store.contains(idx, reverse_query))
        .map(|idx| store.name(idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::revcomp::reverse_complement;
    use crate::core::sequence::Sequence;

    fn make_store() -> SequenceStore {
        SequenceStore::from_sequences(vec![
            Sequence::new("ref1", "ACGTACGT"),
            Sequence::new("ref2", "TTTT"),
            Sequence::new("ref3", "GGACGTCC"),
            Sequence::new("ref4", "CCCC"),
        ])
    }

    #[test]
    fn test_forward_match() {
        let store = make_store();
        let hits = search_chunk("ACGT", "ACGT", &store, WorkRange::new(0, 4));
        assert_eq!(hits, vec!["ref1", "ref3"]);
    }

    #[test]
    fn test_reverse_match() {
        let store = make_store();
        let reverse = reverse_complement("AAAA");
        let hits = search_chunk("AAAA", &reverse, &store, WorkRange::new(0, 4));
        assert_eq!(hits, vec!["ref2"]);
    }

    #[test]
    fn test_range_restricts_search() {
        let store = make_store();
        let hits = search_chunk("ACGT", "ACGT", &store, WorkRange::new(1, 3));
        assert_eq!(hits, vec!["ref3"]);
    }

    #[test]
    fn test_empty_range() {
        let store = make_store();
        assert!(search_chunk("ACGT", "ACGT", &store, WorkRange::new(2, 2)).is_empty());
    }

    #[test]
    fn test_no_match() {
        let store = make_store();
        let reverse = reverse_complement("GATTACA");
        let hits = search_chunk("GATTACA", &reverse, &store, WorkRange::new(0, 4));
        assert!(hits.is_empty());
    }
}
