use std::collections::BTreeSet;

use map_strings::*;
use proptest::prelude::*;

fn nucleotides(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), min..max)
        .prop_map(|bases| String::from_utf8(bases).unwrap())
}

proptest! {
    #[test]
    fn prop_partition_covers_range(total in 0usize..500, workers in 1usize..64) {
        let ranges = partition(total, workers).unwrap();
        prop_assert_eq!(ranges.len(), workers);

        let mut expected_start = 0;
        for range in &ranges {
            prop_assert_eq!(range.start, expected_start);
            prop_assert!(range.end >= range.start);
            expected_start = range.end;
        }
        prop_assert_eq!(expected_start, total);
    }

    #[test]
    fn prop_partition_balanced(total in 0usize..500, workers in 1usize..64) {
        let ranges = partition(total, workers).unwrap();
        let sizes: Vec<usize> = ranges.iter().map(WorkRange::len).collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(max - min <= 1);
        // Larger ranges come first
        prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn prop_reverse_complement_involution(seq in nucleotides(0, 200)) {
        prop_assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
    }

    #[test]
    fn prop_reverse_complement_any_text(seq in ".{0,50}") {
        prop_assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
    }

    #[test]
    fn prop_match_set_independent_of_workers(
        contents in prop::collection::vec(nucleotides(0, 40), 0..12),
        queries in prop::collection::vec(nucleotides(1, 5), 1..8),
        workers in 2usize..6,
    ) {
        let store = SequenceStore::from_sequences(
            contents
                .iter()
                .enumerate()
                .map(|(idx, seq)| Sequence::new(format!("ref{idx}"), seq.clone()))
                .collect(),
        );

        let single = SearchCoordinator::new(&store, 1).unwrap();
        let multi = SearchCoordinator::new(&store, workers).unwrap();

        for query in &queries {
            let expected: BTreeSet<&str> = single.search(query).into_iter().collect();
            let actual: BTreeSet<&str> = multi.search(query).into_iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
