//! End-to-end checks over small and very large spaces: dataset file in,
//! sizing, ranking, sampling and both search languages out.
//!
//! Unit tests for each component live next to the code in src/.

use std::collections::HashSet;
use std::path::Path;

use num_bigint::BigUint;
use num_traits::Zero;
use pretty_assertions::assert_eq;
use rstest::*;

use pepspace_core::{
    DatasetError, MotifError, RandomSampler, SequenceSpace, Unranker, WildcardPattern,
    search_motif, search_pattern, total_for,
};

#[fixture]
fn space() -> SequenceSpace {
    SequenceSpace::try_from(Path::new("../tests/data/positions.txt")).unwrap()
}

#[fixture]
fn huge_space() -> SequenceSpace {
    let line = "A C D E F G H I K L M N P Q R S T V W Y";
    vec![line; 20].join("\n").parse().unwrap()
}

#[rstest]
fn test_total_is_exact_product(space: SequenceSpace, huge_space: SequenceSpace) {
    assert_eq!(space.total(), &BigUint::from(24u32));
    assert_eq!(total_for(space.positions()), BigUint::from(24u32));

    let expected: BigUint = "104857600000000000000000000".parse().unwrap();
    assert_eq!(huge_space.total(), &expected);
    assert!(huge_space.total() > &BigUint::from(u64::MAX));
}

#[rstest]
fn test_unrank_is_a_bijection(space: SequenceSpace) {
    let unranker = Unranker::new(&space);
    let mut seen = HashSet::new();

    let mut k = BigUint::zero();
    while &k < space.total() {
        let sequence = unranker.unrank(&k).unwrap();
        assert!(space.contains(&sequence));
        assert_eq!(unranker.rank(&sequence).unwrap(), k);
        assert!(seen.insert(sequence));
        k += 1u32;
    }

    assert_eq!(seen.len(), 24);
    assert!(unranker.unrank(space.total()).is_err());
}

#[rstest]
fn test_unrank_far_into_huge_space(huge_space: SequenceSpace) {
    let unranker = Unranker::new(&huge_space);
    let k: BigUint = "98765432109876543210987654".parse().unwrap();
    let sequence = unranker.unrank(&k).unwrap();
    assert_eq!(sequence.len(), 20);
    assert_eq!(unranker.rank(&sequence).unwrap(), k);

    assert_eq!(unranker.first_n(3), vec![
        "A".repeat(20),
        format!("{}C", "A".repeat(19)),
        format!("{}D", "A".repeat(19)),
    ]);
}

#[rstest]
fn test_sampling_huge_space(huge_space: SequenceSpace) {
    let mut sampler = RandomSampler::new(Some(2024));
    let sequences = sampler.sample(&huge_space, 500);

    // collisions among 10^26 sequences are not a practical concern
    assert_eq!(sequences.len(), 500);
    assert!(sequences.iter().all(|s| huge_space.contains(s)));
    let unique: HashSet<&String> = sequences.iter().collect();
    assert_eq!(unique.len(), 500);
}

#[rstest]
fn test_sampling_whole_space(space: SequenceSpace) {
    let mut sampler = RandomSampler::new(Some(5)).with_budget_factor(500);
    let sequences = sampler.sample(&space, 24);
    assert_eq!(sequences.len(), 24);
}

#[rstest]
fn test_motif_on_file_space(space: SequenceSpace) {
    // positions: [A C] [D E F] [G] [H I K L]
    let matches = search_motif(&space, "c-g-", 100).unwrap();
    assert_eq!(matches.len(), 12);
    assert!(matches.iter().all(|s| s.starts_with('C') && &s[2..3] == "G"));
    assert_eq!(matches[0], "CDGH");
    assert_eq!(matches[1], "CDGI");

    assert_eq!(search_motif(&space, "CEGK", 100).unwrap(), vec!["CEGK"]);
    assert!(search_motif(&space, "CEAK", 100).unwrap().is_empty());
    assert_eq!(
        search_motif(&space, "CE", 100),
        Err(MotifError::Length {
            expected: 4,
            found: 2
        })
    );
}

#[rstest]
fn test_pattern_on_file_space(space: SequenceSpace) {
    let matches = search_pattern(&space, "D*K", 100).unwrap();
    assert_eq!(matches, vec!["ADGK", "CDGK"]);

    let pattern = WildcardPattern::parse("EG").unwrap();
    let matches = search_pattern(&space, "EG", 3).unwrap();
    assert_eq!(matches.len(), 3);
    assert!(matches.iter().all(|s| pattern.is_match(s)));
}

#[rstest]
fn test_pattern_scan_on_huge_space_stops_at_limit(huge_space: SequenceSpace) {
    let matches = search_pattern(&huge_space, "*C*W", 5).unwrap();
    let tail = "A".repeat(17);
    assert_eq!(matches[0], format!("{}CW", "A".repeat(18)));
    assert_eq!(matches.len(), 5);
    assert!(matches.iter().all(|s| s.starts_with(&tail)));
}

#[rstest]
fn test_duplicate_file_rejected() {
    let result = SequenceSpace::try_from(Path::new("../tests/data/duplicate.txt"));
    assert!(matches!(
        result,
        Err(DatasetError::DuplicateSymbol {
            line: 3,
            symbol: 'A'
        })
    ));
}
