use std::collections::BTreeMap;

pub const HYDROPHOBIC: &[u8] = b"ALPVI";
pub const CHARGED: &[u8] = b"DEKRH";
pub const POLAR: &[u8] = b"STNQEDKRH";
pub const GLYCINE: u8 = b'G';

/// Simple per-category counts for one sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceProperties {
    pub length: usize,
    pub hydrophobic: usize,
    pub charged: usize,
    pub polar: usize,
    pub glycine: usize,
}

impl SequenceProperties {
    /// Count the categories of `sequence`. A symbol can fall in more than
    /// one category (charged residues are also polar).
    pub fn of(sequence: &str) -> Self {
        let mut props = SequenceProperties::default();
        for symbol in sequence.bytes() {
            props.length += 1;
            if HYDROPHOBIC.contains(&symbol) {
                props.hydrophobic += 1;
            }
            if CHARGED.contains(&symbol) {
                props.charged += 1;
            }
            if POLAR.contains(&symbol) {
                props.polar += 1;
            }
            if symbol == GLYCINE {
                props.glycine += 1;
            }
        }
        props
    }
}

///
/// Occurrences of each symbol in `sequence`, most frequent first; ties are
/// broken alphabetically.
///
pub fn composition(sequence: &str) -> Vec<(char, usize)> {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in sequence.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut counts: Vec<(char, usize)> = counts.into_iter().collect();
    // stable sort keeps the alphabetical order from the BTreeMap for ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
