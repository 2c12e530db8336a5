//! Direct addressing of sequences by rank.
//!
//! Ranks follow declared-order lexicographic order: rank 0 picks the first
//! declared symbol everywhere, and the rightmost position varies fastest.
//! A rank is decomposed into per-position indices with mixed-radix place
//! values, so the k-th sequence is built in O(positions) bignum steps no
//! matter how large k is.
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::errors::{RankError, SequenceError};
use crate::space::SequenceSpace;

pub struct Unranker<'a> {
    space: &'a SequenceSpace,
    // place value of each position: product of the sizes of all later positions
    weights: Vec<BigUint>,
}

impl<'a> Unranker<'a> {
    pub fn new(space: &'a SequenceSpace) -> Self {
        let mut weights = vec![BigUint::one(); space.len()];
        for i in (0..space.len().saturating_sub(1)).rev() {
            weights[i] = &weights[i + 1] * space.positions()[i + 1].len();
        }
        Unranker { space, weights }
    }

    pub fn weights(&self) -> &[BigUint] {
        &self.weights
    }

    ///
    /// Return the sequence at `rank`.
    ///
    /// # Arguments
    /// - rank: index in `[0, total)`
    pub fn unrank(&self, rank: &BigUint) -> Result<String, RankError> {
        if rank >= self.space.total() {
            return Err(RankError::OutOfRange {
                rank: rank.to_string(),
                total: self.space.total().to_string(),
            });
        }

        let mut remaining = rank.clone();
        let mut indices = Vec::with_capacity(self.space.len());
        for weight in &self.weights {
            // the quotient is always below this position's alphabet size
            let index = (&remaining / weight).to_usize().unwrap_or_default();
            remaining %= weight;
            indices.push(index);
        }

        Ok(self.space.compose(&indices))
    }

    /// Inverse of [Unranker::unrank] for members of the space.
    pub fn rank(&self, sequence: &str) -> Result<BigUint, SequenceError> {
        self.space.check_member(sequence)?;

        let mut rank = BigUint::zero();
        for ((symbol, alphabet), weight) in sequence
            .bytes()
            .zip(self.space.positions())
            .zip(&self.weights)
        {
            // membership was checked above
            let index = alphabet.index_of(symbol).unwrap_or_default();
            rank += weight * index;
        }

        Ok(rank)
    }

    ///
    /// The first `n` sequences, ranks `0..n`, each computed directly from
    /// its rank. `n` is clamped to the size of the space.
    ///
    pub fn first_n(&self, n: usize) -> Vec<String> {
        let n = match self.space.total_usize() {
            Some(total) => n.min(total),
            None => n,
        };

        let mut sequences = Vec::with_capacity(n);
        let mut rank = BigUint::zero();
        for _ in 0..n {
            // rank < total by the clamp above
            if let Ok(sequence) = self.unrank(&rank) {
                sequences.push(sequence);
            }
            rank += 1u32;
        }

        sequences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn space() -> SequenceSpace {
        "A C\nG T".parse().unwrap()
    }

    #[rstest]
    fn test_unrank_first_and_last_of_two_positions(space: SequenceSpace) {
        let unranker = Unranker::new(&space);
        assert_eq!(unranker.unrank(&BigUint::zero()).unwrap(), "AG");
        assert_eq!(unranker.unrank(&BigUint::from(3u32)).unwrap(), "CT");
    }

    #[rstest]
    fn test_unrank_out_of_range(space: SequenceSpace) {
        let unranker = Unranker::new(&space);
        let result = unranker.unrank(&BigUint::from(4u32));
        assert_eq!(
            result,
            Err(RankError::OutOfRange {
                rank: "4".to_string(),
                total: "4".to_string()
            })
        );
    }

    #[rstest]
    fn test_weights() {
        let space: SequenceSpace = "A C\nD E F\nG H I K".parse().unwrap();
        let unranker = Unranker::new(&space);
        let weights: Vec<u32> = unranker
            .weights()
            .iter()
            .map(|w| w.to_u32().unwrap())
            .collect();
        assert_eq!(weights, vec![12, 4, 1]);
    }

    #[rstest]
    fn test_declared_order_not_sorted() {
        let space: SequenceSpace = "W A\nT G".parse().unwrap();
        let unranker = Unranker::new(&space);
        assert_eq!(unranker.first_n(4), vec!["WT", "WG", "AT", "AG"]);
    }

    #[rstest]
    fn test_first_n_clamps_to_total(space: SequenceSpace) {
        let unranker = Unranker::new(&space);
        assert_eq!(unranker.first_n(10), vec!["AG", "AT", "CG", "CT"]);
        assert!(unranker.first_n(0).is_empty());
    }

    #[rstest]
    fn test_first_n_matches_enumeration() {
        let space: SequenceSpace = "A C D\nE\nF G\nH I K L".parse().unwrap();
        let unranker = Unranker::new(&space);
        let enumerated: Vec<String> = space.iter().collect();
        assert_eq!(unranker.first_n(100), enumerated);
    }

    #[rstest]
    fn test_rank_roundtrip_huge_space() {
        let line: Vec<String> = crate::alphabet::AMINO_ACIDS
            .iter()
            .map(|&b| (b as char).to_string())
            .collect();
        let space: SequenceSpace = vec![line.join(" "); 20].join("\n").parse().unwrap();
        let unranker = Unranker::new(&space);

        let last = space.total().clone() - 1u32;
        assert_eq!(unranker.unrank(&last).unwrap(), "Y".repeat(20));
        assert_eq!(unranker.rank(&"Y".repeat(20)).unwrap(), last);

        let k: BigUint = "73786976294838206464123".parse().unwrap();
        let sequence = unranker.unrank(&k).unwrap();
        assert_eq!(unranker.rank(&sequence).unwrap(), k);
    }

    #[rstest]
    fn test_rank_rejects_non_members(space: SequenceSpace) {
        let unranker = Unranker::new(&space);
        assert!(unranker.rank("GA").is_err());
    }
}
