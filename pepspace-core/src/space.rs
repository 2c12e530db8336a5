use std::fmt::{self, Display};

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use crate::alphabet::PositionAlphabet;
use crate::errors::SequenceError;
use crate::product::Odometer;

///
/// SequenceSpace struct, the Cartesian product of one alphabet per peptide
/// position.
///
/// A space is only ever built from a validated dataset (see
/// [crate::validate]), holds at least one position and never changes after
/// construction. A new dataset means a new space.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceSpace {
    positions: Vec<PositionAlphabet>,
    total: BigUint,
}

/// Total number of sequences spanned by `positions`: the product of the
/// alphabet sizes, exact at any magnitude.
pub fn total_for(positions: &[PositionAlphabet]) -> BigUint {
    positions
        .iter()
        .fold(BigUint::one(), |acc, alphabet| acc * alphabet.len())
}

impl SequenceSpace {
    pub(crate) fn from_validated(positions: Vec<PositionAlphabet>) -> Self {
        let total = total_for(&positions);
        SequenceSpace { positions, total }
    }

    pub fn positions(&self) -> &[PositionAlphabet] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<&PositionAlphabet> {
        self.positions.get(index)
    }

    /// Peptide length, i.e. the number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: a validated space has at least one position.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of sequences in the space.
    pub fn total(&self) -> &BigUint {
        &self.total
    }

    /// The total as a `usize`, when it fits.
    pub fn total_usize(&self) -> Option<usize> {
        self.total.to_usize()
    }

    ///
    /// Check that `sequence` belongs to the space: same length, and every
    /// character allowed at its position. Reports the first offending
    /// position (1-based).
    ///
    pub fn check_member(&self, sequence: &str) -> Result<(), SequenceError> {
        let found = sequence.chars().count();
        if found != self.len() {
            return Err(SequenceError::Length {
                expected: self.len(),
                found,
            });
        }

        for (i, (c, alphabet)) in sequence.chars().zip(&self.positions).enumerate() {
            if !c.is_ascii() || !alphabet.contains(c as u8) {
                return Err(SequenceError::InvalidSymbol {
                    position: i + 1,
                    symbol: c,
                    allowed: alphabet.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn contains(&self, sequence: &str) -> bool {
        self.check_member(sequence).is_ok()
    }

    /// Walk every sequence in rank order (rightmost position varying
    /// fastest).
    pub fn iter(&self) -> SpaceIter<'_> {
        let radices = self.positions.iter().map(PositionAlphabet::len).collect();
        SpaceIter {
            space: self,
            odometer: Odometer::new(radices),
        }
    }

    /// Assemble the sequence picking `indices[i]` from position `i`.
    pub(crate) fn compose(&self, indices: &[usize]) -> String {
        self.positions
            .iter()
            .zip(indices)
            .map(|(alphabet, &i)| alphabet.symbols()[i] as char)
            .collect()
    }
}

impl Display for SequenceSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alphabet) in self.positions.iter().enumerate() {
            writeln!(
                f,
                "Position {} ({} options): {}",
                i + 1,
                alphabet.len(),
                alphabet
            )?;
        }
        Ok(())
    }
}

pub struct SpaceIter<'a> {
    space: &'a SequenceSpace,
    odometer: Odometer,
}

impl Iterator for SpaceIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let sequence = self.space.compose(self.odometer.digits()?);
        self.odometer.advance();
        Some(sequence)
    }
}

impl<'a> IntoIterator for &'a SequenceSpace {
    type Item = String;
    type IntoIter = SpaceIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
