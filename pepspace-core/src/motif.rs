use std::fmt::{self, Display};

use crate::alphabet::MOTIF_WILDCARD;
use crate::errors::MotifError;
use crate::product::Odometer;
use crate::space::SequenceSpace;

///
/// A fixed-position motif: one character per position, either a symbol that
/// must appear there or the `-` wildcard.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Motif {
    chars: Vec<char>,
}

/// A fixed motif character that its position does not allow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidFixedSymbol {
    /// 1-based
    pub position: usize,
    pub symbol: char,
    pub allowed: String,
}

impl Display for InvalidFixedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {}: '{}' is not valid at this position. Options available: {}",
            self.position, self.symbol, self.allowed
        )
    }
}

impl Motif {
    ///
    /// Parse a motif for `space`. The motif is uppercased; its length must
    /// equal the number of positions.
    ///
    pub fn parse(motif: &str, space: &SequenceSpace) -> Result<Self, MotifError> {
        let chars: Vec<char> = motif.chars().map(|c| c.to_ascii_uppercase()).collect();
        if chars.len() != space.len() {
            return Err(MotifError::Length {
                expected: space.len(),
                found: chars.len(),
            });
        }
        Ok(Motif { chars })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn is_wildcard(&self, index: usize) -> bool {
        self.chars
            .get(index)
            .is_some_and(|&c| c == MOTIF_WILDCARD as char)
    }

    /// Indices of the wildcard positions, in order.
    pub fn free_positions(&self) -> Vec<usize> {
        (0..self.chars.len()).filter(|&i| self.is_wildcard(i)).collect()
    }

    ///
    /// Every fixed character its position does not allow. An empty list means
    /// the motif is satisfiable.
    ///
    pub fn check(&self, space: &SequenceSpace) -> Vec<InvalidFixedSymbol> {
        self.chars
            .iter()
            .zip(space.positions())
            .enumerate()
            .filter(|(i, _)| !self.is_wildcard(*i))
            .filter(|(_, (c, alphabet))| !c.is_ascii() || !alphabet.contains(**c as u8))
            .map(|(i, (c, alphabet))| InvalidFixedSymbol {
                position: i + 1,
                symbol: *c,
                allowed: alphabet.to_string(),
            })
            .collect()
    }

    pub fn is_satisfiable(&self, space: &SequenceSpace) -> bool {
        self.check(space).is_empty()
    }
}

impl Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.chars.iter().collect();
        f.write_str(&s)
    }
}

///
/// Fixed-position motif search.
///
/// Only the wildcard positions are enumerated: the fixed ones are copied
/// into a skeleton once, so the work is proportional to the product of the
/// free alphabets, never to the whole space.
///
pub struct MotifMatcher<'a> {
    space: &'a SequenceSpace,
    motif: Motif,
}

impl<'a> MotifMatcher<'a> {
    pub fn new(space: &'a SequenceSpace, motif: &str) -> Result<Self, MotifError> {
        let motif = Motif::parse(motif, space)?;
        Ok(MotifMatcher { space, motif })
    }

    pub fn motif(&self) -> &Motif {
        &self.motif
    }

    ///
    /// Lazily yield every matching sequence. The free positions are walked
    /// with the rightmost one varying fastest. An unsatisfiable motif yields
    /// nothing.
    ///
    pub fn matches(&self) -> MotifMatches<'a> {
        if !self.motif.is_satisfiable(self.space) {
            return MotifMatches {
                space: self.space,
                skeleton: Vec::new(),
                free: Vec::new(),
                odometer: None,
            };
        }

        let free = self.motif.free_positions();
        let radices = free
            .iter()
            .map(|&i| self.space.positions()[i].len())
            .collect();
        // every fixed char is an ASCII symbol once the motif is satisfiable
        let skeleton = self.motif.chars.iter().map(|&c| c as u8).collect();

        MotifMatches {
            space: self.space,
            skeleton,
            free,
            odometer: Some(Odometer::new(radices)),
        }
    }

    /// Collect at most `max_results` matches.
    pub fn search(&self, max_results: usize) -> Vec<String> {
        self.matches().take(max_results).collect()
    }
}

pub struct MotifMatches<'a> {
    space: &'a SequenceSpace,
    skeleton: Vec<u8>,
    free: Vec<usize>,
    odometer: Option<Odometer>,
}

impl Iterator for MotifMatches<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let odometer = self.odometer.as_mut()?;
        let digits = odometer.digits()?;

        let mut sequence = self.skeleton.clone();
        for (&position, &digit) in self.free.iter().zip(digits) {
            sequence[position] = self.space.positions()[position].symbols()[digit];
        }
        odometer.advance();

        // skeleton and alphabets are ASCII
        Some(sequence.into_iter().map(char::from).collect())
    }
}

/// Convenience wrapper: parse `motif` and collect up to `max_results` matches.
pub fn search_motif(
    space: &SequenceSpace,
    motif: &str,
    max_results: usize,
) -> Result<Vec<String>, MotifError> {
    Ok(MotifMatcher::new(space, motif)?.search(max_results))
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

    #[fixture]
    fn wide_space() -> SequenceSpace {
        "A C\nD E F\nG\nH I".parse().unwrap()
    }

    #[rstest]
    fn test_fixed_first_position_wildcard_second(space: SequenceSpace) {
        assert_eq!(search_motif(&space, "A-", 100).unwrap(), vec!["AG", "AT"]);
    }

    #[rstest]
    fn test_lowercase_motif(space: SequenceSpace) {
        assert_eq!(search_motif(&space, "-t", 100).unwrap(), vec!["AT", "CT"]);
    }

    #[rstest]
    #[case("A")]
    #[case("A--")]
    #[case("")]
    fn test_length_error(space: SequenceSpace, #[case] motif: &str) {
        let result = search_motif(&space, motif, 10);
        assert_eq!(
            result,
            Err(MotifError::Length {
                expected: 2,
                found: motif.len()
            })
        );
    }

    #[rstest]
    fn test_fully_fixed_valid(space: SequenceSpace) {
        assert_eq!(search_motif(&space, "CT", 10).unwrap(), vec!["CT"]);
    }

    #[rstest]
    #[case("CA")]
    #[case("W-")]
    #[case("-é")]
    fn test_unsatisfiable_is_empty(space: SequenceSpace, #[case] motif: &str) {
        assert!(search_motif(&space, motif, 10).unwrap().is_empty());
    }

    #[rstest]
    fn test_check_lists_every_invalid_position(wide_space: SequenceSpace) {
        let motif = Motif::parse("WD-K", &wide_space).unwrap();
        let problems = motif.check(&wide_space);
        assert_eq!(
            problems,
            vec![
                InvalidFixedSymbol {
                    position: 1,
                    symbol: 'W',
                    allowed: "A, C".to_string()
                },
                InvalidFixedSymbol {
                    position: 4,
                    symbol: 'K',
                    allowed: "H, I".to_string()
                },
            ]
        );
        assert_eq!(
            problems[0].to_string(),
            "Position 1: 'W' is not valid at this position. Options available: A, C"
        );
    }

    #[rstest]
    fn test_rightmost_free_position_varies_fastest(wide_space: SequenceSpace) {
        let matches = search_motif(&wide_space, "-E--", 100).unwrap();
        assert_eq!(matches, vec!["AEGH", "AEGI", "CEGH", "CEGI"]);
    }

    #[rstest]
    fn test_all_wildcards_enumerates_space(wide_space: SequenceSpace) {
        let matches = search_motif(&wide_space, "----", 100).unwrap();
        let all: Vec<String> = wide_space.iter().collect();
        assert_eq!(matches, all);
    }

    #[rstest]
    fn test_max_results_respected(wide_space: SequenceSpace) {
        let matches = search_motif(&wide_space, "----", 5).unwrap();
        assert_eq!(matches.len(), 5);
        assert_eq!(matches[0], "ADGH");
    }

    #[rstest]
    fn test_results_agree_on_fixed_positions(wide_space: SequenceSpace) {
        let matcher = MotifMatcher::new(&wide_space, "C--I").unwrap();
        for sequence in matcher.search(100) {
            assert!(sequence.starts_with('C'));
            assert!(sequence.ends_with('I'));
            assert!(wide_space.contains(&sequence));
        }
        assert_eq!(matcher.search(100).len(), 3);
    }
}
