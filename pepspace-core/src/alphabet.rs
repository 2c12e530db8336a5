use std::fmt::Display;

/// The twenty standard amino acids, in alphabetical order.
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Wildcard marker for a single position in a fixed-position motif.
pub const MOTIF_WILDCARD: u8 = b'-';

/// Gap marker in a free pattern: any span of zero or more symbols.
pub const PATTERN_GAP: u8 = b'*';

/// A lookup table flagging the uppercase ASCII letters that are
/// standard amino acids. Everything else, lowercase included, is `false`.
const AMINO_ACID_LOOKUP: [bool; 256] = {
    let mut arr = [false; 256];
    let mut i = 0;
    while i < AMINO_ACIDS.len() {
        arr[AMINO_ACIDS[i] as usize] = true;
        i += 1;
    }
    arr
};

/// Returns true if `symbol` is one of the twenty permitted amino acids.
/// Callers are expected to uppercase first.
#[inline]
pub fn is_amino_acid(symbol: u8) -> bool {
    AMINO_ACID_LOOKUP[symbol as usize]
}

///
/// The ordered, duplicate-free set of symbols allowed at one position.
///
/// Declaration order is kept as-is: it defines the digit order used when
/// ranking and enumerating the space.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionAlphabet {
    symbols: Vec<u8>,
}

impl PositionAlphabet {
    /// Builds an alphabet without checking it. Validation lives in
    /// [crate::validate], which is the only place that calls this.
    pub(crate) fn new_unchecked(symbols: Vec<u8>) -> Self {
        PositionAlphabet { symbols }
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a validated alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Index of `symbol` in declaration order.
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.symbols.get(index).copied()
    }
}

impl Display for PositionAlphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for &symbol in &self.symbols {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol as char)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_lookup_matches_alphabet() {
        let permitted: Vec<u8> = (0..=255u8).filter(|&b| is_amino_acid(b)).collect();
        assert_eq!(permitted, AMINO_ACIDS.to_vec());
    }

    #[rstest]
    #[case(b'B')]
    #[case(b'a')]
    #[case(b'-')]
    #[case(b'*')]
    #[case(b'X')]
    fn test_rejects_non_amino_acids(#[case] symbol: u8) {
        assert!(!is_amino_acid(symbol));
    }

    #[rstest]
    fn test_alphabet_keeps_declaration_order() {
        let alphabet = PositionAlphabet::new_unchecked(b"WAC".to_vec());
        assert_eq!(alphabet.index_of(b'W'), Some(0));
        assert_eq!(alphabet.index_of(b'C'), Some(2));
        assert_eq!(alphabet.index_of(b'G'), None);
        assert_eq!(alphabet.to_string(), "W, A, C");
    }
}
