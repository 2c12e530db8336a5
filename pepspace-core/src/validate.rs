//! Dataset validation: raw text in, [SequenceSpace] out.
//!
//! A dataset has one line per position. Each line is tokenized into maximal
//! runs of ASCII alphanumeric characters, so `A C`, `A,C`, `A;C` and `A\tC`
//! all declare the same alphabet. Blank lines are ignored.
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::alphabet::{PositionAlphabet, is_amino_acid};
use crate::errors::DatasetError;
use crate::space::SequenceSpace;
use crate::utils::get_dynamic_reader;

/// Split a line into its alphanumeric tokens.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
}

///
/// Validate a single position line.
///
/// Token length and symbol checks run over the whole line before the
/// duplicate check, so a line such as `A A XY` reports the bad token first.
///
/// # Arguments
/// - line_number: 1-based position number used in error messages
/// - line: the raw line
pub fn validate_line(line_number: usize, line: &str) -> Result<PositionAlphabet, DatasetError> {
    let tokens: Vec<String> = tokenize(line).map(|t| t.to_ascii_uppercase()).collect();
    validate_tokens(line_number, tokens)
}

fn validate_tokens(line_number: usize, tokens: Vec<String>) -> Result<PositionAlphabet, DatasetError> {
    if tokens.is_empty() {
        return Err(DatasetError::EmptyPosition { line: line_number });
    }

    for token in &tokens {
        if token.chars().count() != 1 {
            return Err(DatasetError::InvalidTokenLength {
                line: line_number,
                token: token.clone(),
            });
        }
        if token.len() != 1 || !is_amino_acid(token.as_bytes()[0]) {
            return Err(DatasetError::InvalidSymbol {
                line: line_number,
                token: token.clone(),
            });
        }
    }

    let mut symbols: Vec<u8> = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let symbol = token.as_bytes()[0];
        if symbols.contains(&symbol) {
            return Err(DatasetError::DuplicateSymbol {
                line: line_number,
                symbol: symbol as char,
            });
        }
        symbols.push(symbol);
    }

    Ok(PositionAlphabet::new_unchecked(symbols))
}

///
/// Validate an iterator of raw lines, stopping at the first violation.
///
pub fn validate_lines<I, S>(lines: I) -> Result<SequenceSpace, DatasetError>
where
    I: IntoIterator<Item = Result<S, std::io::Error>>,
    S: AsRef<str>,
{
    let mut positions: Vec<PositionAlphabet> = Vec::new();

    for line in lines {
        let line = line?;
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        positions.push(validate_line(positions.len() + 1, line)?);
    }

    if positions.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let space = SequenceSpace::from_validated(positions);
    debug!(
        "Validated dataset: {} positions, {} sequences",
        space.len(),
        space.total()
    );

    Ok(space)
}

impl SequenceSpace {
    /// Read and validate a dataset from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DatasetError> {
        validate_lines(reader.lines())
    }

    ///
    /// Build a space from per-position symbol lists, e.g. when the
    /// alphabets come from code rather than a file.
    ///
    /// Symbols are uppercased and go through the same checks as a dataset
    /// line. An empty list is an empty position, not a skipped line.
    ///
    pub fn try_from_positions(positions: Vec<Vec<u8>>) -> Result<Self, DatasetError> {
        if positions.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }

        let alphabets = positions
            .into_iter()
            .enumerate()
            .map(|(i, symbols)| {
                let tokens = symbols
                    .iter()
                    .map(|&s| (s.to_ascii_uppercase() as char).to_string())
                    .collect();
                validate_tokens(i + 1, tokens)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SequenceSpace::from_validated(alphabets))
    }
}

impl FromStr for SequenceSpace {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_lines(s.lines().map(Ok::<&str, std::io::Error>))
    }
}

impl TryFrom<&Path> for SequenceSpace {
    type Error = DatasetError;

    ///
    /// Create a new [SequenceSpace] from a dataset file.
    ///
    /// # Arguments:
    /// - value: path to the dataset on disk, plain text or gzip'd.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)?;
        SequenceSpace::from_reader(reader)
    }
}

impl TryFrom<&str> for SequenceSpace {
    type Error = DatasetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SequenceSpace::try_from(Path::new(value))
    }
}
