use thiserror::Error;

/// Failures raised while turning a raw dataset into a [crate::SequenceSpace].
///
/// Validation stops at the first violation, so exactly one of these is
/// reported per dataset. Line numbers are 1-based and count only non-blank
/// lines, which makes them equal to the position number.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Empty dataset: no positions found")]
    EmptyDataset,

    #[error("Line {line}: no amino acid found")]
    EmptyPosition { line: usize },

    #[error("Line {line}: '{token}' is not a valid amino acid (1 letter required only)")]
    InvalidTokenLength { line: usize, token: String },

    #[error("Line {line}: '{token}' is not an amino acid")]
    InvalidSymbol { line: usize, token: String },

    #[error("Line {line}: duplicate amino acid '{symbol}' for the same position")]
    DuplicateSymbol { line: usize, symbol: char },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum MotifError {
    #[error("The motif must contain exactly {expected} characters, found {found}")]
    Length { expected: usize, found: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum PatternError {
    #[error("Invalid character '{character}' at index {index} of the pattern")]
    InvalidCharacter { index: usize, character: char },
}

/// Membership failures for a sequence checked against a space.
#[derive(Error, Debug, PartialEq)]
pub enum SequenceError {
    #[error("The sequence must contain exactly {expected} characters, found {found}")]
    Length { expected: usize, found: usize },

    #[error("'{symbol}' is not valid in position {position}. Options: {allowed}")]
    InvalidSymbol {
        position: usize,
        symbol: char,
        allowed: String,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum RankError {
    #[error("Rank {rank} is out of range for a space of {total} sequences")]
    OutOfRange { rank: String, total: String },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
