//! # pepspace-core
//!
//! Engine for exploring combinatorial peptide sequence spaces.
//!
//! A dataset lists, one line per position, the amino acids allowed at that
//! position. The space is every peptide that picks one allowed symbol per
//! position. Spaces grow fast (20 positions of 20 symbols is about 10^26
//! sequences), so nothing here enumerates a space unless it has to, and all
//! size and rank arithmetic is done on arbitrary-precision integers.
//!
//! ## Main Components
//!
//! - **`SequenceSpace`**: validated, immutable per-position alphabets, with the
//!   exact total number of sequences
//! - **`Unranker`**: the k-th sequence computed straight from k
//! - **`RandomSampler`**: distinct uniform random sequences under a draw budget
//! - **`MotifMatcher`**: fixed-position search with `-` wildcards
//! - **`WildcardPatternMatcher`**: full-space search for `*`-separated segments
//!
//! ## Example
//!
//! ```rust
//! use pepspace_core::{SequenceSpace, Unranker, search_motif, search_pattern};
//!
//! let space: SequenceSpace = "A C\nG T".parse().unwrap();
//! assert_eq!(space.total().to_string(), "4");
//!
//! let unranker = Unranker::new(&space);
//! assert_eq!(unranker.first_n(2), vec!["AG", "AT"]);
//!
//! assert_eq!(search_motif(&space, "A-", 10).unwrap(), vec!["AG", "AT"]);
//! assert_eq!(search_pattern(&space, "*G*", 10).unwrap(), vec!["AG", "CG"]);
//! ```
//!
pub mod alphabet;
pub mod config;
pub mod errors;
pub mod export;
pub mod highlight;
pub mod motif;
pub mod pattern;
pub mod product;
pub mod properties;
pub mod sampling;
pub mod slot;
pub mod space;
pub mod unrank;
pub mod utils;
pub mod validate;

// re-export things
pub use alphabet::PositionAlphabet;
pub use config::ExplorerConfig;
pub use errors::*;
pub use motif::{Motif, MotifMatcher, search_motif};
pub use pattern::{
    ScanControl, ScanOutcome, ScanStatus, WildcardPattern, WildcardPatternMatcher, search_pattern,
};
pub use properties::{SequenceProperties, composition};
pub use sampling::RandomSampler;
pub use slot::SpaceSlot;
pub use space::{SequenceSpace, total_for};
pub use unrank::Unranker;

pub use num_bigint::BigUint;

// constants
pub mod consts {
    pub const DEFAULT_PRESENTATION_CEILING: usize = 1_000_000;
    pub const DEFAULT_COUNT: usize = 100;
    pub const DEFAULT_BUDGET_FACTOR: usize = 10;
}
