//! Marks the characters of a result that satisfied a search constraint, for
//! display. Rendering is left to the caller through the open/close markers.
use crate::alphabet::MOTIF_WILDCARD;
use crate::pattern::WildcardPattern;

/// Positions whose motif character is fixed (not `-`).
pub fn motif_positions(sequence: &str, motif: &str) -> Vec<usize> {
    sequence
        .chars()
        .zip(motif.chars())
        .enumerate()
        .filter(|(_, (_, m))| *m != MOTIF_WILDCARD as char)
        .map(|(i, _)| i)
        .collect()
}

///
/// Positions covered by the pattern's literal segments at their leftmost
/// in-order match. Empty when the sequence does not match.
///
pub fn pattern_positions(sequence: &str, pattern: &WildcardPattern) -> Vec<usize> {
    let Some(offsets) = pattern.find(sequence) else {
        return Vec::new();
    };

    offsets
        .iter()
        .zip(pattern.segments())
        .flat_map(|(&start, segment)| start..start + segment.len())
        .collect()
}

///
/// Wrap each marked character of `sequence` in `open`/`close`.
///
/// # Arguments
/// - sequence: the sequence to render
/// - positions: character indices to mark, in any order
/// - open: text written before a marked character
/// - close: text written after a marked character
pub fn render(sequence: &str, positions: &[usize], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(sequence.len() + positions.len() * (open.len() + close.len()));
    for (i, c) in sequence.chars().enumerate() {
        if positions.contains(&i) {
            out.push_str(open);
            out.push(c);
            out.push_str(close);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_motif_positions() {
        assert_eq!(motif_positions("AKRW", "A-R-"), vec![0, 2]);
        assert!(motif_positions("AKRW", "----").is_empty());
    }

    #[rstest]
    fn test_pattern_positions() {
        let pattern = WildcardPattern::parse("K*RW").unwrap();
        assert_eq!(pattern_positions("AKGRW", &pattern), vec![1, 3, 4]);
        assert!(pattern_positions("AGGG", &pattern).is_empty());
    }

    #[rstest]
    fn test_render() {
        assert_eq!(render("AKRW", &[0, 2], "[", "]"), "[A]K[R]W");
        assert_eq!(render("AKRW", &[], "[", "]"), "AKRW");
    }
}
