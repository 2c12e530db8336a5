//! Free-form wildcard patterns.
//!
//! A pattern such as `A*KR*W` is a list of literal segments (`A`, `KR`, `W`)
//! separated by gaps of any length. A sequence matches when the segments
//! occur in that order somewhere in it. The search is unanchored: `A*W`
//! matches `GAKWT`, not only sequences that start with `A` and end with `W`.
//!
//! Gaps can span any number of positions, so a pattern cannot be reduced to
//! fixed and free positions the way a motif can. The matcher walks the
//! whole space in rank order and tests every candidate; the scan takes a
//! [ScanControl] for cancellation and timeouts.
use std::fmt::{self, Display};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::alphabet::{PATTERN_GAP, is_amino_acid};
use crate::errors::PatternError;
use crate::space::SequenceSpace;

/// How many candidates are tested between two checks of the scan control.
pub const SCAN_POLL_INTERVAL: u64 = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WildcardPattern {
    segments: Vec<String>,
}

impl WildcardPattern {
    ///
    /// Parse a pattern into its literal segments. The input is uppercased;
    /// anything other than an amino acid or `*` is rejected. Runs of `*`
    /// collapse, so `A**C` is `A*C`.
    ///
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        for (index, c) in pattern.chars().enumerate() {
            let upper = c.to_ascii_uppercase();
            if !upper.is_ascii() || !(upper as u8 == PATTERN_GAP || is_amino_acid(upper as u8)) {
                return Err(PatternError::InvalidCharacter {
                    index,
                    character: c,
                });
            }
        }

        let segments = pattern
            .to_ascii_uppercase()
            .split(PATTERN_GAP as char)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();

        Ok(WildcardPattern { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    ///
    /// Locate the segments in order, each at its leftmost occurrence after
    /// the end of the previous one. Returns the start offset of every
    /// segment, or `None` if the sequence does not match.
    ///
    pub fn find(&self, sequence: &str) -> Option<Vec<usize>> {
        let mut offsets = Vec::with_capacity(self.segments.len());
        let mut from = 0;
        for segment in &self.segments {
            let start = from + sequence[from..].find(segment.as_str())?;
            offsets.push(start);
            from = start + segment.len();
        }
        Some(offsets)
    }

    pub fn is_match(&self, sequence: &str) -> bool {
        self.find(sequence).is_some()
    }
}

impl Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.segments.is_empty() {
            true => write!(f, "*"),
            false => write!(f, "*{}*", self.segments.join("*")),
        }
    }
}

///
/// Cooperative stop signal for long scans: a shared cancellation flag and
/// an optional wall-clock deadline. Cloning shares the flag.
///
#[derive(Clone, Debug, Default)]
pub struct ScanControl {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl ScanControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Ask every scan holding a clone of this control to stop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn poll(&self) -> Option<ScanStatus> {
        if self.is_cancelled() {
            return Some(ScanStatus::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ScanStatus::TimedOut),
            _ => None,
        }
    }
}

/// Why a scan stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStatus {
    /// Every sequence of the space was tested.
    Exhausted,
    /// `max_results` matches were found.
    LimitReached,
    Cancelled,
    TimedOut,
}

impl Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStatus::Exhausted => write!(f, "exhausted"),
            ScanStatus::LimitReached => write!(f, "limit reached"),
            ScanStatus::Cancelled => write!(f, "cancelled"),
            ScanStatus::TimedOut => write!(f, "timed out"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOutcome {
    pub sequences: Vec<String>,
    /// Number of candidates tested.
    pub examined: u64,
    pub status: ScanStatus,
}

impl ScanOutcome {
    /// True when the scan stopped before it could finish on its own.
    pub fn is_partial(&self) -> bool {
        matches!(self.status, ScanStatus::Cancelled | ScanStatus::TimedOut)
    }
}

pub struct WildcardPatternMatcher<'a> {
    space: &'a SequenceSpace,
    pattern: WildcardPattern,
}

impl<'a> WildcardPatternMatcher<'a> {
    pub fn new(space: &'a SequenceSpace, pattern: &str) -> Result<Self, PatternError> {
        let pattern = WildcardPattern::parse(pattern)?;
        Ok(WildcardPatternMatcher { space, pattern })
    }

    pub fn pattern(&self) -> &WildcardPattern {
        &self.pattern
    }

    /// Scan without a stop signal.
    pub fn search(&self, max_results: usize) -> Vec<String> {
        self.scan(max_results, &ScanControl::default()).sequences
    }

    ///
    /// Walk the full space in rank order and keep the first `max_results`
    /// matches. The control is polled every [SCAN_POLL_INTERVAL] candidates;
    /// a cancelled or timed-out scan keeps what it found.
    ///
    pub fn scan(&self, max_results: usize, control: &ScanControl) -> ScanOutcome {
        self.scan_with_progress(max_results, control, |_| {})
    }

    /// Like [WildcardPatternMatcher::scan], calling `progress` with the
    /// number of candidates tested so far at every poll.
    pub fn scan_with_progress<F>(
        &self,
        max_results: usize,
        control: &ScanControl,
        mut progress: F,
    ) -> ScanOutcome
    where
        F: FnMut(u64),
    {
        let mut sequences = Vec::new();
        let mut examined: u64 = 0;
        let mut status = ScanStatus::Exhausted;

        if max_results == 0 {
            status = ScanStatus::LimitReached;
        } else {
            for candidate in self.space.iter() {
                if examined % SCAN_POLL_INTERVAL == 0 {
                    progress(examined);
                    if let Some(stop) = control.poll() {
                        status = stop;
                        break;
                    }
                }
                examined += 1;

                if self.pattern.is_match(&candidate) {
                    sequences.push(candidate);
                    if sequences.len() >= max_results {
                        status = ScanStatus::LimitReached;
                        break;
                    }
                }
            }
        }

        debug!(
            "Pattern {} scan: {} candidates tested, {} matches, {}",
            self.pattern,
            examined,
            sequences.len(),
            status
        );
        if matches!(status, ScanStatus::Cancelled | ScanStatus::TimedOut) {
            info!(
                "Pattern scan {} after {} candidates with {} matches",
                status,
                examined,
                sequences.len()
            );
        }

        ScanOutcome {
            sequences,
            examined,
            status,
        }
    }
}

/// Convenience wrapper: parse `pattern` and collect up to `max_results`
/// matches with no stop signal.
pub fn search_pattern(
    space: &SequenceSpace,
    pattern: &str,
    max_results: usize,
) -> Result<Vec<String>, PatternError> {
    Ok(WildcardPatternMatcher::new(space, pattern)?.search(max_results))
}
