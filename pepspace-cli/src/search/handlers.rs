use std::time::Duration;

use anyhow::Result;
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use pepspace_core::highlight::{motif_positions, pattern_positions, render};
use pepspace_core::{MotifMatcher, ScanControl, WildcardPatternMatcher};

use crate::common::{emit, load_config, load_space, resolve_count};

const HIGHLIGHT_OPEN: &str = "[";
const HIGHLIGHT_CLOSE: &str = "]";

pub fn run_motif(matches: &ArgMatches) -> Result<()> {
    let motif = matches
        .get_one::<String>("motif")
        .expect("A motif is required.");

    let config = load_config(matches)?;
    let space = load_space(matches)?;
    let max_results = resolve_count(matches, "max-results", &config, space.total());

    let matcher = MotifMatcher::new(&space, motif)?;
    let problems = matcher.motif().check(&space);
    if !problems.is_empty() {
        warn!("Invalid motif: no sequence can match");
        for problem in &problems {
            warn!("{}", problem);
        }
    }

    let sequences = matcher.search(max_results);
    info!("{} sequence(s) found", sequences.len());

    let normalized = matcher.motif().to_string();
    let display: Vec<String> = match matches.get_flag("highlight") {
        true => sequences
            .iter()
            .map(|s| {
                render(
                    s,
                    &motif_positions(s, &normalized),
                    HIGHLIGHT_OPEN,
                    HIGHLIGHT_CLOSE,
                )
            })
            .collect(),
        false => sequences.clone(),
    };

    emit(matches, &sequences, &display)
}

pub fn run_search(matches: &ArgMatches) -> Result<()> {
    let pattern = matches
        .get_one::<String>("pattern")
        .expect("A pattern is required.");

    let config = load_config(matches)?;
    let space = load_space(matches)?;
    let max_results = resolve_count(matches, "max-results", &config, space.total());

    let matcher = WildcardPatternMatcher::new(&space, pattern)?;

    let timeout = matches
        .get_one::<u64>("timeout")
        .map(|secs| Duration::from_secs(*secs))
        .or(config.scan_timeout());
    let control = match timeout {
        Some(timeout) => ScanControl::new().with_timeout(timeout),
        None => ScanControl::new(),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {pos} candidates tested [{elapsed_precise}]")?,
    );
    let outcome = matcher.scan_with_progress(max_results, &control, |examined| {
        pb.set_position(examined);
    });
    pb.finish_and_clear();

    if outcome.is_partial() {
        warn!(
            "Scan {} after {} candidates; results are incomplete",
            outcome.status, outcome.examined
        );
    }
    info!(
        "{} sequence(s) found among {} candidates",
        outcome.sequences.len(),
        outcome.examined
    );

    let display: Vec<String> = match matches.get_flag("highlight") {
        true => outcome
            .sequences
            .iter()
            .map(|s| {
                render(
                    s,
                    &pattern_positions(s, matcher.pattern()),
                    HIGHLIGHT_OPEN,
                    HIGHLIGHT_CLOSE,
                )
            })
            .collect(),
        false => outcome.sequences.clone(),
    };

    emit(matches, &outcome.sequences, &display)
}
