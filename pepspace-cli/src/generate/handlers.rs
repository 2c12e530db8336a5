use anyhow::Result;
use clap::ArgMatches;
use log::{info, warn};

use pepspace_core::{RandomSampler, Unranker};

use crate::common::{emit, load_config, load_space, resolve_count};

pub fn run_first(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let space = load_space(matches)?;
    let count = resolve_count(matches, "count", &config, space.total());

    let sequences = Unranker::new(&space).first_n(count);
    info!("Generated the first {} sequences", sequences.len());

    emit(matches, &sequences, &sequences)
}

pub fn run_random(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let space = load_space(matches)?;
    let count = resolve_count(matches, "count", &config, space.total());

    let seed = matches.get_one::<u64>("seed").copied().or(config.seed);
    let mut sampler = RandomSampler::new(seed).with_budget_factor(config.budget_factor);
    let sequences = sampler.sample(&space, count);

    if sequences.len() < count {
        warn!(
            "Only {} distinct sequences found out of {} requested within {} draws",
            sequences.len(),
            count,
            count.saturating_mul(config.budget_factor)
        );
    } else {
        info!("Generated {} random sequences", sequences.len());
    }

    emit(matches, &sequences, &sequences)
}
