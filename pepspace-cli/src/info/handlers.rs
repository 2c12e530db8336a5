use anyhow::Result;
use clap::ArgMatches;

use crate::common::{group_digits, load_config, load_space};

pub fn run_info(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let space = load_space(matches)?;

    println!("Total number of sequences: {}", group_digits(space.total()));
    println!("Peptide length: {} amino acids", space.len());
    println!(
        "Sequences per query: up to {} ({} by default)",
        config.max_count(space.total()),
        config.default_count_for(space.total())
    );
    print!("{}", space);

    Ok(())
}
