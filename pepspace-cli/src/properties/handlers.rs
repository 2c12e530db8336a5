use anyhow::Result;
use clap::ArgMatches;

use pepspace_core::{SequenceProperties, composition};

use crate::common::load_space;

pub fn run_properties(matches: &ArgMatches) -> Result<()> {
    let sequence = matches
        .get_one::<String>("sequence")
        .expect("A sequence is required.")
        .to_ascii_uppercase();

    let space = load_space(matches)?;
    space.check_member(&sequence)?;

    let props = SequenceProperties::of(&sequence);
    println!("Sequence: {}", sequence);
    println!("Hydrophobic amino acids: {}/{}", props.hydrophobic, props.length);
    println!("Charged amino acids: {}/{}", props.charged, props.length);
    println!("Polar amino acids: {}/{}", props.polar, props.length);
    println!("Glycines (G): {}", props.glycine);

    println!();
    println!("Amino acid\tOccurrence");
    for (symbol, count) in composition(&sequence) {
        println!("{}\t{}", symbol, count);
    }

    Ok(())
}
