use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, arg, value_parser};
use log::info;

use pepspace_core::export::{write_csv_file, write_table};
use pepspace_core::{BigUint, ExplorerConfig, SequenceSpace};

pub fn dataset_arg() -> Arg {
    Arg::new("dataset")
        .required(true)
        .help("Dataset file: one line of allowed amino acids per position (plain or .gz)")
}

pub fn config_arg() -> Arg {
    arg!(--config <CONFIG>).help("TOML file with query limits and defaults")
}

pub fn output_arg() -> Arg {
    arg!(-o --output <OUTPUT>).help("Write the results to this CSV file instead of stdout")
}

pub fn count_arg(long: &'static str, help: &'static str) -> Arg {
    Arg::new(long)
        .long(long)
        .value_parser(value_parser!(usize))
        .help(help)
}

pub fn load_space(matches: &ArgMatches) -> Result<SequenceSpace> {
    let dataset = matches
        .get_one::<String>("dataset")
        .expect("A path to a dataset is required.");

    let space = SequenceSpace::try_from(Path::new(dataset))
        .with_context(|| format!("Invalid dataset: {}", dataset))?;

    info!(
        "Loaded {}: {} positions, {} sequences",
        dataset,
        space.len(),
        group_digits(space.total())
    );

    Ok(space)
}

pub fn load_config(matches: &ArgMatches) -> Result<ExplorerConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => ExplorerConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path)),
        None => Ok(ExplorerConfig::default()),
    }
}

/// The count asked for on the command line, resolved against the config
/// limits and the size of the space.
pub fn resolve_count(
    matches: &ArgMatches,
    name: &str,
    config: &ExplorerConfig,
    total: &BigUint,
) -> usize {
    let requested = matches.get_one::<usize>(name).copied();
    let count = config.resolve_count(requested, total);
    if let Some(requested) = requested {
        if requested > count {
            info!("Request for {} sequences capped at {}", requested, count);
        }
    }
    count
}

///
/// Write results: CSV when `--output` is given, otherwise a numbered
/// listing on stdout. `display` holds the stdout rendering of each sequence
/// (e.g. highlighted) and must line up with `sequences`.
///
pub fn emit(matches: &ArgMatches, sequences: &[String], display: &[String]) -> Result<()> {
    match matches.get_one::<String>("output") {
        Some(output) => {
            write_csv_file(Path::new(output), sequences)
                .with_context(|| format!("Failed to write {}", output))?;
            info!("Wrote {} sequences to {}", sequences.len(), output);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_table(&mut writer, display)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// `1234567` -> `1,234,567`
pub fn group_digits(value: &BigUint) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(&BigUint::from(4u32)), "4");
        assert_eq!(group_digits(&BigUint::from(1000u32)), "1,000");
        assert_eq!(group_digits(&BigUint::from(1234567u32)), "1,234,567");
        assert_eq!(
            group_digits(&BigUint::from(20u32).pow(20)),
            "104,857,600,000,000,000,000,000,000"
        );
    }
}
