mod common;
mod generate;
mod info;
mod properties;
mod search;

use anyhow::Result;
use clap::{Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "pepspace";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Explore combinatorial peptide sequence spaces: size them, list them, sample them and search them.")
        .subcommand_required(true)
        .arg(arg!(-v --verbose "Log debug details to stderr").global(true))
        .subcommand(info::cli::create_info_cli())
        .subcommand(generate::cli::create_first_cli())
        .subcommand(generate::cli::create_random_cli())
        .subcommand(search::cli::create_motif_cli())
        .subcommand(search::cli::create_search_cli())
        .subcommand(properties::cli::create_properties_cli())
}

fn init_logging(verbose: bool) {
    let default_filter = match verbose {
        true => "debug",
        false => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // INFO
        //
        Some((info::cli::INFO_CMD, matches)) => {
            info::handlers::run_info(matches)?;
        }

        //
        // GENERATION
        //
        Some((generate::cli::FIRST_CMD, matches)) => {
            generate::handlers::run_first(matches)?;
        }
        Some((generate::cli::RANDOM_CMD, matches)) => {
            generate::handlers::run_random(matches)?;
        }

        //
        // SEARCH
        //
        Some((search::cli::MOTIF_CMD, matches)) => {
            search::handlers::run_motif(matches)?;
        }
        Some((search::cli::SEARCH_CMD, matches)) => {
            search::handlers::run_search(matches)?;
        }

        //
        // PROPERTIES
        //
        Some((properties::cli::PROPERTIES_CMD, matches)) => {
            properties::handlers::run_properties(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
