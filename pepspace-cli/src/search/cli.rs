use clap::{Arg, Command, arg, value_parser};

use crate::common::{config_arg, count_arg, dataset_arg, output_arg};

pub const MOTIF_CMD: &str = "motif";
pub const SEARCH_CMD: &str = "search";

fn highlight_arg() -> Arg {
    arg!(--highlight "Mark the characters that satisfied the query with [ ] on stdout")
}

pub fn create_motif_cli() -> Command {
    Command::new(MOTIF_CMD)
        .about("Find sequences matching a fixed-position motif, '-' standing for any amino acid.")
        .arg_required_else_help(true)
        .arg(dataset_arg())
        .arg(
            Arg::new("motif")
                .required(true)
                .help("One character per position, e.g. A--R for A first and R fourth"),
        )
        .arg(count_arg("max-results", "Maximum number of sequences to return"))
        .arg(highlight_arg())
        .arg(output_arg())
        .arg(config_arg())
}

pub fn create_search_cli() -> Command {
    Command::new(SEARCH_CMD)
        .about("Find sequences containing a free pattern, '*' standing for any run of amino acids.")
        .arg_required_else_help(true)
        .arg(dataset_arg())
        .arg(
            Arg::new("pattern")
                .required(true)
                .help("Literal segments separated by '*', e.g. A*KR*W. Matching is unanchored"),
        )
        .arg(count_arg("max-results", "Maximum number of sequences to return"))
        .arg(
            arg!(--timeout <SECONDS>)
                .value_parser(value_parser!(u64))
                .help("Stop the scan after this many seconds (overrides the config)"),
        )
        .arg(highlight_arg())
        .arg(output_arg())
        .arg(config_arg())
}
