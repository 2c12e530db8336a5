use clap::{Command, arg, value_parser};

use crate::common::{config_arg, count_arg, dataset_arg, output_arg};

pub const FIRST_CMD: &str = "first";
pub const RANDOM_CMD: &str = "random";

pub fn create_first_cli() -> Command {
    Command::new(FIRST_CMD)
        .about("List the first sequences of the space in declared order.")
        .arg_required_else_help(true)
        .arg(dataset_arg())
        .arg(count_arg("count", "Number of sequences to list").short('n'))
        .arg(output_arg())
        .arg(config_arg())
}

pub fn create_random_cli() -> Command {
    Command::new(RANDOM_CMD)
        .about("Draw distinct sequences uniformly at random.")
        .arg_required_else_help(true)
        .arg(dataset_arg())
        .arg(count_arg("count", "Number of sequences to draw").short('n'))
        .arg(
            arg!(--seed <SEED>)
                .value_parser(value_parser!(u64))
                .help("Seed for reproducible draws (overrides the config)"),
        )
        .arg(output_arg())
        .arg(config_arg())
}
