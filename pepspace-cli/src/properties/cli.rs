use clap::{Arg, Command};

use crate::common::dataset_arg;

pub const PROPERTIES_CMD: &str = "properties";

pub fn create_properties_cli() -> Command {
    Command::new(PROPERTIES_CMD)
        .about("Check that a sequence belongs to the space and count its amino acid categories.")
        .arg_required_else_help(true)
        .arg(dataset_arg())
        .arg(
            Arg::new("sequence")
                .required(true)
                .help("A sequence with one amino acid per position"),
        )
}
