use clap::Command;

use crate::common::{config_arg, dataset_arg};

pub const INFO_CMD: &str = "info";

pub fn create_info_cli() -> Command {
    Command::new(INFO_CMD)
        .about("Validate a dataset and show the size of its sequence space.")
        .arg_required_else_help(true)
        .arg(dataset_arg())
        .arg(config_arg())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_accepts_config() {
        let matches = create_info_cli()
            .try_get_matches_from(["info", "positions.txt", "--config", "limits.toml"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("config").map(String::as_str),
            Some("limits.toml")
        );
        assert_eq!(
            matches.get_one::<String>("dataset").map(String::as_str),
            Some("positions.txt")
        );
    }
}
