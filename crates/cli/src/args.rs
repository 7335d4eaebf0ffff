use clap::{Parser, Subcommand};

use atlas_config::ConfigArgs;
use atlas_countries::CountriesArgs;

use crate::log_args::LogArgs;

#[derive(Debug, Parser)]
#[clap(name = "atlas", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    pub(crate) logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(about = "Atlas fetches, searches and displays the list of countries from a REST endpoint.")]
pub(crate) enum Subcommands {
    #[clap(name = "countries", about = "Fetch and display the list of countries")]
    Countries(CountriesArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_countries_subcommand() {
        let args = Arguments::try_parse_from([
            "atlas",
            "countries",
            "--search",
            "united",
            "--code",
            "GB",
            "--json",
            "-vvv",
        ])
        .expect("failed to parse arguments");

        match args.sub {
            Subcommands::Countries(cmd) => {
                assert_eq!(cmd.search, "united");
                assert_eq!(cmd.code.as_deref(), Some("GB"));
                assert!(cmd.json);
                assert!(cmd.url.is_empty());
                assert_eq!(cmd.timeout, None);
                assert_eq!(cmd.output, "print");
            }
            other => panic!("expected countries subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_subcommand() {
        let args = Arguments::try_parse_from(["atlas", "config", "timeout", "5"])
            .expect("failed to parse arguments");
        assert!(matches!(args.sub, Subcommands::Config(_)));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Arguments::try_parse_from(["atlas"]).is_err());
    }
}
