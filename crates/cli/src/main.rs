//! `predprey`: simulate the Lotka-Volterra model or search its coefficients.
//!
//! ```text
//! predprey simulate [--config FILE] [--output PATH] [--plot]
//! predprey search [--config FILE] [--max-evaluations N]
//! ```
//!
//! Logging goes to stderr and honors `RUST_LOG` (default `info`).

mod config;
mod search;
mod simulate;

use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "predprey")]
#[command(about = "Simulate the Lotka-Volterra predator-prey model and search for calm parameters")]
#[command(version)]
struct Cli {
    /// TOML file overriding the built-in settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Integrate one parameter set and write the trajectory table
    Simulate {
        /// Output file (overrides `simulate.output`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the trajectory in a window (requires the `plot` feature)
        #[arg(long)]
        plot: bool,
    },

    /// Grid search the four coefficients for the smallest oscillation
    Search {
        /// Keep the best of the first N grid points; point N+1 is evaluated
        /// to trigger the stop and then discarded
        #[arg(long, value_name = "N")]
        max_evaluations: Option<NonZeroUsize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Simulate { output, plot } => simulate::run(&config.simulate, output, plot),
        Command::Search { max_evaluations } => search::run(&config.search, max_evaluations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn max_evaluations_help_mentions_the_discarded_point() {
        let command = Cli::command();
        let search = command
            .find_subcommand("search")
            .expect("search subcommand");
        let arg = search
            .get_arguments()
            .find(|arg| arg.get_id() == "max_evaluations")
            .expect("max_evaluations argument");
        let help = arg.get_help().expect("help text").to_string();

        assert!(help.contains("first N grid points"), "{help}");
        assert!(help.contains("N+1"), "{help}");
    }

    #[test]
    fn max_evaluations_must_be_positive() {
        assert!(Cli::try_parse_from(["predprey", "search", "--max-evaluations", "0"]).is_err());

        let cli = Cli::try_parse_from(["predprey", "search", "--max-evaluations", "3"])
            .expect("valid arguments");
        assert!(matches!(
            cli.command,
            Command::Search { max_evaluations: Some(n) } if n.get() == 3
        ));
    }
}
