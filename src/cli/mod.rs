//! CLI module - Command-line interface for the renewal service
//!
//! This module provides a structured CLI using clap for argument parsing.

use clap::{Parser, Subcommand};

/// Bus pass renewal service
#[derive(Parser)]
#[command(name = "buspass")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the web server (default)
    #[command(alias = "s")]
    Serve,

    /// Write a default config.toml in the current directory
    InitConfig,

    /// Create the database and apply migrations, then exit
    Migrate,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default() {
        let cli = Cli::parse_from(["buspass"]);
        assert_eq!(cli.command(), &Commands::Serve);
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::parse_from(["buspass", "init-config"]);
        assert_eq!(cli.command(), &Commands::InitConfig);

        let cli = Cli::parse_from(["buspass", "migrate"]);
        assert_eq!(cli.command(), &Commands::Migrate);
    }
}
