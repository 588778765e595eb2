use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "speclint",
    version,
    about = "Style and correctness linter for OpenAPI/Swagger documents"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log rule progress to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Lint a Swagger 2.0 document (JSON or YAML)
    Lint {
        /// Path to the document
        spec: PathBuf,
        /// Rule configuration file [default: ./speclint.yaml when present]
        #[arg(long, short, env = "SPECLINT_CONFIG")]
        config: Option<PathBuf>,
        /// Run rules concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// List the built-in rules and whether the configuration enables them
    Rules {
        /// Rule configuration file [default: ./speclint.yaml when present]
        #[arg(long, short, env = "SPECLINT_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
