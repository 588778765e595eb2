//! speclint CLI: style and correctness checks for OpenAPI/Swagger documents.
//!
//! `speclint lint <spec>` loads the document and a YAML rule configuration,
//! runs every configured rule, and prints one line per violation. See
//! `speclint --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

/// Logs go to stderr so stdout stays clean for reports. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter: Box<dyn speclint_output::OutputFormatter> = if cli.json {
        Box::new(speclint_output::json::JsonFormatter)
    } else {
        Box::new(speclint_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Lint {
            spec,
            config,
            parallel,
        } => commands::lint::run(&*formatter, spec, config, parallel),
        Commands::Rules { config } => commands::rules::run(&*formatter, config),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
