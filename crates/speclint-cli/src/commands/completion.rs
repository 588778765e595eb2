use std::io::Write;

use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};

use crate::cli_args::Cli;

/// Resolve a shell name case-insensitively; `ps` is accepted for PowerShell.
pub fn parse_shell(name: &str) -> Option<Shell> {
    if name.eq_ignore_ascii_case("ps") {
        return Some(Shell::PowerShell);
    }
    <Shell as ValueEnum>::from_str(name, true).ok()
}

fn supported_shells() -> String {
    Shell::value_variants()
        .iter()
        .filter_map(|s| s.to_possible_value())
        .map(|v| v.get_name().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the completion script for `shell` covering every speclint subcommand.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}

/// Run `speclint completion <shell>`.
pub fn run(shell: &str) -> i32 {
    let Some(resolved) = parse_shell(shell) else {
        eprintln!(
            "speclint completion: unsupported shell `{shell}` (expected one of: {})",
            supported_shells()
        );
        return 2;
    };
    tracing::debug!(shell = %resolved, "generating completions");
    write_completions(resolved, &mut std::io::stdout());
    0
}
