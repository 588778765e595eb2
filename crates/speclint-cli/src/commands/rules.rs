use std::path::PathBuf;

use speclint_enforce::engine::LintEngine;
use speclint_output::OutputFormatter;

use super::config;

/// Run `speclint rules`: list the built-in rules against the resolved configuration.
pub fn run(formatter: &dyn OutputFormatter, config_path: Option<PathBuf>) -> i32 {
    let config = match config::resolve_from_cwd(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("speclint rules: {}", e);
            return 2;
        }
    };

    let engine = LintEngine::new();
    if let Err(e) = speclint_enforce::engine::validate_config(&config.rules) {
        eprintln!("speclint rules: {}", e);
        return 2;
    }

    println!("{}", formatter.format_rules(&engine.describe(&config.rules)).trim_end());
    0
}
