use std::path::PathBuf;

use speclint_enforce::engine::LintEngine;
use speclint_output::OutputFormatter;
use speclint_parsers::loader::load_document;

use super::config;

/// Run `speclint lint <spec>`.
///
/// Exit codes: 0 clean, 1 violations found, 2 the document, configuration,
/// or a rule could not be processed.
pub fn run(
    formatter: &dyn OutputFormatter,
    spec: PathBuf,
    config_path: Option<PathBuf>,
    parallel: bool,
) -> i32 {
    let config = match config::resolve_from_cwd(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("speclint lint: {}", e);
            return 2;
        }
    };

    let document = match load_document(&spec) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("speclint lint: {}", e);
            return 2;
        }
    };

    let engine = LintEngine::new().parallel(parallel);
    let name = spec.display().to_string();
    let result = match engine.lint(&document, &config.rules, &name) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("speclint lint: {}", e);
            return 2;
        }
    };

    let output = formatter.format_lint(&result);
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    if result.is_clean() {
        0
    } else {
        1
    }
}
