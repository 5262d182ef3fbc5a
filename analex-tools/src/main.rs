// Główny punkt wejścia dla narzędzia analyze-word
mod cli;
mod commands;

use std::io::{self, Write};
use std::process::ExitCode;

use analex_arabic::ArabicAnalyzer;

use crate::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    // Logi idą na stderr, stdout zostaje czystym JSON-em.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::from_env();
    if !cli.rest.is_empty() {
        log::debug!("Ignoring {} extra argument(s)", cli.rest.len());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = commands::analyze_word::run(cli.word.as_deref(), ArabicAnalyzer::new, &mut out)?;
    out.flush()?;
    Ok(ExitCode::from(code))
}
