use std::process::ExitCode;

use adaptive_learning::config::Config;
use adaptive_learning::display::TerminalDisplay;
use adaptive_learning::logging;
use adaptive_learning::scenario::run_demo;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config.log_level);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut display = TerminalDisplay::new(stdin.lock(), stdout.lock())
        .interactive(config.interactive)
        .with_preview_dir(config.preview_dir.clone());

    match run_demo(&config, &mut display) {
        Ok(outcome) => {
            tracing::info!(
                user = %outcome.current_user,
                recommended = outcome.recommendations.len(),
                "demonstration finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "demonstration aborted");
            eprintln!("An error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
