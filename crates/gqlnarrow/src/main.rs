mod cli;
mod command;
mod commands;
mod file_discovery;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::CommandOutcome;
pub(crate) use command::RunnableCommand;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let log_level_warning = setup_logger(cli.verbose);
    if let Some(warning) = log_level_warning {
        log::warn!("{warning}");
    }

    cli.cmd.run(cli.verbose).await.report()
}

/// Install the stderr subscriber. Returns a warning to log once logging is
/// up if `LOG_LEVEL` could not be understood.
fn setup_logger(verbose: bool) -> Option<String> {
    let (log_level, warning) = match std::env::var("LOG_LEVEL") {
        _ if verbose => (tracing::Level::DEBUG, None),
        Ok(value) => match parse_log_level(value.trim()) {
            Some(level) => (level, None),
            None => (
                DEFAULT_LOG_LEVEL,
                Some(format!("Ignoring unrecognized `LOG_LEVEL` value `{value}`")),
            ),
        },
        Err(_) => (DEFAULT_LOG_LEVEL, None),
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    warning
}

fn parse_log_level(value: &str) -> Option<tracing::Level> {
    if value.eq_ignore_ascii_case("verbose") {
        return Some(tracing::Level::DEBUG);
    }
    value.parse().ok()
}
