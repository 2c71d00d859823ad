use std::process::ExitCode;

/// A subcommand that can be run once its arguments are parsed.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, verbose: bool) -> CommandOutcome;
}

/// What a finished subcommand reports to the user.
#[derive(Debug)]
pub(crate) enum CommandOutcome {
    /// Printed to stderr; the process exits non-zero.
    Failed(String),
    /// Printed to stdout.
    Succeeded(String),
}
impl CommandOutcome {
    pub(crate) fn report(self) -> ExitCode {
        match self {
            Self::Failed(message) => {
                eprintln!("{message}");
                ExitCode::FAILURE
            },
            Self::Succeeded(message) => {
                println!("{message}");
                ExitCode::SUCCESS
            },
        }
    }
}
