use crate::commands::CommandEnum;

/// Narrow GraphQL operations into operation-scoped proxy types.
#[derive(clap::Parser, Debug)]
#[command(name = "gqlnarrow", version, arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: CommandEnum,

    /// Log at DEBUG level (overrides `LOG_LEVEL`).
    #[arg(global = true, long, short = 'v')]
    pub(crate) verbose: bool,
}
