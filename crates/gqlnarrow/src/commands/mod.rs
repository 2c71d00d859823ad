mod narrow;

use crate::CommandOutcome;
use crate::RunnableCommand;
use narrow::NarrowCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Narrow every operation in a set of executable documents against a
    /// schema and summarize the resulting proxy types.
    Narrow(Box<NarrowCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, verbose: bool) -> CommandOutcome {
        match self {
            Self::Narrow(cmd) => cmd.run(verbose).await,
        }
    }
}
