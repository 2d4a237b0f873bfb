use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct TagCommand {
    #[command(subcommand)]
    command: TagSubcommand,
}

#[derive(Debug, Subcommand)]
enum TagSubcommand {
    Create(create::CreateTagArgs),
}

pub(crate) async fn run(command: TagCommand) -> Result<(), String> {
    match command.command {
        TagSubcommand::Create(args) => create::run(args).await,
    }
}
