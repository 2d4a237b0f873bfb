use clap::{Args, Subcommand};

mod create;
mod import;

#[derive(Debug, Args)]
pub(crate) struct IngredientCommand {
    #[command(subcommand)]
    command: IngredientSubcommand,
}

#[derive(Debug, Subcommand)]
enum IngredientSubcommand {
    Create(create::CreateIngredientArgs),
    Import(import::ImportIngredientsArgs),
}

pub(crate) async fn run(command: IngredientCommand) -> Result<(), String> {
    match command.command {
        IngredientSubcommand::Create(args) => create::run(args).await,
        IngredientSubcommand::Import(args) => import::run(args).await,
    }
}
