use clap::{Parser, Subcommand};
use larder_app::database;
use sqlx::PgPool;

mod db;
mod ingredient;
mod tag;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "larder-app", about = "Larder CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Token(token::TokenCommand),
    Tag(tag::TagCommand),
    Ingredient(ingredient::IngredientCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Tag(command) => tag::run(command).await,
            Commands::Ingredient(command) => ingredient::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

async fn connect(database_url: &str) -> Result<PgPool, String> {
    database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}
