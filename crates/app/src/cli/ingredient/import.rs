use std::path::PathBuf;

use clap::Args;
use larder_app::{
    database::Db,
    domain::ingredients::{IngredientsService, PgIngredientsService, import::read_ingredients},
};

#[derive(Debug, Args)]
pub(crate) struct ImportIngredientsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// JSON array of `{"name", "measurement_unit"}` objects
    path: PathBuf,
}

pub(crate) async fn run(args: ImportIngredientsArgs) -> Result<(), String> {
    let ingredients = read_ingredients(&args.path)
        .map_err(|error| format!("failed to read {}: {error}", args.path.display()))?;

    let total = ingredients.len();

    let pool = super::super::connect(&args.database_url).await?;
    let service = PgIngredientsService::new(Db::new(pool));

    let inserted = service
        .import_ingredients(ingredients)
        .await
        .map_err(|error| format!("failed to import ingredients: {error}"))?;

    println!("imported {inserted} of {total} ingredients");

    Ok(())
}
