use clap::Args;
use larder_app::{
    database::Db,
    domain::ingredients::{
        IngredientsService, PgIngredientsService, data::NewIngredient, records::IngredientUuid,
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateIngredientArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    name: String,

    /// Unit amounts are expressed in, e.g. `g` or `pcs`
    #[arg(long)]
    measurement_unit: String,
}

pub(crate) async fn run(args: CreateIngredientArgs) -> Result<(), String> {
    let pool = super::super::connect(&args.database_url).await?;
    let service = PgIngredientsService::new(Db::new(pool));

    let ingredient = service
        .create_ingredient(NewIngredient {
            uuid: IngredientUuid::new(),
            name: args.name,
            measurement_unit: args.measurement_unit,
        })
        .await
        .map_err(|error| format!("failed to create ingredient: {error}"))?;

    println!("ingredient_uuid: {}", ingredient.uuid);

    Ok(())
}
