use clap::Args;
use larder_app::{
    database::Db,
    domain::tags::{PgTagsService, TagsService, data::NewTag, records::TagUuid},
};

#[derive(Debug, Args)]
pub(crate) struct CreateTagArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Display name
    #[arg(long)]
    name: String,

    /// URL slug used by recipe filters
    #[arg(long)]
    slug: String,
}

pub(crate) async fn run(args: CreateTagArgs) -> Result<(), String> {
    let pool = super::super::connect(&args.database_url).await?;
    let service = PgTagsService::new(Db::new(pool));

    let tag = service
        .create_tag(NewTag {
            uuid: TagUuid::new(),
            name: args.name,
            slug: args.slug,
        })
        .await
        .map_err(|error| format!("failed to create tag: {error}"))?;

    println!("tag_uuid: {}", tag.uuid);
    println!("tag_slug: {}", tag.slug);

    Ok(())
}
