use std::sync::Arc;

use clap::{Args, Subcommand};
use innkeep_app::{
    database::{self, Db},
    store::PgDocumentStore,
};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct HotelCommand {
    #[command(subcommand)]
    command: HotelSubcommand,
}

#[derive(Debug, Subcommand)]
enum HotelSubcommand {
    Create(create::CreateHotelArgs),
    List(list::ListHotelsArgs),
}

pub(crate) async fn run(command: HotelCommand) -> Result<(), String> {
    match command.command {
        HotelSubcommand::Create(args) => create::run(args).await,
        HotelSubcommand::List(args) => list::run(args).await,
    }
}

async fn connect(database_url: &str) -> Result<Db, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(Db::new(Arc::new(PgDocumentStore::new(pool))))
}
