use clap::Args;
use innkeep_app::domain::hotels::{HotelsService, StoreHotelsService};

#[derive(Debug, Args)]
pub(crate) struct ListHotelsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListHotelsArgs) -> Result<(), String> {
    let db = super::connect(&args.database_url).await?;

    let hotels = StoreHotelsService::new(db)
        .list_hotels()
        .await
        .map_err(|error| format!("failed to list hotels: {error}"))?;

    if hotels.is_empty() {
        println!("no hotels");
        return Ok(());
    }

    for summary in hotels {
        println!(
            "{}\t{}\t{}\tbookings={}",
            summary.hotel.id,
            summary.hotel.hotel_name,
            summary.hotel.hotelier_email,
            summary.booking_count
        );
    }

    Ok(())
}
