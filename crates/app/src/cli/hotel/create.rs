use clap::Args;
use innkeep_app::domain::hotels::{
    HotelsService, StoreHotelsService, data::NewHotel, records::BankDetails,
};

#[derive(Debug, Args)]
pub(crate) struct CreateHotelArgs {
    /// Hotel display name
    #[arg(long)]
    name: String,

    /// Hotelier login email
    #[arg(long)]
    hotelier_email: String,

    /// Hotelier login password
    #[arg(long, env = "HOTELIER_PASSWORD", hide_env_values = true)]
    hotelier_password: String,

    /// Guest-facing contact email
    #[arg(long)]
    contact_email: String,

    /// Guest-facing contact phone
    #[arg(long)]
    contact_phone: String,

    /// Postal address
    #[arg(long)]
    address: String,

    /// Room category; repeat for several
    #[arg(long = "room-category", required = true)]
    room_categories: Vec<String>,

    /// Meal plan; repeat for several
    #[arg(long = "meal-plan")]
    meal_plans: Vec<String>,

    /// Optional public domain
    #[arg(long)]
    domain: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateHotelArgs) -> Result<(), String> {
    let db = super::connect(&args.database_url).await?;

    let hotel = StoreHotelsService::new(db)
        .create_hotel(NewHotel {
            hotel_name: args.name,
            domain: args.domain,
            hotelier_email: args.hotelier_email,
            hotelier_password: args.hotelier_password,
            contact_email: args.contact_email,
            contact_phone: args.contact_phone,
            full_address: args.address,
            meal_plans: args.meal_plans,
            room_categories: args.room_categories,
            bank_details: BankDetails::default(),
        })
        .await
        .map_err(|error| format!("failed to create hotel: {error}"))?;

    println!("hotel_id: {}", hotel.id);
    println!("hotel_name: {}", hotel.hotel_name);
    println!("hotelier_email: {}", hotel.hotelier_email);

    Ok(())
}
