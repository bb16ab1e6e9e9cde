use clap::{Parser, Subcommand};

mod db;
mod hotel;
mod password;

#[derive(Debug, Parser)]
#[command(name = "innkeep-app", about = "Innkeep CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Hotel(hotel::HotelCommand),
    Password(password::PasswordCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Hotel(command) => hotel::run(command).await,
            Commands::Password(command) => password::run(command),
        }
    }
}
