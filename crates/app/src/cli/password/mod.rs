use clap::{Args, Subcommand};

mod hash;

#[derive(Debug, Args)]
pub(crate) struct PasswordCommand {
    #[command(subcommand)]
    command: PasswordSubcommand,
}

#[derive(Debug, Subcommand)]
enum PasswordSubcommand {
    Hash(hash::HashPasswordArgs),
}

pub(crate) fn run(command: PasswordCommand) -> Result<(), String> {
    match command.command {
        PasswordSubcommand::Hash(args) => hash::run(&args),
    }
}
