use clap::Args;
use innkeep_app::auth::hash_password;

#[derive(Debug, Args)]
pub(crate) struct HashPasswordArgs {
    /// Password to derive a verifier for
    #[arg(long, env = "PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) fn run(args: &HashPasswordArgs) -> Result<(), String> {
    if args.password.len() < 8 {
        return Err("password must be at least 8 characters".to_string());
    }

    println!("{}", hash_password(&args.password));

    Ok(())
}
