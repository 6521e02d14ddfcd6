mod cli;
mod commands;

use assetgen_core::error::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/--quiet. Logs go to stderr so --dry-run output stays clean.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_directive().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Parsed arguments: {:?}", cli);

    let result = match &cli.command {
        None => commands::generate::run_default(&cli),
        Some(Commands::Generate(args)) => commands::generate::run(&cli, args.clone()),
        Some(Commands::Init(args)) => commands::init::run(&cli, args.clone()),
        Some(Commands::Info(args)) => commands::info::run(&cli, args.clone()),
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}
