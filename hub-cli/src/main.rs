use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod render;
mod util;

pub use config::HubConfig;
pub use error::AppError;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Cli::parse();
    let config = HubConfig::load(args.config.as_deref())?;

    args.command
        .run(&config, args.config.as_deref())
        .await?;

    Ok(())
}
