use std::path::Path;

use clap::Subcommand;

use crate::{AppError, HubConfig};

mod ask;
mod categories;
pub mod config;
mod detect;
mod generate;
mod list;
mod profile;
mod search;
mod session;
mod show;
mod strategy;

#[derive(Debug, Subcommand)]
pub enum Commands {
    List(list::List),
    Categories(categories::Categories),
    Show(show::Show),
    Detect(detect::Detect),
    Ask(ask::Ask),
    Search(search::Search),
    Strategy(strategy::Strategy),
    Generate(generate::Generate),
    Profile(profile::Profile),
    Session(session::Session),
    #[command(about = "Inspect and edit the configuration file")]
    Config {
        #[clap(subcommand)]
        subcommand: config::Config,
    },
}

impl Commands {
    pub async fn run(
        &self,
        config: &HubConfig,
        config_path: Option<&Path>,
    ) -> Result<(), AppError> {
        match self {
            Commands::List(list) => list.run(config).await,
            Commands::Categories(categories) => categories.run(config),
            Commands::Show(show) => show.run(config),
            Commands::Detect(detect) => detect.run(),
            Commands::Ask(ask) => ask.run(config).await,
            Commands::Search(search) => search.run(config).await,
            Commands::Strategy(strategy) => strategy.run(config).await,
            Commands::Generate(generate) => generate.run(config).await,
            Commands::Profile(profile) => profile.run(config).await,
            Commands::Session(session) => session.run(config).await,
            Commands::Config { subcommand } => subcommand.run(config_path),
        }
    }
}
