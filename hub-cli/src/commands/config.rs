use std::path::Path;

use clap::builder::PossibleValuesParser;
use clap::Subcommand;

use crate::config::{mask, CONFIG_KEYS};
use crate::{AppError, HubConfig};

/// Available commands for the `config` subcommand
#[derive(Subcommand, Debug)]
pub enum Config {
    #[command(about = "Print the configuration file location and values")]
    Show,
    #[command(about = "Set one configuration key and save the file")]
    Set {
        #[clap(value_parser = PossibleValuesParser::new(CONFIG_KEYS))]
        key: String,
        value: String,
    },
}

impl Config {
    pub fn run(&self, explicit: Option<&Path>) -> Result<(), AppError> {
        let path = HubConfig::resolve(explicit)?;
        let load = |path: &Path| {
            HubConfig::load_from(path)
                .map_err(|e| AppError::ConfigLoadError(format!("{:#}", e)))
        };

        match self {
            Config::Show => {
                let config = load(&path)?;
                println!("Config file: {}", path.display());
                println!("api_key = {}", mask(&config.api_key));
                println!(
                    "premium_api_key = {}",
                    mask(&config.premium_api_key)
                );
                println!("genai_base_url = {}", config.gemini().base_url);
                println!("github_base_url = {}", config.github_base_url());
                println!(
                    "thinking_budget = {}",
                    config.gemini().thinking_budget
                );
                match &config.catalog_path {
                    Some(catalog) => {
                        println!("catalog_path = {}", catalog.display())
                    }
                    None => println!("catalog_path = (built-in)"),
                }
                println!(
                    "user_agent = {}",
                    config.user_agent.as_deref().unwrap_or("(default)")
                );
            }
            Config::Set { key, value } => {
                let mut config = load(&path)?;
                config.set(key, value)?;
                config
                    .save_to(&path)
                    .map_err(|e| AppError::ConfigLoadError(format!("{:#}", e)))?;
                println!("Saved {} to {}", key, path.display());
            }
        }
        Ok(())
    }
}
