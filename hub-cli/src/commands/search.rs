use crate::util::{provide_catalog, provide_hub};
use crate::{render, AppError, HubConfig};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "search", about = "Web-grounded search with sources")]
pub struct Search {
    #[clap(value_parser, required = true, help = "What to look for")]
    query: Vec<String>,
}

impl Search {
    pub async fn run(&self, config: &HubConfig) -> Result<(), AppError> {
        let hub = provide_hub(config, provide_catalog(config, None)?)?;
        if let Some(answer) = hub.search(&self.query.join(" ")).await {
            println!("{}", render::grounded(&answer));
        }
        Ok(())
    }
}
