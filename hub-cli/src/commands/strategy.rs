use std::path::PathBuf;

use data_error::HubError;

use crate::util::{provide_catalog, provide_hub};
use crate::{render, AppError, HubConfig};

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "strategy",
    about = "Detailed walkthrough for unlocking one badge"
)]
pub struct Strategy {
    #[clap(value_parser, help = "Badge id, e.g. 'galaxy-brain'")]
    id: String,
    #[clap(long, value_name = "FILE", help = "Badge catalog JSON file")]
    catalog: Option<PathBuf>,
}

impl Strategy {
    pub async fn run(&self, config: &HubConfig) -> Result<(), AppError> {
        let catalog = provide_catalog(config, self.catalog.as_deref())?;
        let hub = provide_hub(config, catalog)?;
        match hub.analyze_strategy(&self.id).await {
            Ok(Some(view)) => println!("{}", render::strategy(&view)),
            Ok(None) => {}
            Err(HubError::UnknownBadge(id)) => {
                return Err(AppError::UnknownBadge(id))
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
