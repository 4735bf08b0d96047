use std::path::PathBuf;

use data_unlock::UnlockTracker;

use crate::util::provide_catalog;
use crate::{render, AppError, HubConfig};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "show", about = "Show everything known about one badge")]
pub struct Show {
    #[clap(value_parser, help = "Badge id, e.g. 'shark'")]
    id: String,
    #[clap(long, value_name = "FILE", help = "Badge catalog JSON file")]
    catalog: Option<PathBuf>,
}

impl Show {
    pub fn run(&self, config: &HubConfig) -> Result<(), AppError> {
        let catalog = provide_catalog(config, self.catalog.as_deref())?;
        let badge = catalog
            .get(&self.id)
            .ok_or_else(|| AppError::UnknownBadge(self.id.clone()))?;
        println!("{}", render::badge_detail(badge, &UnlockTracker::new()));
        Ok(())
    }
}
