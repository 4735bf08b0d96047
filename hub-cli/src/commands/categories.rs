use std::path::PathBuf;

use data_filter::ALL_CATEGORIES;

use crate::util::provide_catalog;
use crate::{AppError, HubConfig};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "categories", about = "List the category filter options")]
pub struct Categories {
    #[clap(long, value_name = "FILE", help = "Badge catalog JSON file")]
    catalog: Option<PathBuf>,
}

impl Categories {
    pub fn run(&self, config: &HubConfig) -> Result<(), AppError> {
        let catalog = provide_catalog(config, self.catalog.as_deref())?;
        println!("{}", ALL_CATEGORIES);
        for category in data_filter::categories(&catalog) {
            println!("{}", category);
        }
        Ok(())
    }
}
