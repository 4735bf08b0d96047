use hub_session::LookupOutcome;

use crate::util::{provide_catalog, provide_hub};
use crate::{render, AppError, HubConfig};

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "profile",
    about = "Show a GitHub profile and the badges detected on it"
)]
pub struct Profile {
    #[clap(value_parser, help = "GitHub username")]
    username: String,
}

impl Profile {
    pub async fn run(&self, config: &HubConfig) -> Result<(), AppError> {
        let hub = provide_hub(config, provide_catalog(config, None)?)?;
        match hub.lookup_profile(&self.username).await {
            Some(LookupOutcome::Found { profile, detection }) => {
                let session = hub.session().await;
                println!("{}", render::profile(&profile));
                println!(
                    "\n{}",
                    render::detection(&detection, &session.catalog)
                );
            }
            Some(LookupOutcome::Failed(message)) => println!("{}", message),
            None => {}
        }
        Ok(())
    }
}
