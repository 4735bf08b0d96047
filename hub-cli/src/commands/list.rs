use std::path::PathBuf;

use data_filter::{CategoryFilter, GalleryQuery, Ownership, SortKey};
use data_unlock::UnlockTracker;
use hub_session::LookupOutcome;

use crate::util::{parse_ids, provide_catalog, provide_hub};
use crate::{render, AppError, HubConfig};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List badges, earnable first, then historical")]
pub struct List {
    #[clap(long, short, help = "Match against name and description")]
    query: Option<String>,
    #[clap(long, short, help = "Only show this category ('All' for every one)")]
    category: Option<CategoryFilter>,
    #[clap(
        long,
        short,
        default_value = "all",
        help = "all, owned or unowned"
    )]
    ownership: Ownership,
    #[clap(
        long,
        short,
        default_value = "name",
        help = "Sort by name, rarity or category"
    )]
    sort: SortKey,
    #[clap(
        long,
        short,
        value_name = "ID,ID",
        conflicts_with = "user",
        help = "Badge ids to treat as unlocked"
    )]
    unlocked: Option<String>,
    #[clap(long, short = 'U', help = "Detect unlocked badges from a profile")]
    user: Option<String>,
    #[clap(long, value_name = "FILE", help = "Badge catalog JSON file")]
    catalog: Option<PathBuf>,
    #[clap(long, action, help = "Print JSON instead of a table")]
    json: bool,
}

impl List {
    fn query(&self) -> GalleryQuery {
        GalleryQuery::new()
            .text(self.query.as_deref().unwrap_or_default())
            .category(self.category.clone().unwrap_or_default())
            .ownership(self.ownership)
            .sort(self.sort)
    }

    pub async fn run(&self, config: &HubConfig) -> Result<(), AppError> {
        let catalog = provide_catalog(config, self.catalog.as_deref())?;

        let mut tracker = UnlockTracker::new();
        if let Some(ids) = &self.unlocked {
            tracker.replace_all(parse_ids(ids));
        }

        if let Some(user) = &self.user {
            let hub = provide_hub(config, catalog)?;
            match hub.lookup_profile(user).await {
                Some(LookupOutcome::Found { profile, detection }) => {
                    println!("{}", render::profile(&profile));
                    let session = hub.session().await;
                    println!(
                        "{}\n",
                        render::detection(&detection, &session.catalog)
                    );
                }
                Some(LookupOutcome::Failed(message)) => {
                    println!("{}\n", message)
                }
                None => {}
            }
            let mut session = hub.session().await;
            session.query = self.query();
            return self.print(&session.visible(), &session.tracker);
        }

        let view = data_filter::gallery(&catalog, &self.query(), &tracker);
        self.print(&view, &tracker)
    }

    fn print(
        &self,
        view: &data_filter::Gallery<'_>,
        tracker: &UnlockTracker,
    ) -> Result<(), AppError> {
        if self.json {
            let json = render::gallery_json(view, tracker)
                .map_err(data_error::HubError::from)?;
            println!("{}", json);
        } else {
            println!("{}", render::gallery(view, tracker));
        }
        Ok(())
    }
}
