use std::fs;
use std::path::PathBuf;

use data_genai::ImageSize;
use hub_session::ConceptOutcome;

use crate::util::{generate_with_key_prompt, provide_catalog, provide_hub};
use crate::{render, AppError, HubConfig};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "generate", about = "Generate artwork for a new badge concept")]
pub struct Generate {
    #[clap(value_parser, required = true, help = "What the badge is about")]
    prompt: Vec<String>,
    #[clap(long, default_value = "1K", help = "Image size: 1K, 2K or 4K")]
    size: ImageSize,
    #[clap(long, value_name = "FILE", help = "Write the decoded image here")]
    out: Option<PathBuf>,
    #[clap(long, value_name = "FILE", help = "Badge catalog JSON file")]
    catalog: Option<PathBuf>,
}

impl Generate {
    pub async fn run(&self, config: &HubConfig) -> Result<(), AppError> {
        let catalog = provide_catalog(config, self.catalog.as_deref())?;
        let hub = provide_hub(config, catalog)?;
        let prompt = self.prompt.join(" ");

        let Some(outcome) =
            generate_with_key_prompt(&hub, &prompt, self.size).await?
        else {
            return Ok(());
        };
        println!("{}", render::concept(&outcome));

        if let ConceptOutcome::Added { badge_id, image } = &outcome {
            let session = hub.session().await;
            if let Some(badge) = session.catalog.get(badge_id) {
                println!("\n{}", render::badge_detail(badge, &session.tracker));
            }
            if let Some(path) = &self.out {
                let bytes = image.decode()?;
                fs::write(path, bytes).map_err(|e| {
                    AppError::ImageWriteError(format!(
                        "{}: {}",
                        path.display(),
                        e
                    ))
                })?;
                println!("Image written to {}", path.display());
            }
        }
        Ok(())
    }
}
