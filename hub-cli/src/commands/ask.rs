use crate::util::{provide_catalog, provide_hub};
use crate::{AppError, HubConfig};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "ask", about = "Quick answer about GitHub achievements")]
pub struct Ask {
    #[clap(value_parser, required = true, help = "Question")]
    query: Vec<String>,
}

impl Ask {
    pub async fn run(&self, config: &HubConfig) -> Result<(), AppError> {
        let hub = provide_hub(config, provide_catalog(config, None)?)?;
        if let Some(answer) = hub.ask(&self.query.join(" ")).await {
            println!("{}", answer);
        }
        Ok(())
    }
}
