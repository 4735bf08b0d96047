use data_unlock::detect;

use crate::util::text_or_stdin;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "detect",
    about = "Guess badge ids from free text (reads stdin without TEXT)"
)]
pub struct Detect {
    #[clap(value_parser, help = "Text naming achievements")]
    text: Vec<String>,
}

impl Detect {
    pub fn run(&self) -> Result<(), AppError> {
        let text = text_or_stdin(&self.text)?;
        let ids = detect(&text);
        if ids.is_empty() {
            println!("No badges detected.");
        }
        for id in ids {
            println!("{}", id);
        }
        Ok(())
    }
}
