use std::path::PathBuf;

use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "achievements-hub", version)]
#[clap(about = "Browse, track and research GitHub achievements", long_about = None)]
pub struct Cli {
    #[clap(
        long,
        global = true,
        value_name = "FILE",
        help = "Configuration file to use instead of the default location"
    )]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
