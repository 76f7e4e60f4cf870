use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "synochat")]
#[clap(about = "Configure and test Synology Chat webhook notifications", long_about = None)]
pub struct Cli {
    /// Settings API base URL, overrides the config file
    #[clap(long, global = true)]
    pub server: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
