use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write a sample config file
    Init,
    /// Check the config file
    Validate,
    /// Show the stored webhook settings
    Show,
    /// Update the stored webhook settings
    Set {
        #[clap(short, long)]
        webhook: Option<String>,
        #[clap(long)]
        verify_ssl: Option<bool>,
    },
    /// Ask the server to send a test notification
    Test,
    /// Post a message straight to the webhook
    Send {
        #[clap(long, default_value = "")]
        title: String,
        #[clap(long, conflicts_with = "feeds")]
        text: Option<String>,
        #[clap(short, long = "feed")]
        feeds: Vec<String>,
        #[clap(short, long)]
        webhook: Option<String>,
        /// Skip TLS certificate verification
        #[clap(long)]
        insecure: bool,
    },
    /// Seed the store from SYNOLOGY_CHAT_* environment variables
    Bootstrap,
    /// List message type codes
    MessageTypes,
    /// Edit and test the settings in a session
    Interactive,
}
