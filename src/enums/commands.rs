use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the explainer web page on localhost
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        open: bool,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Check the configuration and credential without starting the server
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}
