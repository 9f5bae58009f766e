use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "strategy-explainer")]
#[clap(about = "Explain NinjaScript trading strategies in plain English", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
