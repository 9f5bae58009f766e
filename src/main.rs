use clap::Parser;
use strategy_explainer::errors::report_error;
use strategy_explainer::structs::cli::Cli;
use strategy_explainer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init()?;

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        report_error(&e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}
