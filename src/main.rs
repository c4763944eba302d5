use clap::Parser;
use linediet::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    linediet::run_app(Cli::parse()).await
}
