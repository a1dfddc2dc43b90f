use clap::Parser;
use climate_api::cli::{run, Cli};
use climate_api::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
