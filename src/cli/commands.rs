use crate::analyzers::ClimateAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::server;
use crate::store::ClimateStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve {
            data_dir,
            host,
            port,
        } => {
            let store = ClimateStore::load_from_dir(&data_dir)?;
            tracing::info!(
                "Loaded {} stations and {} measurements from {}",
                store.stations().len(),
                store.measurements().len(),
                data_dir.display()
            );

            server::run(Arc::new(store), &host, port).await
        }

        Commands::Info { data_dir } => {
            let store = ClimateStore::load_from_dir(&data_dir)?;
            let summary = ClimateAnalyzer::new(&store).dataset_summary()?;
            println!("{}", summary.summary());

            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
