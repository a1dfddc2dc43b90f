use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climate-api")]
#[command(about = "Read-only query API over station climate observations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the query API over HTTP
    Serve {
        #[arg(
            short,
            long,
            help = "Directory containing stations.csv and measurements.csv"
        )]
        data_dir: PathBuf,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Print a summary of the dataset without serving
    Info {
        #[arg(
            short,
            long,
            help = "Directory containing stations.csv and measurements.csv"
        )]
        data_dir: PathBuf,
    },
}
