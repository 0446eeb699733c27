use std::path::PathBuf;

use bandi_export::pipeline::{self, DEFAULT_OUTPUT, DEFAULT_URL};
use bandi_export::{Result, ToolError};
use clap::{ArgAction, Parser};
use reqwest::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(cli.verbose) {
        eprintln!("warning: {error}");
    }

    println!("Scaricamento dati dei bandi in corso...");

    match run(&cli).await {
        Ok(()) => println!(
            "Dati scaricati con successo. File Excel generato: {}",
            cli.output.display()
        ),
        Err(error) => println!("Errore: {error}"),
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let client = Client::new();
    pipeline::download_to_excel(&client, &cli.url, &cli.output).await?;
    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Download the Regione Lombardia grant announcements into an Excel workbook."
)]
struct Cli {
    /// Endpoint serving the dataset as a JSON array.
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Workbook to create, replacing any existing file.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}
