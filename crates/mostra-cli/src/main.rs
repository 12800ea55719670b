use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod output;

use mostra_core::{Settings, catalog};
use output::ColorMode;

/// Extraction toolkit for the Mostra Científica annals catalog
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download the annals document and build the record file
    Init {
        /// Rebuild even if the record file already exists
        #[arg(long)]
        force: bool,

        /// Override the configured document URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Extract records from a local document
    Extract {
        /// Path to the PDF document
        document: PathBuf,

        /// Write the records as JSON instead of printing them
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show aggregate counts from the record file
    Stats {
        /// Path to the record file (defaults to the configured one)
        #[arg(long)]
        records: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init { force, url } => init(force, url).await,
        Command::Extract {
            document,
            output,
            no_color,
        } => extract(document, output, no_color),
        Command::Stats { records, no_color } => stats(records, no_color),
    }
}

async fn init(force: bool, url: Option<String>) -> anyhow::Result<()> {
    let settings = Settings::load();

    if settings.records_path.exists() && !force {
        println!(
            "Record file already exists at {} (use --force to rebuild)",
            settings.records_path.display()
        );
        return Ok(());
    }

    let url = url.unwrap_or(settings.document_url);
    println!("Downloading {}...", url);

    let client = reqwest::Client::new();
    let works = mostra_ingest::initialize_dataset(
        &client,
        &url,
        &settings.document_path,
        &settings.records_path,
    )
    .await?;

    println!(
        "Extracted {} records to {}",
        works.len(),
        settings.records_path.display()
    );
    Ok(())
}

fn extract(document: PathBuf, output: Option<PathBuf>, no_color: bool) -> anyhow::Result<()> {
    if !document.exists() {
        anyhow::bail!("File not found: {}", document.display());
    }

    let works = mostra_ingest::extract_document(&document)?;

    match output {
        Some(path) => {
            mostra_core::save_works(&path, &works)?;
            println!("Wrote {} records to {}", works.len(), path.display());
        }
        None => {
            let color = ColorMode(!no_color);
            let mut stdout = std::io::stdout();
            for work in &works {
                output::print_work(&mut stdout, work, color)?;
            }
            writeln!(stdout, "{} records", works.len())?;
        }
    }
    Ok(())
}

fn stats(records: Option<PathBuf>, no_color: bool) -> anyhow::Result<()> {
    let settings = Settings::load();
    let path = records.unwrap_or(settings.records_path);
    let works = mostra_core::load_works(&path)?;

    if works.is_empty() {
        println!("No records at {} (run `mostra init` first)", path.display());
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    output::print_stats(&mut stdout, &catalog::stats(&works), ColorMode(!no_color))?;
    Ok(())
}
