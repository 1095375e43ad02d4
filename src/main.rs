// src/main.rs
//! NMEA Decoder - command line batch decoder for GPS sentences

use anyhow::{Context, Result};
use clap::Parser;
use nmea_decoder::{
    batch::{read_sentences, save_report, BatchDecoder},
    config::DecoderConfig,
    display::TerminalReport,
    geocode::What3WordsGeocoder,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::BufReader;

#[derive(Debug, Parser)]
#[command(
    name = "nmea-decoder",
    about = "Decode NMEA-0183 GPS sentences into JSON records",
    version
)]
struct Cli {
    /// File of newline-separated sentences; stdin when omitted
    input: Option<PathBuf>,

    /// Path for the JSON report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the report without asking
    #[arg(short = 'y', long)]
    yes: bool,

    /// what3words API key for reverse-geocoding enrichment
    #[arg(long)]
    what3words_key: Option<String>,

    /// Print the full JSON report to stdout
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DecoderConfig::load().unwrap_or_default();

    let mut decoder = BatchDecoder::new();
    let api_key = cli
        .what3words_key
        .clone()
        .or_else(|| config.what3words_api_key.clone());
    if let Some(key) = api_key {
        decoder.add_geocoder(Box::new(What3WordsGeocoder::new(key)?));
    }

    let from_stdin = cli.input.is_none();
    let sentences = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_sentences(BufReader::new(file)).await?
        }
        None => read_sentences(BufReader::new(tokio::io::stdin())).await?,
    };

    // Enrichment lookups block on HTTP, so decoding runs on the blocking pool
    let report = tokio::task::spawn_blocking(move || decoder.decode_batch(&sentences))
        .await
        .context("decode task failed")?;

    let renderer = TerminalReport::new(config.colored_output && !cli.no_color);
    let mut stdout = std::io::stdout();
    renderer.render(&mut stdout, &report)?;

    if cli.json {
        println!("{}", report.to_json()?);
    }

    let output = cli
        .output
        .clone()
        .or_else(|| config.output_path.clone().map(PathBuf::from));

    if let Some(path) = output {
        let confirmed = if cli.yes {
            true
        } else if from_stdin {
            // stdin already carried the sentences, so there is nobody to ask
            if cli.output.is_some() {
                eprintln!("Input came from stdin; pass --yes to save the report");
            }
            false
        } else {
            confirm_save(&path)?
        };

        if confirmed {
            save_report(&report, &path)?;
            println!("Report saved to {}", path.display());
        }
    }

    Ok(())
}

/// Ask before writing the report to disk.
fn confirm_save(path: &Path) -> Result<bool> {
    print!("Save the results to {}? (yes/no): ", path.display());
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(matches!(answer.as_str(), "y" | "yes" | "oui"))
}
