//! Veritext command-line interface.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use veritext::{batch_detect_files, DetectionConfig, DetectionOrchestrator, PdfTextExtractor};

#[derive(Parser)]
#[command(name = "veritext")]
#[command(version)]
#[command(about = "Detect AI-generated text in document submissions", long_about = None)]
struct Cli {
    /// Path to a veritext.toml config file (default: discovered upward from
    /// the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a document and score it
    Analyze {
        /// Document to analyze
        file: PathBuf,

        /// Print the full JSON result instead of a one-line summary
        #[arg(short, long)]
        json: bool,
    },

    /// Analyze many documents concurrently
    Batch {
        /// Documents to analyze
        files: Vec<PathBuf>,

        /// Maximum documents in flight at once
        #[arg(short = 'c', long)]
        max_concurrent: Option<usize>,
    },

    /// Extract text from a document without scoring it
    Extract {
        /// Document to extract
        file: PathBuf,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<DetectionConfig> {
    if let Some(path) = &cli.config {
        return DetectionConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(DetectionConfig::discover(&cwd)?.unwrap_or_default())
}

async fn analyze(config: &DetectionConfig, file: PathBuf, json: bool) -> anyhow::Result<()> {
    let extractor = PdfTextExtractor::new(&config.extraction);
    let orchestrator = DetectionOrchestrator::new(config)?;

    let extracted = extractor
        .extract(&file)
        .await
        .with_context(|| format!("failed to extract text from {}", file.display()))?;
    tracing::info!(strategy = %extracted.strategy, chars = extracted.text.len(), "text extracted");

    let result = orchestrator.detect(&extracted.text).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(error) = &result.error {
        println!("{}: not scored ({error})", file.display());
    } else {
        println!(
            "{}: {:.1}% likely AI-generated ({:?} method)",
            file.display(),
            result.percentage,
            result.method
        );
    }
    Ok(())
}

async fn batch(config: DetectionConfig, files: Vec<PathBuf>) -> anyhow::Result<()> {
    anyhow::ensure!(!files.is_empty(), "no input files given");

    let (reports, summary) = batch_detect_files(files, &config).await?;
    println!("{}", serde_json::to_string_pretty(&reports)?);
    eprintln!("analyzed {} of {} documents", summary.analyzed, summary.analyzed + summary.failed);
    Ok(())
}

async fn extract(config: &DetectionConfig, file: PathBuf) -> anyhow::Result<()> {
    let extractor = PdfTextExtractor::new(&config.extraction);
    let extracted = extractor
        .extract(&file)
        .await
        .with_context(|| format!("failed to extract text from {}", file.display()))?;
    tracing::info!(strategy = %extracted.strategy, "text extracted");
    println!("{}", extracted.text);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match cli.command {
        Commands::Analyze { file, json } => analyze(&config, file, json).await,
        Commands::Batch { files, max_concurrent } => {
            if max_concurrent.is_some() {
                config.max_concurrent = max_concurrent;
            }
            batch(config, files).await
        }
        Commands::Extract { file } => extract(&config, file).await,
    }
}
