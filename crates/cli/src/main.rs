mod input;

use analysis::{ProgressSnapshot, run_analysis};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::input::{Inputs, load_config};

#[derive(Parser)]
#[command(
    name = "character-graph",
    version,
    about = "Extract a character relationship graph from a novel",
    long_about = None
)]
struct Cli {
    /// Document to analyze (.txt or .md)
    #[arg(short, long)]
    text: PathBuf,

    /// Character roster, one name per line
    #[arg(short, long)]
    characters: PathBuf,

    /// Attitude lexicon JSON: {"positive": [...], "negative": [...]}
    #[arg(short, long)]
    lexicon: PathBuf,

    /// TOML config file with chapter_pattern and chunk_size
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chapter marker regex, overrides the config file
    #[arg(long)]
    chapter_pattern: Option<String>,

    /// Maximum chunk size in characters, overrides the config file
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Print progress lines to stderr
    #[arg(short, long)]
    progress: bool,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).await?;
    if let Some(pattern) = cli.chapter_pattern {
        config = config.with_chapter_pattern(pattern);
    }
    if let Some(size) = cli.chunk_size {
        config = config.with_chunk_size(size);
    }

    let inputs = Inputs::load(&cli.text, &cli.characters, &cli.lexicon).await?;

    let mut print_progress = |s: &ProgressSnapshot| {
        eprintln!(
            "Progress: {:.1}% - {} done ({}/{}, {} relations)",
            s.percent, s.current_chapter_title, s.processed_chapters, s.total_chapters, s.relations_so_far
        );
    };
    let reporter: Option<&mut dyn analysis::ProgressReporter> = if cli.progress {
        Some(&mut print_progress)
    } else {
        None
    };

    let result = run_analysis(
        &inputs.text,
        &inputs.characters,
        &inputs.lexicon,
        &config,
        reporter,
    )
    .context("Analysis failed")?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}
