use anyhow::{Context, Result, bail};
use chunkmaker::chunker::{ChunkConfig, DEFAULT_MAX_CHARS, DEFAULT_OVERLAP_CHARS, Strategy};
use chunkmaker::output::MANIFEST_FILE;
use chunkmaker::{DirectorySink, discover_csv_files, process_files};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Split meeting-transcript CSV exports into overlapping, stably identified chunks.
#[derive(Parser, Debug)]
#[command(name = "chunkmaker", version, about)]
struct Cli {
    /// CSV file or directory of CSV files (defaults to ./ and ./data)
    #[arg(long, short, env = "CHUNKMAKER_INPUT")]
    input: Option<PathBuf>,

    /// Directory receiving chunks.jsonl, chunks.tsv, meetings.jsonl and manifest.json
    #[arg(long, short, env = "CHUNKMAKER_OUT_DIR", default_value = "out")]
    out_dir: PathBuf,

    /// Maximum characters per chunk before overlap
    #[arg(long, env = "CHUNKMAKER_MAX_CHARS", default_value_t = DEFAULT_MAX_CHARS as i64, allow_negative_numbers = true)]
    max_chars: i64,

    /// Trailing characters of each chunk repeated at the start of the next
    #[arg(long, env = "CHUNKMAKER_OVERLAP_CHARS", default_value_t = DEFAULT_OVERLAP_CHARS as i64, allow_negative_numbers = true)]
    overlap_chars: i64,

    /// Block splitting policy: paragraphs, sentences or fixed
    #[arg(long, env = "CHUNKMAKER_STRATEGY", default_value = "paragraphs")]
    strategy: String,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let start_time = Instant::now();

    // Configuration errors stop the run before any input is touched
    let strategy: Strategy = cli.strategy.parse()?;
    let config = ChunkConfig::new(cli.max_chars, cli.overlap_chars, strategy)
        .context("Invalid chunking configuration")?;

    let files = discover_csv_files(cli.input.as_deref())?;
    if files.is_empty() {
        bail!("No CSV inputs found");
    }
    tracing::info!(
        files = files.len(),
        max_chars = config.max_chars(),
        overlap_chars = config.overlap_chars(),
        strategy = %config.strategy(),
        "starting chunking run"
    );

    let mut sink = DirectorySink::create(&cli.out_dir)?;
    let manifest = process_files(&files, &config, &mut sink)?;
    sink.finish()?;
    manifest.write_to(&cli.out_dir.join(MANIFEST_FILE))?;

    tracing::info!(
        out_dir = %cli.out_dir.display(),
        files = manifest.stats.file_count,
        meetings = manifest.stats.meeting_count,
        chunks = manifest.stats.chunk_count,
        warnings = manifest.stats.warning_count,
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "chunking complete"
    );

    Ok(())
}
