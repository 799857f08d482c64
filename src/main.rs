use anyhow::Result;
use chunk_file::{
    DEFAULT_CHUNK_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_OVERLAP_PERCENT, RunConfig,
    dry_run, format_human, format_json, format_plan, format_progress, run,
};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Split a large text file into overlapping chunks with metadata headers.
///
/// Writes chunk-NNN.txt files plus an INDEX.txt summary into the output
/// directory.
#[derive(Parser)]
#[command(name = "chunk-file", version, about)]
struct Cli {
    /// Text file to split
    input_file: PathBuf,

    /// Directory for chunk files (created if missing)
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Lines per chunk
    #[arg(default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Overlap between consecutive chunks, in percent of the chunk size (0-100)
    #[arg(default_value_t = DEFAULT_OVERLAP_PERCENT)]
    overlap_percent: u32,

    /// Print the summary as JSON instead of progress and summary text
    #[arg(long)]
    json: bool,

    /// Plan the chunks and print them without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("{}", e.render());
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only progress, summary or JSON
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(cli: &Cli) -> Result<()> {
    let config = RunConfig::new(&cli.input_file)
        .output_dir(&cli.output_dir)
        .chunk_size(cli.chunk_size)
        .overlap_percent(cli.overlap_percent);

    if cli.dry_run {
        let summary = dry_run(&config)?;
        if cli.json {
            println!("{}", format_json(&summary));
        } else {
            println!("{}", format_plan(&summary));
            println!("{}", format_human(&summary));
        }
        return Ok(());
    }

    let json = cli.json;
    let summary = run(&config, |chunk| {
        if !json {
            println!("{}", format_progress(chunk));
        }
    })?;

    if json {
        println!("{}", format_json(&summary));
    } else {
        println!("{}", format_human(&summary));
    }

    Ok(())
}
