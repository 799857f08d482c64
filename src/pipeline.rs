use crate::chunker::{ChunkPlan, plan_chunks};
use crate::config::RunConfig;
use crate::error::ChunkError;
use crate::report::RunSummary;
use crate::source::SourceDocument;
use crate::writer::{ArtifactWriter, WrittenChunk};
use tracing::info;

/// Validate, load, plan and write.
///
/// Parameters are checked before the input is opened, and the input is read
/// in full before the first chunk is written.
pub fn run<F>(config: &RunConfig, on_chunk: F) -> Result<RunSummary, ChunkError>
where
    F: FnMut(&WrittenChunk),
{
    run_with_writer(config, &ArtifactWriter::new(&config.output_dir), on_chunk)
}

/// `run` with a caller-supplied writer (e.g. a pinned timestamp)
pub fn run_with_writer<F>(
    config: &RunConfig,
    writer: &ArtifactWriter,
    on_chunk: F,
) -> Result<RunSummary, ChunkError>
where
    F: FnMut(&WrittenChunk),
{
    let (doc, plan) = prepare(config)?;
    let report = writer.write_all(&doc, &plan, on_chunk)?;

    Ok(RunSummary::new(&config.input, writer.output_dir(), &plan).with_index(report.index_path))
}

/// Everything `run` does except writing files
pub fn dry_run(config: &RunConfig) -> Result<RunSummary, ChunkError> {
    let (_, plan) = prepare(config)?;
    Ok(RunSummary::new(&config.input, &config.output_dir, &plan))
}

fn prepare(config: &RunConfig) -> Result<(SourceDocument, ChunkPlan), ChunkError> {
    let settings = config.settings()?;

    if !config.input.exists() {
        return Err(ChunkError::InputNotFound(config.input.clone()));
    }

    let doc = SourceDocument::load(&config.input)?;
    let plan = plan_chunks(doc.line_count(), &settings);

    info!(
        input = %config.input.display(),
        lines = plan.total_lines,
        chunks = plan.len(),
        step = settings.step(),
        "Planned chunks"
    );

    Ok((doc, plan))
}
