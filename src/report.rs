//! Console output for a chunking run.
//!
//! Human-readable progress and summary text for the terminal, and a JSON form
//! for scripting.

use crate::chunker::{ChunkPlan, ChunkPlanEntry};
use crate::writer::{WrittenChunk, index_line};
use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Outcome of a run, as printed at the end
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// `None` for a dry run
    pub index_path: Option<PathBuf>,
    pub total_lines: usize,
    pub total_chunks: usize,
    pub chunk_size: usize,
    pub overlap_percent: u32,
    pub overlap_lines: usize,
    pub chunks: Vec<ChunkPlanEntry>,
}

impl RunSummary {
    pub fn new(input: &Path, output_dir: &Path, plan: &ChunkPlan) -> Self {
        Self {
            input: input.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            index_path: None,
            total_lines: plan.total_lines,
            total_chunks: plan.len(),
            chunk_size: plan.settings.chunk_size(),
            overlap_percent: plan.settings.overlap_percent(),
            overlap_lines: plan.settings.overlap_lines(),
            chunks: plan.entries.clone(),
        }
    }

    pub fn with_index(mut self, index_path: PathBuf) -> Self {
        self.index_path = Some(index_path);
        self
    }
}

/// One line per chunk file as it lands on disk
pub fn format_progress(chunk: &WrittenChunk) -> String {
    format!(
        "✓ {}: lines {}-{} ({} lines)",
        chunk.file_name, chunk.entry.start_line, chunk.entry.end_line, chunk.entry.line_count
    )
}

/// Closing block printed after all files are written.
///
/// Starts with a blank line so it separates from the progress lines above it.
pub fn format_human(summary: &RunSummary) -> String {
    let mut out = String::new();

    if let Some(index_path) = &summary.index_path {
        let _ = writeln!(out, "\n✓ Index created: {}", index_path.display());
    }
    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "  Total lines: {}", summary.total_lines);
    let _ = writeln!(out, "  Total chunks: {}", summary.total_chunks);
    let _ = writeln!(out, "  Chunk size: {} lines", summary.chunk_size);
    let _ = write!(
        out,
        "  Overlap: {}% ({} lines)",
        summary.overlap_percent, summary.overlap_lines
    );

    out
}

/// Planned chunk table for `--dry-run`, in the same layout as the index
pub fn format_plan(summary: &RunSummary) -> String {
    summary
        .chunks
        .iter()
        .map(index_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary as pretty-printed JSON
pub fn format_json(summary: &RunSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::plan;

    fn summary() -> RunSummary {
        let plan = plan(1000, 500, 5).unwrap();
        RunSummary::new(Path::new("big.log"), Path::new("CHUNKS"), &plan)
            .with_index(PathBuf::from("CHUNKS/INDEX.txt"))
    }

    #[test]
    fn test_progress_line() {
        let entry = plan(1000, 500, 5).unwrap().entries[2];
        let chunk = WrittenChunk {
            file_name: "chunk-003.txt".to_string(),
            path: PathBuf::from("CHUNKS/chunk-003.txt"),
            entry,
        };
        assert_eq!(
            format_progress(&chunk),
            "✓ chunk-003.txt: lines 951-1000 (50 lines)"
        );
    }

    #[test]
    fn test_human_summary() {
        let text = format_human(&summary());
        assert_eq!(
            text,
            "\n✓ Index created: CHUNKS/INDEX.txt\n\
             \nSummary:\n\
             \x20 Total lines: 1000\n\
             \x20 Total chunks: 3\n\
             \x20 Chunk size: 500 lines\n\
             \x20 Overlap: 5% (25 lines)"
        );
    }

    #[test]
    fn test_human_summary_without_index() {
        let mut summary = summary();
        summary.index_path = None;
        assert!(format_human(&summary).starts_with("\nSummary:\n"));
    }

    #[test]
    fn test_plan_table() {
        let table = format_plan(&summary());
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "Chunk   1: Lines     1-  500 (500 lines)");
    }

    #[test]
    fn test_json_summary() {
        let json: serde_json::Value = serde_json::from_str(&format_json(&summary())).unwrap();
        assert_eq!(json["total_lines"], 1000);
        assert_eq!(json["total_chunks"], 3);
        assert_eq!(json["overlap_lines"], 25);
        assert_eq!(json["index_path"], "CHUNKS/INDEX.txt");
        assert_eq!(json["chunks"][1]["start_line"], 476);
        assert_eq!(json["chunks"][0]["overlap_lines"], 0);
    }
}
