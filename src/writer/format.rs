use crate::chunker::{ChunkNumber, ChunkPlan, ChunkPlanEntry};
use chrono::{NaiveDateTime, Timelike};
use std::fmt::Write;
use std::path::Path;

/// Horizontal rule used in headers and the index
pub const RULE: &str =
    "================================================================================";

/// `chunk-001.txt`, `chunk-002.txt`, ...
pub fn chunk_file_name(number: ChunkNumber) -> String {
    format!("chunk-{:03}.txt", number)
}

/// Local ISO-8601, e.g. `2024-03-01T09:15:00.123456`.
///
/// The fraction is left off when the microsecond part is zero.
pub fn iso_timestamp(timestamp: &NaiveDateTime) -> String {
    if timestamp.nanosecond() / 1_000 == 0 {
        timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        timestamp.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Metadata block written at the top of every chunk file, ending in a blank line
pub fn render_chunk_header(
    file_name: &str,
    entry: &ChunkPlanEntry,
    plan: &ChunkPlan,
    created: &str,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "CHUNK METADATA");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Filename: {}", file_name);
    let _ = writeln!(out, "Chunk Number: {} of {}", entry.number, plan.len());
    let _ = writeln!(
        out,
        "Source Lines: {}-{} (total file: {} lines)",
        entry.start_line, entry.end_line, plan.total_lines
    );
    let _ = writeln!(out, "Chunk Lines: {}", entry.line_count);
    let _ = writeln!(
        out,
        "Overlap with Previous: {} lines ({}%)",
        entry.overlap_lines,
        plan.settings.overlap_percent()
    );
    let _ = writeln!(out, "Created: {}", created);
    let _ = writeln!(out, "{RULE}");
    out.push('\n');
    out
}

/// Contents of `INDEX.txt`
pub fn render_index(source: &Path, plan: &ChunkPlan, created: &str) -> String {
    let settings = &plan.settings;
    let mut out = String::new();

    let _ = writeln!(out, "FILE CHUNKING INDEX");
    let _ = writeln!(out, "{RULE}\n");
    let _ = writeln!(out, "Original File: {}", source.display());
    let _ = writeln!(out, "Total Lines: {}", plan.total_lines);
    let _ = writeln!(out, "Chunk Size: {} lines", settings.chunk_size());
    let _ = writeln!(
        out,
        "Overlap: {}% ({} lines)",
        settings.overlap_percent(),
        settings.overlap_lines()
    );
    let _ = writeln!(out, "Total Chunks: {}", plan.len());
    let _ = writeln!(out, "Created: {}\n", created);
    let _ = writeln!(out, "{RULE}\n");

    for entry in plan.iter() {
        out.push_str(&index_line(entry));
        out.push('\n');
    }

    out
}

/// One row of the index table
pub(crate) fn index_line(entry: &ChunkPlanEntry) -> String {
    let mut line = format!(
        "Chunk {:>3}: Lines {:>5}-{:>5} ({:>3} lines)",
        entry.number, entry.start_line, entry.end_line, entry.line_count
    );
    if entry.overlap_lines > 0 {
        let _ = write!(
            line,
            " [Overlap: {} lines from previous]",
            entry.overlap_lines
        );
    }
    line
}
