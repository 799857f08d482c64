use super::ChunkNumber;
use crate::config::ChunkSettings;
use crate::error::ConfigError;
use serde::Serialize;
use std::ops::Range;

/// Where one chunk sits in the source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkPlanEntry {
    /// Sequence number, starting at 1
    pub number: ChunkNumber,
    /// First source line (1-based, inclusive)
    pub start_line: usize,
    /// Last source line (1-based, inclusive)
    pub end_line: usize,
    /// Lines shared with the previous chunk (0 for the first chunk)
    pub overlap_lines: usize,
    /// Lines in this chunk
    pub line_count: usize,
}

impl ChunkPlanEntry {
    /// Zero-based half-open range into the source lines
    pub fn range(&self) -> Range<usize> {
        self.start_line - 1..self.end_line
    }
}

/// Ordered chunk boundaries for a file of `total_lines` lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkPlan {
    pub total_lines: usize,
    pub settings: ChunkSettings,
    pub entries: Vec<ChunkPlanEntry>,
}

impl ChunkPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChunkPlanEntry> {
        self.entries.iter()
    }
}

/// Validate the parameters, then plan
pub fn plan(
    total_lines: usize,
    chunk_size: usize,
    overlap_percent: u32,
) -> Result<ChunkPlan, ConfigError> {
    let settings = ChunkSettings::new(chunk_size, overlap_percent)?;
    Ok(plan_chunks(total_lines, &settings))
}

/// Slide a `chunk_size` window over `[0, total_lines)` in `step` increments.
///
/// The last window is clamped to the end of the file and the walk stops as
/// soon as a window reaches it, so every line is covered and no entry runs
/// past `total_lines`. An empty file yields an empty plan.
pub fn plan_chunks(total_lines: usize, settings: &ChunkSettings) -> ChunkPlan {
    let mut entries = Vec::new();
    let mut start = 0;

    while start < total_lines {
        let end = start.saturating_add(settings.chunk_size()).min(total_lines);
        let number = entries.len() + 1;

        entries.push(ChunkPlanEntry {
            number,
            start_line: start + 1,
            end_line: end,
            overlap_lines: if number == 1 {
                0
            } else {
                settings.overlap_lines()
            },
            line_count: end - start,
        });

        if end >= total_lines {
            break;
        }
        start += settings.step();
    }

    ChunkPlan {
        total_lines,
        settings: *settings,
        entries,
    }
}
