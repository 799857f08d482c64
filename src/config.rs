use crate::error::ConfigError;
use serde::Serialize;
use std::path::PathBuf;

/// Directory chunks are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "CHUNKS";

/// Lines per chunk when none is given
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Overlap between consecutive chunks, in percent of the chunk size
pub const DEFAULT_OVERLAP_PERCENT: u32 = 5;

/// Everything a single chunking run needs, fixed at startup
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Source text file
    pub input: PathBuf,
    /// Destination directory, created if absent
    pub output_dir: PathBuf,
    /// Lines per chunk
    pub chunk_size: usize,
    /// Overlap percent (0-100)
    pub overlap_percent: u32,
}

impl RunConfig {
    /// Create a config for `input` with default output dir, size and overlap
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap_percent: DEFAULT_OVERLAP_PERCENT,
        }
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set lines per chunk
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set overlap percent
    pub fn overlap_percent(mut self, percent: u32) -> Self {
        self.overlap_percent = percent;
        self
    }

    /// Validate the chunking parameters and derive overlap and step
    pub fn settings(&self) -> Result<ChunkSettings, ConfigError> {
        ChunkSettings::new(self.chunk_size, self.overlap_percent)
    }
}

/// Validated chunking parameters.
///
/// Construction is the only place the window arithmetic is checked, so a
/// `ChunkSettings` value always advances by at least one line per chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkSettings {
    chunk_size: usize,
    overlap_percent: u32,
    overlap_lines: usize,
    step: usize,
}

impl ChunkSettings {
    pub fn new(chunk_size: usize, overlap_percent: u32) -> Result<Self, ConfigError> {
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if overlap_percent > 100 {
            return Err(ConfigError::OverlapOutOfRange {
                percent: overlap_percent,
            });
        }

        let overlap_lines = overlap_lines_for(chunk_size, overlap_percent);
        if overlap_lines >= chunk_size {
            return Err(ConfigError::NonAdvancing {
                chunk_size,
                overlap_lines,
            });
        }

        Ok(Self {
            chunk_size,
            overlap_percent,
            overlap_lines,
            step: chunk_size - overlap_lines,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap_percent(&self) -> u32 {
        self.overlap_percent
    }

    /// Lines repeated from the previous chunk (always at least one)
    pub fn overlap_lines(&self) -> usize {
        self.overlap_lines
    }

    /// Advance between consecutive chunk starts
    pub fn step(&self) -> usize {
        self.step
    }
}

/// `max(1, floor(chunk_size * percent / 100))`
fn overlap_lines_for(chunk_size: usize, overlap_percent: u32) -> usize {
    let floored = (chunk_size as u128 * overlap_percent as u128) / 100;
    (floored as usize).max(1)
}
