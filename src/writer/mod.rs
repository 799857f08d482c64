mod format;


pub use format::{RULE, chunk_file_name, iso_timestamp, render_chunk_header, render_index};
pub(crate) use format::index_line;

use crate::chunker::{ChunkPlan, ChunkPlanEntry};
use crate::error::ChunkError;
use crate::source::SourceDocument;
use chrono::{Local, NaiveDateTime};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the summary file written next to the chunks
pub const INDEX_FILE_NAME: &str = "INDEX.txt";

/// A chunk file that has been written to disk
#[derive(Debug, Clone)]
pub struct WrittenChunk {
    pub file_name: String,
    pub path: PathBuf,
    pub entry: ChunkPlanEntry,
}

/// Everything produced by one `write_all` call
#[derive(Debug, Clone)]
pub struct WriteReport {
    pub index_path: PathBuf,
    pub chunks: Vec<WrittenChunk>,
}

/// Writes chunk files and the index into an output directory
pub struct ArtifactWriter {
    output_dir: PathBuf,
    timestamp: Option<NaiveDateTime>,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            timestamp: None,
        }
    }

    /// Stamp every artifact with a fixed time instead of the wall clock
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE_NAME)
    }

    /// Write one file per plan entry, then the index.
    ///
    /// `on_chunk` is called after each chunk file is on disk. Files already
    /// written are left in place if a later write fails.
    pub fn write_all<F>(
        &self,
        doc: &SourceDocument,
        plan: &ChunkPlan,
        mut on_chunk: F,
    ) -> Result<WriteReport, ChunkError>
    where
        F: FnMut(&WrittenChunk),
    {
        fs::create_dir_all(&self.output_dir).map_err(|e| ChunkError::io(&self.output_dir, e))?;

        let mut chunks = Vec::with_capacity(plan.len());
        for entry in plan.iter() {
            let written = self.write_chunk(doc, plan, entry)?;
            on_chunk(&written);
            chunks.push(written);
        }

        let index_path = self.index_path();
        let index = render_index(doc.path(), plan, &self.now());
        fs::write(&index_path, index).map_err(|e| ChunkError::io(&index_path, e))?;

        info!(
            chunks = chunks.len(),
            index = %index_path.display(),
            "Chunking complete"
        );

        Ok(WriteReport { index_path, chunks })
    }

    fn write_chunk(
        &self,
        doc: &SourceDocument,
        plan: &ChunkPlan,
        entry: &ChunkPlanEntry,
    ) -> Result<WrittenChunk, ChunkError> {
        let file_name = chunk_file_name(entry.number);
        let path = self.output_dir.join(&file_name);

        let header = render_chunk_header(&doc.file_name(), entry, plan, &self.now());

        let file = File::create(&path).map_err(|e| ChunkError::io(&path, e))?;
        let mut out = BufWriter::new(file);
        out.write_all(header.as_bytes())
            .map_err(|e| ChunkError::io(&path, e))?;
        for line in doc.lines(entry.range()) {
            out.write_all(line.as_bytes())
                .map_err(|e| ChunkError::io(&path, e))?;
        }
        out.flush().map_err(|e| ChunkError::io(&path, e))?;

        debug!(
            file = %file_name,
            start = entry.start_line,
            end = entry.end_line,
            "Wrote chunk"
        );

        Ok(WrittenChunk {
            file_name,
            path,
            entry: *entry,
        })
    }

    fn now(&self) -> String {
        let timestamp = self.timestamp.unwrap_or_else(|| Local::now().naive_local());
        iso_timestamp(&timestamp)
    }
}
