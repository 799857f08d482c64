// Public API exports
pub mod chunker;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod writer;

// Re-export main types for convenience
pub use config::{
    ChunkSettings, DEFAULT_CHUNK_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_OVERLAP_PERCENT, RunConfig,
};
pub use error::{ChunkError, ConfigError};
pub use source::SourceDocument;

pub use chunker::{ChunkNumber, ChunkPlan, ChunkPlanEntry, plan, plan_chunks};

pub use writer::{ArtifactWriter, INDEX_FILE_NAME, WriteReport, WrittenChunk, chunk_file_name};

pub use pipeline::{dry_run, run, run_with_writer};
pub use report::{RunSummary, format_human, format_json, format_plan, format_progress};
