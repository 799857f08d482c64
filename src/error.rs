use std::path::PathBuf;
use thiserror::Error;

/// Invalid chunking parameters, detected before any file is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error("Overlap percent must be between 0 and 100 (got {percent})")]
    OverlapOutOfRange { percent: u32 },

    #[error(
        "Overlap of {overlap_lines} lines leaves no room to advance with chunk size {chunk_size}"
    )]
    NonAdvancing {
        chunk_size: usize,
        overlap_lines: usize,
    },
}

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("File is not valid UTF-8: {}", path.display())]
    Decode { path: PathBuf },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChunkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
