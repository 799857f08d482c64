use crate::error::ChunkError;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// A text file held in memory as its lines.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`, and keeps that terminator, so
/// writing the lines back out reproduces the source bytes exactly. A trailing
/// line with no terminator stays that way.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceDocument {
    /// Read a whole UTF-8 file into memory
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChunkError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ChunkError::InputNotFound(path.to_path_buf()),
            _ => ChunkError::io(path, e),
        })?;

        let text = String::from_utf8(bytes).map_err(|_| ChunkError::Decode {
            path: path.to_path_buf(),
        })?;

        Ok(Self::from_text(path, &text))
    }

    /// Build a document from text already in memory
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: split_lines(text),
        }
    }

    /// Path as given by the caller
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Basename of the source path, used in chunk headers
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines in a zero-based half-open range
    pub fn lines(&self, range: Range<usize>) -> &[String] {
        &self.lines[range]
    }
}

/// Split after every line terminator, keeping it on its line
fn split_lines(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => i + 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => i + 2,
            b'\r' => i + 1,
            _ => {
                i += 1;
                continue;
            }
        };
        // Terminators are ASCII, so `end` is always a char boundary
        lines.push(text[start..end].to_owned());
        start = end;
        i = end;
    }

    if start < bytes.len() {
        lines.push(text[start..].to_owned());
    }
    lines
}
