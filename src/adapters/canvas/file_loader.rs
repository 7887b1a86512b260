//! Canvas File Loader - Reads JSON or YAML canvas files into raw payloads.
//!
//! The format is chosen by file extension. Loading only produces a
//! `serde_json::Value`; record construction is the parser's job.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Maximum canvas file size (1 MB).
const MAX_FILE_SIZE_BYTES: u64 = 1024 * 1024;

/// Supported canvas file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detects the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Errors that can occur while loading a canvas file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("File {path} is too large ({size} bytes, max {max})")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Cannot parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Loads a canvas file as a raw payload.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_err)?.len();
    if size > MAX_FILE_SIZE_BYTES {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_FILE_SIZE_BYTES,
        });
    }

    let content = fs::read_to_string(path).map_err(io_err)?;
    let parse_err = |reason: String| LoadError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    match format {
        DocumentFormat::Json => serde_json::from_str(&content).map_err(|e| parse_err(e.to_string())),
        DocumentFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| parse_err(e.to_string())),
    }
}
