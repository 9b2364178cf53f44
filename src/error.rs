use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the whole build.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read apps directory {path}: {source}")]
    ReadAppsDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write manifest {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to load title collation data: {0}")]
    Collator(String),
}

/// Failures scoped to a single app folder. These are logged, never propagated.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Error reading {folder}: {source}")]
    Stat {
        folder: String,
        source: std::io::Error,
    },

    #[error("Error checking {file} in {folder}: {source}")]
    EntryCheck {
        folder: String,
        file: String,
        source: std::io::Error,
    },

    #[error("Error reading info.json in {folder}: {source}")]
    DescriptorRead {
        folder: String,
        source: std::io::Error,
    },

    #[error("Error reading info.json in {folder}: {source}")]
    DescriptorParse {
        folder: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ManifestError>;
