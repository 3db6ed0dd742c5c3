//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading trace logs
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read trace log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during plot rendering
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Plot backend error: {0}")]
    Backend(String),

    #[error("Invalid plot configuration: {0}")]
    InvalidConfig(String),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while extracting assembly context
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("Failed to read assembly listing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while loading a plot configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Plot config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),
}
