// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagGraphError {
    #[error("could not resolve working directory: {source}")]
    WorkingDir { source: std::io::Error },

    #[error("could not read source {path}: {source}")]
    SourceRead {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("could not write graph to {path}: {source}")]
    Render {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, TagGraphError>;
