// src/scan.rs
//! The scan pipeline: resolve the working directory, read each input,
//! extract its tags, and register the resulting source.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TagGraphError};
use crate::extract;
use crate::source::{SourceRegistry, Tag};

/// Resolves the current working directory with symlinks evaluated.
pub fn resolve_working_dir() -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|source| TagGraphError::WorkingDir { source })?;
    cwd.canonicalize()
        .map_err(|source| TagGraphError::WorkingDir { source })
}

/// Scans every input path into the registry. Inputs are interpreted
/// relative to the resolved working directory. Any read failure aborts
/// the whole run; a partially populated registry is never used.
pub fn scan_sources(inputs: &[PathBuf], registry: &mut SourceRegistry) -> Result<()> {
    let working_dir = resolve_working_dir()?;
    for input in inputs {
        scan_one(&working_dir, input, registry)?;
    }
    Ok(())
}

fn scan_one(working_dir: &Path, input: &Path, registry: &mut SourceRegistry) -> Result<()> {
    let path = working_dir.join(input);
    let bytes = fs::read(&path).map_err(|source| TagGraphError::SourceRead {
        source,
        path: path.clone(),
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let tags = extract::extract_tags(&content)
        .into_iter()
        .map(Tag::new)
        .collect();

    registry.register(&input.display().to_string(), path, tags);
    Ok(())
}
