// src/source.rs
//! Scanned documents and the per-run registry that owns them.

use sha2::{Digest, Sha256};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// A tag label. Value object: equality is by name alone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A scanned document: the name the caller supplied, the resolved
/// absolute path, and the deduplicated tags found in its content.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: String,
    pub path: PathBuf,
    pub tags: BTreeSet<Tag>,
}

/// Computes the registry identity of a source: SHA-256 of the resolved
/// path only. Content and caller-supplied name do not participate.
#[must_use]
pub fn source_id(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// All sources known to a single run, keyed by [`source_id`].
///
/// Owned by the run and passed by reference; never global state.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    entries: HashMap<String, Source>,
}

impl SourceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a source. Last write wins: a second registration for the
    /// same resolved path replaces the first entry wholesale, tag set
    /// included (no merge). Two caller names resolving to one path
    /// therefore collide into a single entry. This mirrors the identity
    /// rule (path only) and is intentional.
    pub fn register(&mut self, name: &str, path: PathBuf, tags: BTreeSet<Tag>) -> &Source {
        let id = source_id(&path);
        let source = Source {
            name: name.to_string(),
            path,
            tags,
        };
        self.entries.insert(id.clone(), source);
        &self.entries[&id]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&Source> {
        self.entries.get(&source_id(path))
    }

    /// Returns all sources sorted by name, so downstream output is
    /// deterministic regardless of map iteration order.
    #[must_use]
    pub fn sources(&self) -> Vec<&Source> {
        let mut sources: Vec<&Source> = self.entries.values().collect();
        sources.sort_by(|a, b| a.name.cmp(&b.name));
        sources
    }
}
