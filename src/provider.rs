//! Document tree providers.
//!
//! The scanner never fetches anything itself: a provider turns a source id
//! (a book's `file_name`) into a parsed [`DocumentTree`], or fails with a
//! single [`RetrievalError`].

use crate::dom::DocumentTree;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("book source not found: {source_id}")]
    NotFound { source_id: String },

    #[error("book source {source_id} resolves outside the books root {root}")]
    OutsideRoot { source_id: String, root: PathBuf },

    #[error("book source {source_id} is {size} bytes, limit is {limit}")]
    TooLarge {
        source_id: String,
        size: u64,
        limit: u64,
    },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait DocumentTreeProvider {
    fn load(&self, source_id: &str) -> Result<DocumentTree, RetrievalError>;
}

/// Loads book HTML from files below a root directory.
#[derive(Debug, Clone)]
pub struct FileTreeProvider {
    root: PathBuf,
    max_bytes: Option<u64>,
}

impl FileTreeProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_bytes: None,
        }
    }

    /// Refuse sources larger than `limit` bytes.
    pub fn with_max_bytes(mut self, limit: u64) -> Self {
        self.max_bytes = Some(limit);
        self
    }

    /// Resolve a source id to a canonical path that stays inside the root.
    fn resolve(&self, source_id: &str) -> Result<PathBuf, RetrievalError> {
        let root = self.root.canonicalize().map_err(|source| RetrievalError::Io {
            path: self.root.clone(),
            source,
        })?;

        let candidate = root.join(source_id);
        let canonical = candidate.canonicalize().map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RetrievalError::NotFound {
                    source_id: source_id.to_string(),
                }
            } else {
                RetrievalError::Io {
                    path: candidate.clone(),
                    source,
                }
            }
        })?;

        if !canonical.starts_with(&root) {
            return Err(RetrievalError::OutsideRoot {
                source_id: source_id.to_string(),
                root,
            });
        }

        Ok(canonical)
    }
}

impl DocumentTreeProvider for FileTreeProvider {
    fn load(&self, source_id: &str) -> Result<DocumentTree, RetrievalError> {
        let path = self.resolve(source_id)?;

        if let Some(limit) = self.max_bytes {
            let size = fs::metadata(&path)
                .map_err(|source| RetrievalError::Io {
                    path: path.clone(),
                    source,
                })?
                .len();
            if size > limit {
                return Err(RetrievalError::TooLarge {
                    source_id: source_id.to_string(),
                    size,
                    limit,
                });
            }
        }

        tracing::info!(path = %path.display(), "opening book");
        let source = fs::read_to_string(&path).map_err(|source| RetrievalError::Io {
            path: path.clone(),
            source,
        })?;
        let tree = DocumentTree::parse(&source);
        tracing::info!(path = %path.display(), "opened book");

        Ok(tree)
    }
}

/// Serves book HTML held in memory, keyed by source id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    sources: HashMap<String, String>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source_id: impl Into<String>, html: impl Into<String>) {
        self.sources.insert(source_id.into(), html.into());
    }

    pub fn with_source(mut self, source_id: impl Into<String>, html: impl Into<String>) -> Self {
        self.insert(source_id, html);
        self
    }
}

impl DocumentTreeProvider for InMemoryProvider {
    fn load(&self, source_id: &str) -> Result<DocumentTree, RetrievalError> {
        self.sources
            .get(source_id)
            .map(|html| DocumentTree::parse(html))
            .ok_or_else(|| RetrievalError::NotFound {
                source_id: source_id.to_string(),
            })
    }
}
