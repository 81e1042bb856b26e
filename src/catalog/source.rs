use crate::catalog::loader::{load_from_path, ConfigError};
use crate::catalog::schema::{Book, CatalogConfig, Settings};
use std::path::Path;

/// Read-only lookup of searchable books by name.
pub trait SourceCatalog {
    fn lookup(&self, name: &str) -> Option<&Book>;

    fn books(&self) -> &[Book];
}

/// File-backed catalog, loaded once and shared read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = load_from_path(path)?;
        tracing::debug!(path = %path.display(), books = config.books.len(), "loaded catalog");
        Ok(Self { config })
    }

    pub fn settings(&self) -> &Settings {
        &self.config.settings
    }

    /// Directory holding the book files. Always set for catalogs read from
    /// disk; in-memory catalogs only have one if configured.
    pub fn books_root(&self) -> Option<&Path> {
        self.config.settings.books_root.as_deref()
    }
}

impl SourceCatalog for Catalog {
    fn lookup(&self, name: &str) -> Option<&Book> {
        self.config.books.iter().find(|book| book.book_name == name)
    }

    fn books(&self) -> &[Book] {
        &self.config.books
    }
}
