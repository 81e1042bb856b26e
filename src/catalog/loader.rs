//! Catalog loading.
//!
//! A catalog read from disk has its `books_root` anchored to the catalog
//! file's directory, so the rest of the crate never needs to know where
//! the file lived.

use crate::catalog::schema::{CatalogConfig, ValidationError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Origin label for catalogs parsed from a string.
const INLINE_ORIGIN: &str = "<inline>";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read catalog from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog TOML ({origin}): {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml_edit::de::Error,
    },

    #[error("invalid catalog ({origin}): {source}")]
    Validation {
        origin: String,
        #[source]
        source: ValidationError,
    },
}

pub fn load_from_str(input: &str) -> Result<CatalogConfig, ConfigError> {
    parse_catalog(input, INLINE_ORIGIN)
}

/// Load a catalog file and resolve its books root.
///
/// A relative `books_root` is taken relative to the directory holding the
/// catalog; a missing one defaults to that directory.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CatalogConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config = parse_catalog(&contents, &path.display().to_string())?;
    let catalog_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    config.settings.books_root = Some(match config.settings.books_root.take() {
        Some(root) if root.is_absolute() => root,
        Some(root) => catalog_dir.join(root),
        None => catalog_dir,
    });

    Ok(config)
}

fn parse_catalog(input: &str, origin: &str) -> Result<CatalogConfig, ConfigError> {
    let config: CatalogConfig =
        toml_edit::de::from_str(input).map_err(|source| ConfigError::Toml {
            origin: origin.to_string(),
            source,
        })?;
    config.validate().map_err(|source| ConfigError::Validation {
        origin: origin.to_string(),
        source,
    })?;
    Ok(config)
}
