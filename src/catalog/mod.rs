pub mod loader;
pub mod schema;
pub mod source;

pub use loader::{load_from_path, load_from_str, ConfigError};
pub use schema::{Book, CatalogConfig, Settings, ValidationError, ValidationIssue};
pub use source::{Catalog, SourceCatalog};
