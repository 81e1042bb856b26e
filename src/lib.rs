//! Book Elements: count custom elements per section of structured textbooks.
//!
//! Books are HTML documents made of sections (`data-type="page"` and
//! `data-type="composite-page"`). A client supplies a *hybrid selector*
//! (plain CSS, optionally ending in `:has(...)` or `:hasText(...)`) and gets
//! back, for every section containing matches, the section's display title
//! and the number of matching elements.
//!
//! # Architecture
//!
//! - [`selector`] parses, validates and compiles hybrid selectors
//! - [`dom`] is the read-only query capability over a parsed book
//! - [`title`] derives a display title from a section's surroundings
//! - [`scan`] evaluates a compiled selector section by section
//! - [`catalog`] and [`provider`] are the injected collaborators that
//!   name books and load their trees
//! - [`elements`] ties these together into one validate-then-scan request
//!
//! # Example
//!
//! ```no_run
//! use book_elements::{find_elements, Catalog, ElementsQuery, FileTreeProvider};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::from_path("books.toml")?;
//! let provider = FileTreeProvider::new("books");
//! let query = ElementsQuery::new("College Physics", "table:has(img)");
//!
//! let report = find_elements(&catalog, &provider, &query, catalog.settings().text_match)?;
//! for section in &report.results {
//!     println!("{:?}: {}", section.title, section.instance_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod dom;
pub mod elements;
pub mod provider;
pub mod scan;
pub mod selector;
pub mod title;

// Re-exports
pub use catalog::{Book, Catalog, CatalogConfig, ConfigError, SourceCatalog};
pub use dom::DocumentTree;
pub use elements::{find_elements, ElementsError, ElementsQuery, ElementsReport};
pub use provider::{DocumentTreeProvider, FileTreeProvider, InMemoryProvider, RetrievalError};
pub use scan::{scan_document, SectionResult};
pub use selector::{
    check_selector, validate_selector, HybridSelector, PseudoOp, QueryPlan, SelectorError,
    TextMatch, ValidationOutcome,
};
pub use title::resolve_title;
