//! Read-only query capability over parsed book HTML.
//!
//! Everything the scanner and title resolver need from a document goes
//! through these helpers, so the CSS engine (`scraper`) stays behind one seam.

pub mod query;
pub mod tree;

pub use query::{
    ancestor, attribute, collapse_whitespace, has_descendant_matching, query_all, query_first,
    text_content, text_matches,
};
pub use tree::{DocumentTree, DATA_TYPE};
