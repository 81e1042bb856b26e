//! Validate-then-scan request flow.
//!
//! A request either yields a complete [`ElementsReport`] or exactly one
//! [`ElementsError`]; nothing is retried and no partial results escape.
//! Checks run cheapest first: catalog lookup, selector syntax, and only
//! then document retrieval.

use crate::catalog::{Book, SourceCatalog};
use crate::provider::{DocumentTreeProvider, RetrievalError};
use crate::scan::{scan_document, SectionResult};
use crate::selector::{check_selector, QueryPlan, SelectorError, TextMatch};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElementsError {
    #[error(
        "couldn't find any book with name: {name}. \
         Maybe this book is not yet available for searching custom elements."
    )]
    UnknownSource { name: String },

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// A book name and selector as received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementsQuery {
    pub book_name: String,
    pub selector: String,
}

impl ElementsQuery {
    pub fn new(book_name: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            book_name: book_name.into(),
            selector: selector.into(),
        }
    }

    /// Normalize raw request parameters: underscores in the book name stand
    /// for spaces, and single quotes in the selector for double quotes.
    pub fn from_request(book_name: &str, element: &str) -> Self {
        Self {
            book_name: book_name.replace('_', " "),
            selector: element.replace('\'', "\""),
        }
    }
}

/// Per-section results followed by the catalog entry of the searched book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementsReport {
    #[serde(rename = "Results")]
    pub results: Vec<SectionResult>,
    #[serde(flatten)]
    pub book: Book,
}

impl ElementsReport {
    pub fn total_instances(&self) -> usize {
        self.results.iter().map(|r| r.instance_count).sum()
    }
}

pub fn find_elements<C, P>(
    catalog: &C,
    provider: &P,
    query: &ElementsQuery,
    text_match: TextMatch,
) -> Result<ElementsReport, ElementsError>
where
    C: SourceCatalog + ?Sized,
    P: DocumentTreeProvider + ?Sized,
{
    let book = catalog
        .lookup(&query.book_name)
        .ok_or_else(|| ElementsError::UnknownSource {
            name: query.book_name.clone(),
        })?;

    let plan = check_selector(&query.selector)
        .and_then(|()| QueryPlan::parse(&query.selector, text_match))
        .inspect_err(|err| {
            tracing::warn!(selector = %query.selector, error = %err, "selector rejected");
        })?;

    tracing::info!(
        selector = %query.selector,
        file = %book.file_name,
        "starting search"
    );
    let tree = provider.load(&book.file_name)?;
    let results = scan_document(&tree, &plan);

    Ok(ElementsReport {
        results,
        book: book.clone(),
    })
}
