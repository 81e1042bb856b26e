use crate::selector::TextMatch;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CatalogConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if self.books.is_empty() {
            issues.push(ValidationIssue::EmptyBookList);
        }

        let mut seen = HashSet::new();
        for book in &self.books {
            let name = book.book_name.trim();
            if name.is_empty() {
                issues.push(ValidationIssue::MissingField {
                    book: None,
                    field: "book_name",
                });
            } else if !seen.insert(name) {
                issues.push(ValidationIssue::DuplicateBook {
                    book: name.to_string(),
                });
            }

            if book.file_name.trim().is_empty() {
                issues.push(ValidationIssue::MissingField {
                    book: (!name.is_empty()).then(|| name.to_string()),
                    field: "file_name",
                });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Settings {
    /// Directory holding the book HTML files, relative to the catalog file.
    #[serde(default)]
    pub books_root: Option<PathBuf>,
    #[serde(default)]
    pub text_match: TextMatch,
}

/// A searchable book. Keys beyond name and file are passed through to responses.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Book {
    #[serde(default, rename(serialize = "bookName"))]
    pub book_name: String,
    #[serde(default, rename(serialize = "fileName"))]
    pub file_name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Book {
    pub fn new(book_name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            book_name: book_name.into(),
            file_name: file_name.into(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyBookList,
    MissingField {
        book: Option<String>,
        field: &'static str,
    },
    DuplicateBook {
        book: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyBookList => write!(f, "catalog contains no books"),
            ValidationIssue::MissingField { book, field } => match book {
                Some(name) => write!(f, "book '{name}' missing required field '{field}'"),
                None => write!(f, "book missing required field '{field}'"),
            },
            ValidationIssue::DuplicateBook { book } => {
                write!(f, "book '{book}' is listed more than once")
            }
        }
    }
}
