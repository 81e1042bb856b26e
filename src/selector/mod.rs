//! Hybrid selector language.
//!
//! A hybrid selector is an ordinary CSS selector optionally followed by one
//! of two pseudo-operators that the CSS engine itself does not evaluate:
//!
//! - `X:has(Y)` keeps `X` matches having at least one descendant matching `Y`
//! - `X:hasText(T)` keeps `X` matches whose text content satisfies `T`
//!
//! Selectors are parsed into a [`HybridSelector`], then compiled into a
//! [`QueryPlan`] that the scanner evaluates per section.

pub mod errors;
pub mod parser;
pub mod plan;
pub mod validator;

pub use errors::SelectorError;
pub use parser::{HybridSelector, PseudoOp, HAS, HAS_TEXT};
pub use plan::{compile_structural, MatchFilter, QueryPlan, TextMatch, TextPattern};
pub use validator::{check_selector, validate_selector, ValidationOutcome};
