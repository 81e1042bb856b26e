use crate::dom::collapse_whitespace;
use crate::selector::errors::SelectorError;
use crate::selector::parser::{HybridSelector, PseudoOp};
use regex::Regex;
use scraper::Selector;
use serde::Deserialize;

/// How the argument of `:hasText(...)` is tested against element text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextMatch {
    /// Plain substring test; whitespace runs in the argument count as one space.
    #[default]
    Substring,
    /// The argument is a regular expression searched anywhere in the text.
    Pattern,
}

/// A compiled `:hasText` argument.
#[derive(Debug, Clone)]
pub enum TextPattern {
    Substring(String),
    Pattern(Regex),
}

impl TextPattern {
    pub fn compile(pattern: &str, mode: TextMatch) -> Result<Self, SelectorError> {
        match mode {
            TextMatch::Substring => Ok(TextPattern::Substring(collapse_whitespace(pattern))),
            TextMatch::Pattern => Regex::new(pattern)
                .map(TextPattern::Pattern)
                .map_err(|err| SelectorError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: err.to_string(),
                }),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            TextPattern::Substring(needle) => text.contains(needle.as_str()),
            TextPattern::Pattern(regex) => regex.is_match(text),
        }
    }
}

/// Post-filter applied to the elements matched by the base selector.
#[derive(Debug, Clone)]
pub enum MatchFilter {
    All,
    HasDescendant(Selector),
    HasText(TextPattern),
}

/// A hybrid selector compiled against the structural selector engine.
#[derive(Debug, Clone)]
pub struct QueryPlan {
    selector: HybridSelector,
    base: Selector,
    filter: MatchFilter,
}

impl QueryPlan {
    pub fn compile(selector: &HybridSelector, text_match: TextMatch) -> Result<Self, SelectorError> {
        let base = compile_structural(selector.base())?;
        let filter = match selector.pseudo_op() {
            PseudoOp::None => MatchFilter::All,
            PseudoOp::Has(inner) => MatchFilter::HasDescendant(compile_structural(inner)?),
            PseudoOp::HasText(pattern) => {
                MatchFilter::HasText(TextPattern::compile(pattern, text_match)?)
            }
        };

        Ok(Self {
            selector: selector.clone(),
            base,
            filter,
        })
    }

    /// Parse and compile in one step.
    pub fn parse(input: &str, text_match: TextMatch) -> Result<Self, SelectorError> {
        Self::compile(&HybridSelector::parse(input)?, text_match)
    }

    pub fn selector(&self) -> &HybridSelector {
        &self.selector
    }

    pub fn base(&self) -> &Selector {
        &self.base
    }

    pub fn filter(&self) -> &MatchFilter {
        &self.filter
    }
}

/// Compile an ordinary CSS selector, mapping syntax errors to [`SelectorError::Malformed`].
pub fn compile_structural(selector: &str) -> Result<Selector, SelectorError> {
    Selector::parse(selector.trim()).map_err(|err| SelectorError::Malformed {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}
