use crate::selector::errors::SelectorError;
use std::fmt;
use std::str::FromStr;

/// Marker of the existential descendant pseudo-operator.
pub const HAS: &str = ":has";
/// Marker of the text-content pseudo-operator.
pub const HAS_TEXT: &str = ":hasText";

/// The single pseudo-operator a hybrid selector may carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoOp {
    None,
    /// `base:has(inner)` keeps base matches with a descendant matching `inner`.
    Has(String),
    /// `base:hasText(pattern)` keeps base matches whose text satisfies `pattern`.
    HasText(String),
}

/// A structural selector optionally extended with one pseudo-operator.
///
/// # Grammar
///
/// ```text
/// selector := base [ marker "(" argument ")" ]
/// marker   := ":hasText" | ":has"
/// ```
///
/// `:hasText` is recognized before `:has` since the former textually
/// contains the latter. Once a marker is found it may not appear again
/// anywhere in the remainder of the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridSelector {
    base: String,
    pseudo_op: PseudoOp,
}

impl HybridSelector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let Some((start, marker)) = find_marker(input) else {
            return Ok(Self {
                base: input.to_string(),
                pseudo_op: PseudoOp::None,
            });
        };

        let base = &input[..start];
        let rest = &input[start + marker.len()..];

        if rest.contains(marker) {
            return Err(SelectorError::Nested { marker });
        }

        let argument = parenthesized(rest, marker)?.to_string();
        let pseudo_op = if marker == HAS_TEXT {
            PseudoOp::HasText(argument)
        } else {
            PseudoOp::Has(argument)
        };

        Ok(Self {
            base: base.to_string(),
            pseudo_op,
        })
    }

    /// The structural part in front of the pseudo-operator (or the whole selector).
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn pseudo_op(&self) -> &PseudoOp {
        &self.pseudo_op
    }
}

impl FromStr for HybridSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HybridSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pseudo_op {
            PseudoOp::None => write!(f, "{}", self.base),
            PseudoOp::Has(inner) => write!(f, "{}{HAS}({inner})", self.base),
            PseudoOp::HasText(pattern) => write!(f, "{}{HAS_TEXT}({pattern})", self.base),
        }
    }
}

fn find_marker(input: &str) -> Option<(usize, &'static str)> {
    if let Some(start) = input.find(HAS_TEXT) {
        return Some((start, HAS_TEXT));
    }
    input.find(HAS).map(|start| (start, HAS))
}

fn parenthesized<'a>(rest: &'a str, marker: &'static str) -> Result<&'a str, SelectorError> {
    rest.trim_end()
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .ok_or(SelectorError::MissingArgument { marker })
}
