use crate::selector::errors::SelectorError;
use crate::selector::parser::{HybridSelector, PseudoOp, HAS_TEXT};
use crate::selector::plan::compile_structural;
use scraper::Html;
use serde::Serialize;

thread_local! {
    // Guaranteed empty; only used to drive selectors through the engine.
    static REFERENCE_TREE: Html = Html::new_document();
}

/// Result of a cheap syntax check on a hybrid selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub ok: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub const OK_MESSAGE: &'static str = "OK";

    pub fn success() -> Self {
        Self {
            ok: true,
            message: Self::OK_MESSAGE.to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Check a selector's syntax without touching any real document.
///
/// Selectors carrying `:hasText` are accepted without looking further;
/// everything else is parsed and each structural part is probed against
/// an empty reference tree.
pub fn validate_selector(selector: &str) -> ValidationOutcome {
    match check_selector(selector) {
        Ok(()) => ValidationOutcome::success(),
        Err(err) => {
            if let SelectorError::Malformed { message, .. } = &err {
                tracing::warn!(%selector, %message, "provided selector is not valid");
            } else {
                tracing::warn!(%selector, error = %err, "selector rejected");
            }
            ValidationOutcome::failure(err.to_string())
        }
    }
}

/// Same policy as [`validate_selector`], reported as a `Result`.
pub fn check_selector(selector: &str) -> Result<(), SelectorError> {
    if selector.is_empty() {
        return Err(SelectorError::Empty);
    }

    if selector.contains(HAS_TEXT) {
        return Ok(());
    }

    let parsed = HybridSelector::parse(selector)?;
    probe(parsed.base())?;
    if let PseudoOp::Has(inner) = parsed.pseudo_op() {
        probe(inner)?;
    }

    Ok(())
}

fn probe(selector: &str) -> Result<(), SelectorError> {
    let compiled = compile_structural(selector)?;
    let hits = REFERENCE_TREE.with(|tree| tree.select(&compiled).count());
    tracing::trace!(%selector, hits, "probed selector against reference tree");
    Ok(())
}
