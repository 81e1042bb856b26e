//! Per-section evaluation of a compiled hybrid selector.

use crate::dom::{self, DocumentTree};
use crate::selector::{MatchFilter, QueryPlan};
use crate::title::resolve_title;
use scraper::ElementRef;
use serde::Serialize;

/// One reported section. Sections without matches are never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionResult {
    #[serde(rename = "section_name")]
    pub title: Option<String>,
    /// Reserved; always `None`.
    pub link: Option<String>,
    #[serde(rename = "instances")]
    pub instance_count: usize,
}

/// Scan every section of `tree` and report those containing matches, in document order.
pub fn scan_document(tree: &DocumentTree, plan: &QueryPlan) -> Vec<SectionResult> {
    let sections = tree.sections();
    tracing::info!(sections = sections.len(), "found sections");

    let results: Vec<SectionResult> = sections
        .into_iter()
        .filter_map(|section| scan_section(section, plan))
        .collect();

    tracing::info!(
        matched = results.len(),
        selector = %plan.selector(),
        "found sections with given selector"
    );
    results
}

pub fn scan_section(section: ElementRef<'_>, plan: &QueryPlan) -> Option<SectionResult> {
    let instance_count = match_set(section, plan).len();
    if instance_count == 0 {
        return None;
    }

    let title = resolve_title(section);
    tracing::debug!(title = ?title, instance_count, "section matched");

    Some(SectionResult {
        title,
        link: None,
        instance_count,
    })
}

/// Elements of `section` selected by `plan`.
///
/// Base matches are computed first; `:has` keeps those with a matching
/// descendant and `:hasText` those whose text satisfies the pattern.
pub fn match_set<'a>(section: ElementRef<'a>, plan: &QueryPlan) -> Vec<ElementRef<'a>> {
    let candidates = dom::query_all(section, plan.base());

    match plan.filter() {
        MatchFilter::All => candidates,
        MatchFilter::HasDescendant(inner) => candidates
            .into_iter()
            .filter(|candidate| dom::has_descendant_matching(*candidate, inner))
            .collect(),
        MatchFilter::HasText(pattern) => candidates
            .into_iter()
            .filter(|candidate| dom::text_matches(*candidate, pattern))
            .collect(),
    }
}
