use super::load_fixture;
use book_elements::{scan_document, DocumentTree, QueryPlan, SectionResult, TextMatch};
use proptest::prelude::*;

fn textbook() -> DocumentTree {
    DocumentTree::parse(&load_fixture("books/college-physics.html"))
}

fn scan_with(selector: &str, mode: TextMatch) -> Vec<SectionResult> {
    let plan = QueryPlan::parse(selector, mode).expect("selector compiles");
    scan_document(&textbook(), &plan)
}

fn scan(selector: &str) -> Vec<(Option<String>, usize)> {
    scan_with(selector, TextMatch::Substring)
        .into_iter()
        .map(|r| (r.title, r.instance_count))
        .collect()
}

fn titled(title: &str, count: usize) -> (Option<String>, usize) {
    (Some(title.to_string()), count)
}

#[test]
fn section_titles_follow_chapter_context() {
    let results = scan("figure, table, dl, p");
    let titles: Vec<_> = results.iter().map(|(title, _)| title.clone()).collect();

    assert_eq!(
        titles,
        vec![
            Some("About OpenStax".to_string()),
            Some("1 Introduction".to_string()),
            Some("1.1 Physics: An Introduction".to_string()),
            Some("1.2 Physical Quantities and Units".to_string()),
            Some("1 Glossary".to_string()),
            Some("Chapter: Kinematics Module: Introduction to One-Dimensional Kinematics".to_string()),
            None,
        ]
    );
}

#[test]
fn plain_selector_counts_per_section() {
    assert_eq!(
        scan("figure"),
        vec![
            titled("About OpenStax", 1),
            titled("1 Introduction", 1),
            titled("1.2 Physical Quantities and Units", 1),
            titled("Chapter: Kinematics Module: Introduction to One-Dimensional Kinematics", 2),
            (None, 1),
        ]
    );
}

#[test]
fn has_counts_outer_matches_not_inner() {
    assert_eq!(
        scan("table:has(img)"),
        vec![
            titled("1.1 Physics: An Introduction", 1),
            titled("1.2 Physical Quantities and Units", 2),
        ]
    );

    // the same section holds four images
    let images = scan("img");
    assert_eq!(images[3], titled("1.2 Physical Quantities and Units", 4));
}

#[test]
fn has_drops_sections_without_qualifying_matches() {
    let results = scan("figure:has(img)");
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|(_, count)| *count == 1));
}

#[test]
fn has_text_substring() {
    assert_eq!(
        scan(".howto:hasText(Step)"),
        vec![
            titled("About OpenStax", 1),
            titled("1.1 Physics: An Introduction", 1),
        ]
    );
    assert_eq!(
        scan(".howto:hasText(Step 2)"),
        vec![titled("1.1 Physics: An Introduction", 1)]
    );
}

#[test]
fn has_text_pattern_mode() {
    let results = scan_with(r".howto:hasText(Step \d+: identify)", TextMatch::Pattern);
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].title.as_deref(),
        Some("1.1 Physics: An Introduction")
    );

    // the same text is literal in substring mode
    assert!(scan(r".howto:hasText(Step \d+: identify)").is_empty());
}

#[test]
fn attribute_selectors() {
    assert_eq!(
        scan(r#"div[data-type="note"]"#),
        vec![
            titled("About OpenStax", 1),
            titled("1.1 Physics: An Introduction", 2),
        ]
    );
}

#[test]
fn metadata_outside_sections_is_ignored() {
    assert!(scan("[itemprop=\"name\"]").is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn scans_are_idempotent(
        selector in prop::sample::select(vec![
            "figure", "img", "table:has(img)", "figure:has(span)",
            ".howto:hasText(Step)", "p", "dl:has(dt)",
        ])
    ) {
        let tree = textbook();
        let plan = QueryPlan::parse(selector, TextMatch::Substring).unwrap();
        prop_assert_eq!(scan_document(&tree, &plan), scan_document(&tree, &plan));
    }

    #[test]
    fn reported_counts_are_positive(
        selector in prop::sample::select(vec!["figure", "img", "table", "span", "h2"])
    ) {
        let results = scan_with(selector, TextMatch::Substring);
        prop_assert!(results.iter().all(|r| r.instance_count >= 1 && r.link.is_none()));
    }
}
