//! Display titles for book sections.
//!
//! A section's own title element is used as-is when it already carries a
//! numbering marker (`.os-number`). Otherwise the chapter heading two levels
//! above the title supplies context:
//!
//! 1. heading has a numbering marker: `"<number> <title>"`
//! 2. heading text is present and not `"Preface"`: `"Chapter: <heading> Module: <title>"`
//! 3. anything else: the title text unchanged

use crate::dom::{self, DATA_TYPE};
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

const TITLE_SELECTOR_STR: &str = r#"[data-type="document-title"]"#;
const CHAPTER_HEADING_SELECTOR_STR: &str = r#"h1[data-type="document-title"]"#;
const NUMBER_SELECTOR_STR: &str = ".os-number";

const METADATA: &str = "metadata";
const PREFACE: &str = "Preface";

/// Parent levels between a module title and the container holding its chapter heading.
const CHAPTER_LEVELS: usize = 2;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR).expect("Failed to parse title selector - this is a bug")
});

static CHAPTER_HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(CHAPTER_HEADING_SELECTOR_STR)
        .expect("Failed to parse chapter heading selector - this is a bug")
});

static NUMBER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(NUMBER_SELECTOR_STR).expect("Failed to parse number selector - this is a bug")
});

/// Resolve the display title of a section, or `None` if it has no title element.
pub fn resolve_title(section: ElementRef<'_>) -> Option<String> {
    let title = find_title_element(section)?;
    let title_text = dom::text_content(title);

    if dom::has_descendant_matching(title, &NUMBER_SELECTOR) {
        return Some(title_text);
    }

    let Some(heading) = dom::ancestor(title, CHAPTER_LEVELS)
        .and_then(|container| dom::query_first(container, &CHAPTER_HEADING_SELECTOR))
    else {
        return Some(title_text);
    };

    if let Some(number) = dom::query_first(heading, &NUMBER_SELECTOR) {
        return Some(format!("{} {}", dom::text_content(number), title_text));
    }

    let heading_text = dom::text_content(heading);
    if !heading_text.is_empty() && heading_text != PREFACE {
        return Some(format!("Chapter: {heading_text} Module: {title_text}"));
    }

    Some(title_text)
}

/// First `document-title` element of the section that is not part of its metadata block.
pub fn find_title_element(section: ElementRef<'_>) -> Option<ElementRef<'_>> {
    dom::query_all(section, &TITLE_SELECTOR)
        .into_iter()
        .find(|title| !inside_metadata(*title, section))
}

fn inside_metadata(element: ElementRef<'_>, section: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .take_while(|ancestor| *ancestor != section)
        .any(|ancestor| dom::attribute(ancestor, DATA_TYPE) == Some(METADATA))
}
