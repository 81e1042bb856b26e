use crate::selector::TextPattern;
use scraper::{ElementRef, Selector};

/// All elements below `scope` matching `selector`, in document order.
///
/// The scope element itself is never part of the result, although
/// selectors may still reference its ancestors (as with `querySelectorAll`).
pub fn query_all<'a>(scope: ElementRef<'a>, selector: &Selector) -> Vec<ElementRef<'a>> {
    scope.select(selector).collect()
}

/// First element below `scope` matching `selector`.
pub fn query_first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

pub fn has_descendant_matching(element: ElementRef<'_>, selector: &Selector) -> bool {
    query_first(element, selector).is_some()
}

/// Text content of an element with whitespace runs collapsed to single spaces.
pub fn text_content(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    collapse_whitespace(&raw)
}

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn text_matches(element: ElementRef<'_>, pattern: &TextPattern) -> bool {
    pattern.is_match(&text_content(element))
}

/// Walk `levels` parents up from `element`; `None` if the walk leaves the element tree.
pub fn ancestor(element: ElementRef<'_>, levels: usize) -> Option<ElementRef<'_>> {
    let mut current = element;
    for _ in 0..levels {
        current = current.parent().and_then(ElementRef::wrap)?;
    }
    Some(current)
}

pub fn attribute<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}
