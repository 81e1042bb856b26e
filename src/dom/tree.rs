use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Attribute carrying the structural role of an element.
pub const DATA_TYPE: &str = "data-type";

const SECTION_SELECTOR_STR: &str = r#"[data-type="composite-page"], [data-type="page"]"#;

static SECTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SECTION_SELECTOR_STR).expect("Failed to parse section selector - this is a bug")
});

/// A parsed, read-only book document.
///
/// Trees are produced per request by a
/// [`DocumentTreeProvider`](crate::provider::DocumentTreeProvider) and
/// dropped once the scan completes.
pub struct DocumentTree {
    html: Html,
}

impl DocumentTree {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Section elements (`composite-page` and `page`) in document order.
    pub fn sections(&self) -> Vec<ElementRef<'_>> {
        self.html.select(&SECTION_SELECTOR).collect()
    }
}

impl std::fmt::Debug for DocumentTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentTree")
            .field("root", &self.root().value().name())
            .finish_non_exhaustive()
    }
}
