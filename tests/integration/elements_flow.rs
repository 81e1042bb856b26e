use super::fixtures_dir;
use book_elements::{
    find_elements, Catalog, ElementsError, ElementsQuery, FileTreeProvider, RetrievalError,
    SelectorError, SourceCatalog,
};
use std::fs;
use tempfile::TempDir;

fn fixture_catalog() -> Catalog {
    Catalog::from_path(fixtures_dir().join("books.toml")).expect("fixture catalog loads")
}

fn fixture_provider(catalog: &Catalog) -> FileTreeProvider {
    FileTreeProvider::new(catalog.books_root().expect("catalog has a books root"))
}

#[test]
fn catalog_fixture_resolves_books_root() {
    let catalog = fixture_catalog();
    assert_eq!(
        catalog.books_root(),
        Some(fixtures_dir().join("books").as_path())
    );
    assert_eq!(catalog.books().len(), 2);
}

#[test]
fn request_from_raw_parameters() {
    let catalog = fixture_catalog();
    let provider = fixture_provider(&catalog);
    let query = ElementsQuery::from_request("College_Physics", "div[data-type='note']:hasText(Step)");

    let report = find_elements(&catalog, &provider, &query, catalog.settings().text_match)
        .expect("request succeeds");

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.total_instances(), 2);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Results": [
                {"section_name": "About OpenStax", "link": null, "instances": 1},
                {"section_name": "1.1 Physics: An Introduction", "link": null, "instances": 1},
            ],
            "bookName": "College Physics",
            "fileName": "college-physics.html",
            "subject": "Science",
            "reading_level": 2,
        })
    );
}

#[test]
fn untitled_section_serializes_null_name() {
    let catalog = fixture_catalog();
    let provider = fixture_provider(&catalog);
    let query = ElementsQuery::new("College Physics", "figure:has(img)");

    let report = find_elements(&catalog, &provider, &query, catalog.settings().text_match).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["Results"][4]["section_name"], serde_json::Value::Null);
}

#[test]
fn unknown_book_reported() {
    let catalog = fixture_catalog();
    let provider = fixture_provider(&catalog);
    let query = ElementsQuery::from_request("Organic_Chemistry", "figure");

    let err = find_elements(&catalog, &provider, &query, catalog.settings().text_match).unwrap_err();
    assert!(matches!(err, ElementsError::UnknownSource { ref name } if name == "Organic Chemistry"));
}

#[test]
fn nested_selector_reported() {
    let catalog = fixture_catalog();
    let provider = fixture_provider(&catalog);
    let query = ElementsQuery::new("College Physics", "table:has(img):has(p)");

    let err = find_elements(&catalog, &provider, &query, catalog.settings().text_match).unwrap_err();
    assert!(matches!(
        err,
        ElementsError::Selector(SelectorError::Nested { .. })
    ));
    assert_eq!(err.to_string(), "nested :has not supported");
}

#[test]
fn catalogued_but_missing_file() {
    let catalog = fixture_catalog();
    let provider = fixture_provider(&catalog);
    let query = ElementsQuery::new("Missing Book", "figure");

    let err = find_elements(&catalog, &provider, &query, catalog.settings().text_match).unwrap_err();
    assert!(matches!(
        err,
        ElementsError::Retrieval(RetrievalError::NotFound { .. })
    ));
}

#[test]
fn pattern_mode_from_catalog_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("books.toml"),
        r#"
[settings]
text_match = "pattern"

[[books]]
book_name = "Tiny"
file_name = "tiny.html"
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("tiny.html"),
        r#"<div data-type="page">
            <h2 data-type="document-title">Only Page</h2>
            <p>Example 12</p><p>Example twelve</p>
        </div>"#,
    )
    .unwrap();

    let catalog = Catalog::from_path(dir.path().join("books.toml")).unwrap();
    let provider = FileTreeProvider::new(catalog.books_root().unwrap());
    let query = ElementsQuery::new("Tiny", r"p:hasText(Example \d+)");

    let report = find_elements(&catalog, &provider, &query, catalog.settings().text_match).unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].title.as_deref(), Some("Only Page"));
    assert_eq!(report.results[0].instance_count, 1);
}
