//! Integration tests against a textbook fixture laid out like published
//! book HTML (units, chapters, pages and end-of-chapter composite pages).

mod elements_flow;
mod textbook_scan;

use std::path::PathBuf;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|err| panic!("failed to load fixture {name}: {err}"))
}
