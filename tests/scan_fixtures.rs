//! Table-driven scanner cases.
//!
//! Loads `tests/fixtures/scan_cases.json` and checks every case, reporting
//! all failures at once.

use autolinker::{scan_with, ScanOptions};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct ScanCase {
    section: String,
    text: String,
    spans: Vec<(u32, u32)>,
    #[serde(default)]
    suffixes: Option<Vec<String>>,
    #[serde(default)]
    schemes: Option<Vec<String>>,
}

fn load_cases() -> Vec<ScanCase> {
    let json = fs::read_to_string("tests/fixtures/scan_cases.json")
        .expect("Failed to read tests/fixtures/scan_cases.json");
    serde_json::from_str(&json).expect("Failed to parse scan_cases.json")
}

fn run_case(case: &ScanCase) -> Vec<(u32, u32)> {
    let builtin = ScanOptions::default();
    let suffixes: Vec<&str> = case
        .suffixes
        .as_deref()
        .map(|s| s.iter().map(String::as_str).collect())
        .unwrap_or_else(|| builtin.suffixes().to_vec());
    let schemes: Vec<&str> = case
        .schemes
        .as_deref()
        .map(|s| s.iter().map(String::as_str).collect())
        .unwrap_or_else(|| builtin.schemes().to_vec());
    let options = ScanOptions::new(&suffixes, &schemes).expect("invalid options in fixture");
    scan_with(&case.text, &options)
        .iter()
        .map(|s| (s.start, s.end))
        .collect()
}

#[test]
fn fixture_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    let failures: Vec<String> = cases
        .iter()
        .filter_map(|case| {
            let actual = run_case(case);
            (actual != case.spans).then(|| {
                format!(
                    "[{}] {:?}: expected {:?}, got {:?}",
                    case.section, case.text, case.spans, actual
                )
            })
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn fixture_spans_slice_cleanly() {
    for case in load_cases() {
        let chars = case.text.chars().count() as u32;
        for (start, end) in run_case(&case) {
            assert!(start < end && end <= chars, "{:?}", case.text);
        }
    }
}
