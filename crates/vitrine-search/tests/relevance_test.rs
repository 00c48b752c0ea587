//! Ranking behaviour of the relevance index over small catalogs.

use tempfile::TempDir;
use vitrine_core::{RecordSet, Value};
use vitrine_search::{RelevanceIndex, DEFAULT_THRESHOLD};

fn catalog(rows: &[(&str, &str)]) -> RecordSet {
    RecordSet::from_rows(
        vec!["name".to_string(), "desc".to_string()],
        rows.iter()
            .map(|(name, desc)| vec![Value::from(*name), Value::from(*desc)]),
    )
    .unwrap()
}

fn store() -> RelevanceIndex {
    RelevanceIndex::build(catalog(&[
        ("Red Shoe", "comfortable red running shoe"),
        ("Blue Hat", "warm blue winter hat"),
        ("Trail Shoe", "rugged waterproof trail running shoe"),
        ("Wool Scarf", "warm wool winter scarf in red"),
        ("Running Socks", "breathable socks for running"),
    ]))
    .unwrap()
}

fn name_of(result: &vitrine_search::ScoredRecord) -> String {
    result.record.get("name").unwrap().to_string()
}

/// Every record gets exactly one unit-length vector
#[test]
fn test_build_one_unit_vector_per_record() {
    let index = store();
    assert_eq!(index.len(), 5);
    for i in 0..index.len() {
        let norm = index.vector(i).unwrap().norm();
        assert!((norm - 1.0).abs() < 1e-9, "record {i} has norm {norm}");
    }
    assert!(index.vector(5).is_none());
}

/// Scores lie in [0, 1] and strictly above the threshold
#[test]
fn test_scores_are_bounded_and_above_threshold() {
    let index = store();
    for threshold in [0.0, 0.1, DEFAULT_THRESHOLD, 0.5] {
        for query in ["red", "running shoe", "warm winter", "blue wool socks"] {
            for result in index.query(query, threshold) {
                assert!(result.score > threshold);
                assert!((0.0..=1.0).contains(&result.score));
            }
        }
    }
}

/// Results are ordered by non-increasing score
#[test]
fn test_results_are_sorted_descending() {
    let index = store();
    let results = index.query("warm red running shoe", 0.0);
    assert!(results.len() > 2);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

/// Equal scores keep catalog order
#[test]
fn test_ties_keep_catalog_order() {
    let index = RelevanceIndex::build(catalog(&[
        ("Lamp", "brass desk lamp"),
        ("Mug", "ceramic coffee mug"),
        ("Lamp", "brass desk lamp"),
        ("Lamp", "brass desk lamp"),
    ]))
    .unwrap();

    let results = index.query("brass lamp", DEFAULT_THRESHOLD);
    let positions: Vec<usize> = results.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![0, 2, 3]);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[1].score, results[2].score);
}

/// A record's own combined text ranks it first with similarity ~1
#[test]
fn test_exact_combined_text_ranks_record_first() {
    let index = store();
    for position in 0..index.len() {
        let text = index.combined_text(position).unwrap().to_string();
        let results = index.query(&text, DEFAULT_THRESHOLD);
        assert_eq!(results[0].position, position, "query {text:?}");
        assert!((results[0].score - 1.0).abs() < 1e-9);
    }
}

/// No shared vocabulary means an empty result, not an error
#[test]
fn test_unrelated_query_is_empty() {
    let index = store();
    assert!(index.query("quantum chromodynamics", DEFAULT_THRESHOLD).is_empty());
    assert!(index.query("", DEFAULT_THRESHOLD).is_empty());
    assert!(index.query("the and of", 0.0).is_empty());
}

/// Repeating a query yields identical results
#[test]
fn test_query_is_idempotent() {
    let index = store();
    let first = index.query("warm running shoe", 0.0);
    let second = index.query("warm running shoe", 0.0);
    assert_eq!(first, second);
}

/// The threshold is supplied by the caller
#[test]
fn test_threshold_filters_results() {
    let index = store();
    let loose = index.query("red", 0.0);
    let strict = index.query("red", 0.9);
    assert!(loose.len() >= 2);
    assert!(strict.is_empty());
}

/// Scenario: "red running shoe" prefers the red shoe over the blue hat
#[test]
fn test_red_shoe_scenario() {
    let index = RelevanceIndex::build(catalog(&[
        ("Red Shoe", "comfortable red running shoe"),
        ("Blue Hat", "warm blue winter hat"),
    ]))
    .unwrap();

    let results = index.query("red running shoe", DEFAULT_THRESHOLD);
    assert_eq!(results.len(), 1);
    assert_eq!(name_of(&results[0]), "Red Shoe");
    assert!(results[0].score > 0.9);
}

/// Scenario: a one-record catalog and an unrelated query
#[test]
fn test_single_record_unrelated_query() {
    let index = RelevanceIndex::build(catalog(&[("Red Shoe", "comfortable red running shoe")]))
        .unwrap();
    assert!(index.query("vintage vinyl records", DEFAULT_THRESHOLD).is_empty());
}

/// Scenario: an empty catalog directory fails before any index exists
#[test]
fn test_empty_catalog_directory() {
    let dir = TempDir::new().unwrap();
    let err = vitrine_core::load(dir.path()).unwrap_err();
    assert!(matches!(err, vitrine_core::Error::NoCatalogFound { .. }));
}

/// Numeric columns take part in matching through their canonical text
#[test]
fn test_numeric_values_are_searchable() {
    let records = RecordSet::from_rows(
        vec!["name".to_string(), "size".to_string(), "price".to_string()],
        vec![
            vec![Value::from("Boot"), Value::Integer(42), Value::Float(89.5)],
            vec![Value::from("Boot"), Value::Integer(38), Value::Null],
        ],
    )
    .unwrap();
    let index = RelevanceIndex::build(records).unwrap();

    let results = index.query("boot size 42", DEFAULT_THRESHOLD);
    assert_eq!(results[0].position, 0);
}

/// A long barcode loaded from disk is found by its exact digits
#[test]
fn test_long_barcode_is_searchable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("products.csv"),
        "name,barcode\nRed Shoe,12345678901234567891\nBlue Hat,98765432109876543210\n",
    )
    .unwrap();
    let index = RelevanceIndex::build(vitrine_core::load(dir.path()).unwrap()).unwrap();

    let results = index.query("12345678901234567891", DEFAULT_THRESHOLD);
    assert_eq!(results.len(), 1);
    assert_eq!(name_of(&results[0]), "Red Shoe");
}
