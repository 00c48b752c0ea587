//! Integration tests for loading a catalog from disk.

use std::fs;
use tempfile::TempDir;
use vitrine_core::{load, Error, Value};

fn write(dir: &TempDir, name: &str, contents: &[u8]) {
    fs::write(dir.path().join(name), contents).unwrap();
}

/// An empty directory has no catalog to load
#[test]
fn test_empty_directory_is_no_catalog_found() {
    let dir = TempDir::new().unwrap();
    write(&dir, "notes.txt", b"not a catalog");

    let err = load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::NoCatalogFound { .. }));
}

/// A directory that does not exist behaves like an empty one
#[test]
fn test_missing_directory_is_no_catalog_found() {
    let dir = TempDir::new().unwrap();
    let err = load(dir.path().join("data")).unwrap_err();
    assert!(matches!(err, Error::NoCatalogFound { directory } if directory.ends_with("data")));
}

/// Values are typed and columns keep their declared order
#[test]
fn test_load_products() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "products.csv",
        b"name,desc,price,stock\n\
          Red Shoe,comfortable red running shoe,49.99,3\n\
          Blue Hat,warm blue winter hat,,0\n",
    );

    let set = load(dir.path()).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.columns(), ["name", "desc", "price", "stock"]);
    assert_eq!(set.source(), Some(dir.path().join("products.csv").as_path()));

    let shoe = set.get(0).unwrap();
    assert_eq!(shoe.get("price"), Some(&Value::Float(49.99)));
    assert_eq!(shoe.get("stock"), Some(&Value::Integer(3)));

    let hat = set.get(1).unwrap();
    assert_eq!(hat.get("price"), Some(&Value::Null));
    assert_eq!(hat.combined_text(), "Blue Hat warm blue winter hat  0");
}

/// With several CSV files the lexicographically first one is used
#[test]
fn test_selects_lexicographically_first_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "b_products.csv", b"name\nSecond\n");
    write(&dir, "a_products.csv", b"name\nFirst\n");
    write(&dir, "c_products.csv", b"name\nThird\n");

    let set = load(dir.path()).unwrap();
    assert_eq!(set.get(0).unwrap().get("name"), Some(&Value::from("First")));
    assert!(set.source().unwrap().ends_with("a_products.csv"));
}

/// The extension match ignores case
#[test]
fn test_uppercase_extension_is_accepted() {
    let dir = TempDir::new().unwrap();
    write(&dir, "EXPORT.CSV", b"sku,title\n1,Lamp\n");

    let set = load(dir.path()).unwrap();
    assert_eq!(set.len(), 1);
}

/// Files in subdirectories are not candidates
#[test]
fn test_does_not_recurse() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("archive")).unwrap();
    fs::write(dir.path().join("archive/old.csv"), b"name\nOld\n").unwrap();

    let err = load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::NoCatalogFound { .. }));
}

/// Rows with the wrong number of fields are rejected
#[test]
fn test_inconsistent_row_width_is_malformed() {
    let dir = TempDir::new().unwrap();
    write(&dir, "products.csv", b"name,desc\nRed Shoe,red\nBlue Hat\n");

    let err = load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::MalformedCatalog { .. }), "got {err:?}");
}

/// Non-UTF-8 content is rejected
#[test]
fn test_invalid_encoding_is_malformed() {
    let dir = TempDir::new().unwrap();
    write(&dir, "products.csv", b"name,desc\nCaf\xe9,hot\n");

    let err = load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::MalformedCatalog { .. }), "got {err:?}");
}

/// An empty file has no header row
#[test]
fn test_empty_file_is_malformed() {
    let dir = TempDir::new().unwrap();
    write(&dir, "products.csv", b"");

    let err = load(dir.path()).unwrap_err();
    assert!(matches!(err, Error::MalformedCatalog { .. }), "got {err:?}");
}

/// A header without rows loads as an empty catalog
#[test]
fn test_header_only_loads_empty_set() {
    let dir = TempDir::new().unwrap();
    write(&dir, "products.csv", b"name,desc\n");

    let set = load(dir.path()).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.metadata().columns, vec!["name", "desc"]);
}

/// Quoted fields may contain separators and newlines
#[test]
fn test_quoted_fields() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "products.csv",
        b"name,desc\n\"Shoe, Red\",\"line one\nline two\"\n",
    );

    let set = load(dir.path()).unwrap();
    let record = set.get(0).unwrap();
    assert_eq!(record.get("name"), Some(&Value::from("Shoe, Red")));
    assert_eq!(record.get("desc"), Some(&Value::from("line one\nline two")));
}

/// Codes too long for an i64 keep their exact digits
#[test]
fn test_long_numeric_code_is_not_rounded() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "products.csv",
        b"name,barcode,price\nRed Shoe,12345678901234567891,49.99\n",
    );

    let set = load(dir.path()).unwrap();
    let shoe = set.get(0).unwrap();
    assert_eq!(shoe.get("barcode"), Some(&Value::from("12345678901234567891")));
    assert_eq!(shoe.get("price"), Some(&Value::Float(49.99)));
    assert_eq!(shoe.combined_text(), "Red Shoe 12345678901234567891 49.99");
}
