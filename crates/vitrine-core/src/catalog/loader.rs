use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::record::RecordSet;
use super::value::Value;
use crate::error::{Error, Result};

/// Load the product catalog from `directory`.
///
/// Every `.csv` file directly inside the directory is a candidate. When more
/// than one exists, the lexicographically first file name wins; the others
/// are ignored.
///
/// # Errors
///
/// - [`Error::NoCatalogFound`] when the directory holds no candidate (or
///   does not exist).
/// - [`Error::MalformedCatalog`] when the selected file is not valid CSV.
pub fn load(directory: impl AsRef<Path>) -> Result<RecordSet> {
    let directory = directory.as_ref();
    let candidates = find_catalogs(directory);

    let Some((selected, skipped)) = candidates.split_first() else {
        return Err(Error::NoCatalogFound {
            directory: directory.to_path_buf(),
        });
    };
    for path in skipped {
        tracing::debug!("Ignoring additional catalog file: {}", path.display());
    }

    tracing::info!("Loading product data from: {}", selected.display());
    let records = read_csv(selected)?;

    tracing::info!("Loaded {} products from CSV", records.len());
    tracing::info!("CSV columns: {}", records.columns().join(", "));

    Ok(records)
}

/// List candidate catalog files in `directory`, sorted by file name.
///
/// A missing or unreadable directory yields an empty list.
pub fn find_catalogs(directory: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_catalog_file(path))
        .collect();

    found.sort();
    found
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("csv"))
}

fn read_csv(path: &Path) -> Result<RecordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let headers = reader.headers().map_err(|e| csv_error(path, e))?;
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(Error::malformed(path, "missing header row"));
    }
    let columns = dedupe_columns(
        headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string()),
    );

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| csv_error(path, e))?;
        rows.push(row.iter().map(Value::parse).collect::<Vec<_>>());
    }

    Ok(RecordSet::from_rows(columns, rows)?.with_source(path))
}

/// Give repeated column names a numeric suffix (`name`, `name.1`, ...) so
/// every column stays addressable.
fn dedupe_columns(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    names
        .map(|name| {
            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name
            } else {
                format!("{name}.{count}")
            };
            *count += 1;
            unique
        })
        .collect()
}

fn csv_error(path: &Path, err: csv::Error) -> Error {
    if !err.is_io_error() {
        return Error::malformed(path, err);
    }
    match err.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        kind => Error::malformed(path, format!("{kind:?}")),
    }
}
