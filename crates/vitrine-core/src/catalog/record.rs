use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::value::Value;
use crate::error::{Error, Result};

/// One catalog entry: an ordered mapping from column name to value.
///
/// The column list is shared with the owning [`RecordSet`], so every record
/// in a set carries the same schema in the same declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Record {
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Look up a value by column name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// Iterate over `(column, value)` pairs in declared column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// The canonical text of every value in column order, joined by single
    /// spaces.
    #[must_use]
    pub fn combined_text(&self) -> String {
        self.values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Diagnostic summary of a loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogMetadata {
    pub source: Option<PathBuf>,
    pub row_count: usize,
    pub columns: Vec<String>,
}

/// The immutable in-memory catalog.
#[derive(Debug, Clone)]
pub struct RecordSet {
    source: Option<PathBuf>,
    columns: Arc<[String]>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Build a record set from in-memory rows.
    ///
    /// Every row must have exactly one value per column.
    pub fn from_rows<I, R>(columns: Vec<String>, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Value>,
    {
        let columns: Arc<[String]> = columns.into();
        let mut records = Vec::new();

        for (i, row) in rows.into_iter().enumerate() {
            let values: Vec<Value> = row.into_iter().collect();
            if values.len() != columns.len() {
                return Err(Error::malformed(
                    "<memory>",
                    format!(
                        "row {} has {} fields, expected {}",
                        i + 1,
                        values.len(),
                        columns.len()
                    ),
                ));
            }
            records.push(Record {
                columns: Arc::clone(&columns),
                values,
            });
        }

        Ok(Self {
            source: None,
            columns,
            records,
        })
    }

    #[must_use]
    pub(crate) fn with_source(mut self, source: &Path) -> Self {
        self.source = Some(source.to_path_buf());
        self
    }

    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata {
            source: self.source.clone(),
            row_count: self.records.len(),
            columns: self.columns.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
