//! Core catalog model for vitrine.
//!
//! This crate defines the tabular product catalog (`Value`, `Record`,
//! `RecordSet`) and the loader that reads it from a directory of CSV files
//! once at startup.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;

pub use catalog::{load, CatalogMetadata, Record, RecordSet, Value};
pub use error::{Error, Result};
