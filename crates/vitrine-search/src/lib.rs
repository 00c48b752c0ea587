//! Lexical relevance index for vitrine.
//!
//! Fits a TF-IDF vector space over the `combined_text` of every catalog
//! record once at startup, then ranks records against free-text queries by
//! cosine similarity. After it is built the index is read-only and can be
//! queried concurrently; [`SharedIndex`] is the handle the rest of the
//! process holds.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod index;
pub mod shared;
pub mod tokenizer;
pub mod vector;

pub use error::{SearchError, SearchResult};
pub use index::{RelevanceIndex, ScoredRecord, DEFAULT_THRESHOLD};
pub use shared::SharedIndex;
pub use vector::SparseVector;
