//! Relevance index error types.

use thiserror::Error;

/// Errors raised while building or querying the relevance index.
///
/// All of them indicate a misconfigured deployment rather than a transient
/// condition, so callers should treat them as fatal at startup.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The record set has no records, so no vocabulary can be fit.
    #[error("empty corpus: the catalog has no records to index")]
    EmptyCorpus,

    /// Records exist but none of them yields an indexable term.
    #[error("empty vocabulary: no indexable terms in {records} records")]
    EmptyVocabulary { records: usize },

    /// A query arrived before any index was installed.
    #[error("index not built: the relevance index is not ready")]
    IndexNotBuilt,
}

/// Convenience alias for index results.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
