//! Process-wide handle to the relevance index.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{SearchError, SearchResult};
use crate::index::{RelevanceIndex, ScoredRecord};

/// Holds the single relevance index of the process.
///
/// The handle starts empty. A fully built index is published with
/// [`SharedIndex::install`]; queries take a cheap `Arc` snapshot under the
/// read lock and score without holding it, so a query never observes a
/// partially built index.
#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<Option<Arc<RelevanceIndex>>>,
}

impl SharedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that is ready immediately.
    pub fn ready(index: RelevanceIndex) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(index))),
        }
    }

    /// Publish a built index, returning the one it replaces.
    pub fn install(&self, index: RelevanceIndex) -> Option<Arc<RelevanceIndex>> {
        let previous = self.current.write().replace(Arc::new(index));
        tracing::debug!("Installed relevance index (replaced: {})", previous.is_some());
        previous
    }

    pub fn is_ready(&self) -> bool {
        self.current.read().is_some()
    }

    /// The current index.
    ///
    /// # Errors
    ///
    /// [`SearchError::IndexNotBuilt`] before an index has been installed.
    pub fn snapshot(&self) -> SearchResult<Arc<RelevanceIndex>> {
        self.current
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or(SearchError::IndexNotBuilt)
    }

    /// Query the current index. See [`RelevanceIndex::query`].
    ///
    /// # Errors
    ///
    /// [`SearchError::IndexNotBuilt`] before an index has been installed.
    pub fn query(&self, text: &str, threshold: f64) -> SearchResult<Vec<ScoredRecord>> {
        Ok(self.snapshot()?.query(text, threshold))
    }
}
