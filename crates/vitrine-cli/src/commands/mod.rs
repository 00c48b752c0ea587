pub mod ask;
pub mod catalog;
pub mod config;
pub mod query;
pub mod serve;

use anyhow::{Context, Result};
use vitrine_assist::Config;
use vitrine_search::RelevanceIndex;

pub use ask::run_ask;
pub use catalog::show_catalog;
pub use query::run_query;
pub use serve::run_serve;

/// Load the catalog and build the relevance index.
///
/// Every failure here is fatal: nothing is served without an index.
pub fn build_index(config: &Config) -> Result<RelevanceIndex> {
    let records = vitrine_core::load(&config.catalog_dir).with_context(|| {
        format!(
            "Failed to load product catalog from {}",
            config.catalog_dir.display()
        )
    })?;

    RelevanceIndex::build(records).context("Failed to build relevance index")
}
