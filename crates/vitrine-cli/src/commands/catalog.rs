use anyhow::Result;
use vitrine_assist::Config;

/// Show catalog and index statistics.
pub fn show_catalog(config: &Config) -> Result<()> {
    let index = super::build_index(config)?;
    let metadata = index.records().metadata();

    println!("\n📦 Vitrine Catalog\n");
    if let Some(source) = &metadata.source {
        println!("  Source: {}", source.display());
    }
    println!("  Products: {}", metadata.row_count);
    println!("  Columns: {}", metadata.columns.join(", "));
    println!("  Vocabulary: {} terms", index.vocabulary_len());

    Ok(())
}
