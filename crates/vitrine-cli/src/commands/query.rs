use anyhow::Result;
use vitrine_assist::Config;

/// Print the products ranked against `text`.
pub fn run_query(config: &Config, text: &str, limit: Option<usize>, json: bool) -> Result<()> {
    config.validate()?;
    let index = super::build_index(config)?;

    let mut results = index.query(text, config.threshold);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No products scored above {} for {:?}", config.threshold, text);
        return Ok(());
    }

    println!("\n🔎 {} match(es) for {:?}\n", results.len(), text);
    for (rank, result) in results.iter().enumerate() {
        let label = result
            .record
            .values()
            .iter()
            .find(|v| !v.is_null())
            .map(ToString::to_string)
            .unwrap_or_default();
        println!(
            "  {:>2}. [{:.3}] #{} {}",
            rank + 1,
            result.score,
            result.position,
            label
        );
    }

    Ok(())
}
