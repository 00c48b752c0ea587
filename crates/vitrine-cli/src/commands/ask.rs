use anyhow::Result;
use std::sync::Arc;
use vitrine_assist::{Assistant, Config, OpenAiClient};
use vitrine_search::SharedIndex;

/// Answer a single question and print the reply.
pub async fn run_ask(config: Config, question: &str) -> Result<()> {
    config.validate()?;
    let index = super::build_index(&config)?;

    let assistant = Assistant::new(
        Arc::new(SharedIndex::ready(index)),
        Arc::new(OpenAiClient::from_config(&config)?),
        config.threshold,
        config.top_n,
    );

    let answer = assistant.answer(question).await?;

    if !answer.products.is_empty() {
        println!("Grounded in {} product(s):", answer.products.len());
        for product in &answer.products {
            println!("  [{:.3}] #{}", product.score, product.position);
        }
        println!();
    }
    println!("{}", answer.response);

    Ok(())
}
