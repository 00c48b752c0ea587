use anyhow::Result;
use std::sync::Arc;
use vitrine_assist::api::{self, AppState};
use vitrine_assist::{Assistant, Config, OpenAiClient};
use vitrine_search::SharedIndex;

/// Build the index once, then serve the chat API until Ctrl-C.
pub async fn run_serve(config: Config) -> Result<()> {
    config.validate()?;

    tracing::info!("Starting vitrine on {}", config.bind);

    let shared = Arc::new(SharedIndex::new());
    shared.install(super::build_index(&config)?);

    let generator = OpenAiClient::from_config(&config)?;
    if !generator.has_api_key() {
        tracing::warn!(
            "No OpenAI API key configured; /api/chat will fail for questions with matches"
        );
    }

    let assistant = Assistant::new(
        shared,
        Arc::new(generator),
        config.threshold,
        config.top_n,
    );

    api::serve(&config, AppState { assistant }).await
}
