//! Answering a question: retrieve, truncate, prompt, generate.

use serde::Serialize;
use std::sync::Arc;

use vitrine_search::{ScoredRecord, SharedIndex};

use crate::error::{AssistError, AssistResult};
use crate::generate::Generator;
use crate::prompt::{build_prompt, NO_MATCH_MESSAGE, SYSTEM_PROMPT};

/// An answer and the products it was grounded in.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub response: String,
    /// The matches shown to the language model, best first. Empty when
    /// nothing was relevant.
    pub products: Vec<ScoredRecord>,
}

/// Orchestrates retrieval and text generation for one catalog.
#[derive(Debug, Clone)]
pub struct Assistant {
    index: Arc<SharedIndex>,
    generator: Arc<dyn Generator>,
    threshold: f64,
    top_n: usize,
}

impl Assistant {
    pub fn new(
        index: Arc<SharedIndex>,
        generator: Arc<dyn Generator>,
        threshold: f64,
        top_n: usize,
    ) -> Self {
        Self {
            index,
            generator,
            threshold,
            top_n,
        }
    }

    pub fn index(&self) -> &SharedIndex {
        &self.index
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Every product above the threshold for `question`, best first.
    pub fn retrieve_all(&self, question: &str) -> AssistResult<Vec<ScoredRecord>> {
        Ok(self.index.query(question, self.threshold)?)
    }

    /// The best `top_n` products for `question`.
    pub fn retrieve(&self, question: &str) -> AssistResult<Vec<ScoredRecord>> {
        let mut matches = self.retrieve_all(question)?;
        matches.truncate(self.top_n);
        Ok(matches)
    }

    /// Answer a customer question.
    ///
    /// When no product is relevant the fixed no-match reply is returned and
    /// the generator is not called.
    ///
    /// # Errors
    ///
    /// - [`AssistError::EmptyQuestion`] for a blank question.
    /// - [`AssistError::Retrieval`] when no index is installed.
    /// - [`AssistError::Generation`] when the language model step fails.
    pub async fn answer(&self, question: &str) -> AssistResult<Answer> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistError::EmptyQuestion);
        }

        let products = self.retrieve(question)?;
        if products.is_empty() {
            tracing::info!("No products matched {:?}", question);
            return Ok(Answer {
                response: NO_MATCH_MESSAGE.to_string(),
                products,
            });
        }

        tracing::info!("Answering {:?} with {} products", question, products.len());
        let prompt = build_prompt(question, &products);
        let response = self.generator.generate(SYSTEM_PROMPT, &prompt).await?;

        Ok(Answer { response, products })
    }
}
