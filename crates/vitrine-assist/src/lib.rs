//! Shopping assistant for vitrine.
//!
//! Wires the relevance index to a language model: configuration, the
//! prompt, the chat completion client, the retrieve-then-generate
//! orchestration, and the HTTP API that exposes it.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod api;
pub mod assistant;
pub mod config;
pub mod error;
pub mod generate;
pub mod prompt;

pub use assistant::{Answer, Assistant};
pub use config::Config;
pub use error::{AssistError, AssistResult, GenerationError};
pub use generate::{Generator, OpenAiClient};
