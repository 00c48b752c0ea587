//! Prompt text sent to the language model.

use vitrine_search::ScoredRecord;

/// System message framing the assistant's role.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful shopping assistant that only discusses available products.";

/// Reply used when no product clears the relevance threshold.
pub const NO_MATCH_MESSAGE: &str = "I apologize, but I couldn't find any products matching \
     your query. Could you please rephrase your question or ask about something else?";

/// Build the user prompt from the customer's question and the matched
/// products, which are embedded as pretty-printed JSON.
pub fn build_prompt(question: &str, products: &[ScoredRecord]) -> String {
    let products_json = serde_json::to_string_pretty(products)
        .unwrap_or_else(|_| String::from("[]"));

    format!(
        "You are a helpful shopping assistant. Answer the following question based only on \
         the provided product information. If the question isn't about the products, politely \
         explain that you can only help with product-related questions.\n\
         \n\
         Customer question: {question}\n\
         \n\
         Relevant products:\n\
         {products_json}\n\
         \n\
         Please provide a natural, helpful response based only on this product information."
    )
}
