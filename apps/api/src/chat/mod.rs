// Chat endpoint: resume system prompt + conversation forwarded to the
// completion service. All completion calls go through llm_client.

pub mod handlers;
pub mod prompts;
