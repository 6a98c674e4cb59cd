// Bias Analysis Engine
// Implements: prompt construction, provider contract, schema validation,
// result aggregation, session state.
// All LLM calls go through llm_client — no direct Anthropic API calls here.

pub mod aggregate;
pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod provider;
pub mod session;
pub mod validator;
