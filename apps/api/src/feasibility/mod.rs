// NSW feasibility prefill: validation, prompt building, completion, parse fallback.
// All provider calls go through llm_client, no direct OpenAI calls here.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prefill;
pub mod prompts;
