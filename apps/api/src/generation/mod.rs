// Text generation for auto-fixes.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod prompts;
pub mod text_generator;
