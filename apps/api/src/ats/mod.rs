// ATS compatibility engine: rule-based scoring plus LLM-backed auto-fixes.
// Scoring is pure and synchronous; only auto-fixes touch the text generator.

pub mod autofix;
pub mod handlers;
pub mod issues;
pub mod rules;
