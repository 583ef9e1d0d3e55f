//! Text generation behind auto-fixes and reviews.
//!
//! `TextGenerator` is the seam: the dispatcher only sees the trait, `AppState`
//! carries an `Arc<dyn TextGenerator>`, and tests swap in a fake.
//! Default backend: `LlmTextGenerator` (Claude via `llm_client`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation::prompts::{
    CONCISE_INSTRUCTION, GRAMMAR_INSTRUCTION, IMPROVE_PROMPT_TEMPLATE, IMPROVE_SYSTEM,
    POLISH_INSTRUCTION, REVIEW_PROMPT_TEMPLATE, REVIEW_SYSTEM, SUMMARY_PROMPT_TEMPLATE,
    SUMMARY_SYSTEM,
};
use crate::llm_client::prompts::{fill_template, ATS_FORMAT_INSTRUCTION, PLAIN_TEXT_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::ResumeDocument;

/// How `improve_text` should rewrite its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleHint {
    Grammar,
    Polish,
    Concise,
}

impl StyleHint {
    fn instruction(self) -> &'static str {
        match self {
            StyleHint::Grammar => GRAMMAR_INSTRUCTION,
            StyleHint::Polish => POLISH_INSTRUCTION,
            StyleHint::Concise => CONCISE_INSTRUCTION,
        }
    }
}

/// Generative text capability. Every call may fail and may take arbitrarily long.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_summary(
        &self,
        document: &ResumeDocument,
        target_role: &str,
    ) -> Result<String, LlmError>;

    async fn improve_text(
        &self,
        text: &str,
        style: StyleHint,
        role_context: Option<&str>,
    ) -> Result<String, LlmError>;

    /// Free-form Markdown critique of the whole resume. Advisory only: never
    /// feeds into the deterministic score.
    async fn analyze_resume(&self, document: &ResumeDocument) -> Result<String, LlmError>;
}

/// Claude-backed text generator.
pub struct LlmTextGenerator(pub LlmClient);

#[async_trait]
impl TextGenerator for LlmTextGenerator {
    async fn generate_summary(
        &self,
        document: &ResumeDocument,
        target_role: &str,
    ) -> Result<String, LlmError> {
        let prompt = build_summary_prompt(document, target_role);
        let system = format!("{SUMMARY_SYSTEM} {PLAIN_TEXT_SYSTEM}");
        debug!("Generating summary for role '{target_role}'");

        match self.0.call_text(&prompt, &system).await {
            Err(LlmError::EmptyContent) => Ok(String::new()),
            other => other,
        }
    }

    async fn improve_text(
        &self,
        text: &str,
        style: StyleHint,
        role_context: Option<&str>,
    ) -> Result<String, LlmError> {
        let prompt = build_improve_prompt(text, style, role_context);
        let system = format!("{IMPROVE_SYSTEM} {PLAIN_TEXT_SYSTEM}");
        debug!("Improving {} chars of text ({style:?})", text.chars().count());

        // A blank reply keeps the original wording.
        match self.0.call_text(&prompt, &system).await {
            Ok(improved) if !improved.is_empty() => Ok(improved),
            Ok(_) | Err(LlmError::EmptyContent) => Ok(text.to_string()),
            Err(e) => Err(e),
        }
    }

    async fn analyze_resume(&self, document: &ResumeDocument) -> Result<String, LlmError> {
        let prompt = build_review_prompt(document)?;
        debug!("Reviewing resume ({} chars of JSON)", prompt.len());

        match self.0.call_text(&prompt, REVIEW_SYSTEM).await {
            Err(LlmError::EmptyContent) => Ok(String::new()),
            other => other,
        }
    }
}

fn build_summary_prompt(document: &ResumeDocument, target_role: &str) -> String {
    let latest = document.experience.first();
    let latest_position = latest
        .map(|e| e.position.as_str())
        .filter(|p| !p.is_empty())
        .unwrap_or("N/A");
    let latest_company = latest
        .map(|e| e.company.as_str())
        .filter(|c| !c.is_empty())
        .unwrap_or("N/A");
    let skills = document.skills.join(", ");
    let experience_count = document.experience.len().to_string();

    fill_template(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("target_role", target_role),
            ("skills", skills.as_str()),
            ("experience_count", experience_count.as_str()),
            ("latest_position", latest_position),
            ("latest_company", latest_company),
            ("format_instruction", ATS_FORMAT_INSTRUCTION),
        ],
    )
}

fn build_improve_prompt(text: &str, style: StyleHint, role_context: Option<&str>) -> String {
    let role_clause = match role_context.filter(|r| !r.is_empty()) {
        Some(role) => format!(" for a {role} position"),
        None => String::new(),
    };

    fill_template(
        IMPROVE_PROMPT_TEMPLATE,
        &[
            ("role_clause", role_clause.as_str()),
            ("style_instruction", style.instruction()),
            ("format_instruction", ATS_FORMAT_INSTRUCTION),
            ("text", text),
        ],
    )
}

fn build_review_prompt(document: &ResumeDocument) -> Result<String, LlmError> {
    let resume_json = serde_json::to_string_pretty(document)?;
    Ok(fill_template(
        REVIEW_PROMPT_TEMPLATE,
        &[("resume_json", resume_json.as_str())],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Experience;

    #[test]
    fn test_summary_prompt_uses_latest_role() {
        let doc = ResumeDocument {
            skills: vec!["Rust".to_string(), "Go".to_string()],
            experience: vec![
                Experience {
                    id: "1".to_string(),
                    company: "Acme".to_string(),
                    position: "Staff Engineer".to_string(),
                    ..Default::default()
                },
                Experience {
                    id: "2".to_string(),
                    company: "Initech".to_string(),
                    position: "Intern".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let prompt = build_summary_prompt(&doc, "Platform Engineer");
        assert!(prompt.contains("for a Platform Engineer."));
        assert!(prompt.contains("Skills: Rust, Go"));
        assert!(prompt.contains("Experience count: 2 roles."));
        assert!(prompt.contains("Latest role: Staff Engineer at Acme."));
        assert!(!prompt.contains("Initech"));
    }

    #[test]
    fn test_summary_prompt_without_experience() {
        let prompt = build_summary_prompt(&ResumeDocument::default(), "Professional");
        assert!(prompt.contains("Latest role: N/A at N/A."));
        assert!(prompt.contains("Experience count: 0 roles."));
    }

    #[test]
    fn test_improve_prompt_includes_role_and_style() {
        let prompt = build_improve_prompt("did backend work", StyleHint::Polish, Some("SRE"));
        assert!(prompt.contains("for a SRE position"));
        assert!(prompt.contains(POLISH_INSTRUCTION));
        assert!(prompt.contains("Original text: \"did backend work\""));
    }

    #[test]
    fn test_improve_prompt_without_role() {
        let prompt = build_improve_prompt("teh text", StyleHint::Grammar, Some(""));
        assert!(prompt.starts_with("Rewrite the following resume text.\n"));
        assert!(prompt.contains(GRAMMAR_INSTRUCTION));
    }

    #[test]
    fn test_improve_prompt_leaves_placeholders_in_user_text() {
        let prompt = build_improve_prompt("{role_clause} stays", StyleHint::Concise, None);
        assert!(prompt.contains("\"{role_clause} stays\""));
    }

    #[test]
    fn test_summary_prompt_keeps_placeholder_text_from_user() {
        let doc = ResumeDocument {
            skills: vec!["{latest_company}".to_string()],
            experience: vec![Experience {
                id: "1".to_string(),
                company: "Acme {skills}".to_string(),
                position: "Engineer".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let prompt = build_summary_prompt(&doc, "Designer {skills}");
        assert!(prompt.contains("for a Designer {skills}."));
        assert!(prompt.contains("Skills: {latest_company}\n"));
        assert!(prompt.contains("Latest role: Engineer at Acme {skills}."));
    }

    #[test]
    fn test_improve_prompt_keeps_placeholder_text_in_role() {
        let prompt = build_improve_prompt("shipped it", StyleHint::Polish, Some("{text} lead"));
        assert!(prompt.contains("for a {text} lead position"));
        assert!(prompt.contains("Original text: \"shipped it\""));
    }

    #[test]
    fn test_review_prompt_embeds_resume_json() {
        let doc = ResumeDocument {
            full_name: "Alex Johnson".to_string(),
            summary: "Uses {resume_json} literally".to_string(),
            ..Default::default()
        };

        let prompt = build_review_prompt(&doc).unwrap();
        assert!(prompt.contains("\"fullName\": \"Alex Johnson\""));
        assert!(prompt.contains("Uses {resume_json} literally"));
        assert!(prompt.contains("1. Give a score out of 100."));
    }

    #[test]
    fn test_style_hint_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StyleHint::Concise).unwrap(),
            "\"concise\""
        );
    }
}
