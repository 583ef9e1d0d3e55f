//! Turns a fixable ATS issue into a partial resume update.
//!
//! The issue id is parsed into an [`AutoFix`]; ids with no remediation parse
//! to `None` and yield an empty patch. Each fix makes exactly one call to the
//! [`TextGenerator`] and never retries. A failed call fails the whole fix so the
//! caller can leave the document untouched.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::text_generator::{StyleHint, TextGenerator};
use crate::models::resume::{Experience, ResumeDocument};

const SHORT_EXPERIENCE_PREFIX: &str = "short_exp_";
/// Role passed to summary generation when the resume has no job title.
const DEFAULT_TARGET_ROLE: &str = "Professional";

/// A remediation, one variant per fixable issue id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoFix {
    /// `missing_summary` / `short_summary`
    RegenerateSummary,
    /// `exp_passive`: always the first experience entry.
    PolishLeadExperience,
    /// `short_exp_<id>`
    PolishExperience(String),
}

impl AutoFix {
    pub fn from_issue_id(issue_id: &str) -> Option<Self> {
        match issue_id {
            "missing_summary" | "short_summary" => Some(AutoFix::RegenerateSummary),
            "exp_passive" => Some(AutoFix::PolishLeadExperience),
            _ => issue_id
                .strip_prefix(SHORT_EXPERIENCE_PREFIX)
                .map(|id| AutoFix::PolishExperience(id.to_string())),
        }
    }
}

/// Partial update to a [`ResumeDocument`]. Absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,
}

impl ResumePatch {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.experience.is_none()
    }

    /// Merges the patch into a document the way the editor does.
    #[cfg(test)]
    pub fn apply_to(self, document: &mut ResumeDocument) {
        if let Some(summary) = self.summary {
            document.summary = summary;
        }
        if let Some(experience) = self.experience {
            document.experience = experience;
        }
    }
}

/// Runs the remediation for `issue_id` against `document`.
///
/// Unknown and non-fixable ids return an empty patch without calling the
/// generator. Generator failures propagate as `AppError::Llm`.
pub async fn autofix(
    issue_id: &str,
    document: &ResumeDocument,
    generator: &dyn TextGenerator,
) -> Result<ResumePatch, AppError> {
    let Some(fix) = AutoFix::from_issue_id(issue_id) else {
        return Ok(ResumePatch::default());
    };

    match fix {
        AutoFix::RegenerateSummary => {
            let role = document.job_title.as_deref().unwrap_or(DEFAULT_TARGET_ROLE);
            let summary = generator.generate_summary(document, role).await?;
            info!("Regenerated summary for '{issue_id}'");
            Ok(ResumePatch {
                summary: Some(summary),
                ..Default::default()
            })
        }
        AutoFix::PolishLeadExperience => {
            if document.experience.is_empty() {
                return Ok(ResumePatch::default());
            }
            polish_experience(document, 0, generator).await
        }
        AutoFix::PolishExperience(entry_id) => {
            match document.experience.iter().position(|e| e.id == entry_id) {
                Some(index) => polish_experience(document, index, generator).await,
                None => Ok(ResumePatch::default()),
            }
        }
    }
}

/// Rewrites one entry's description; the rest of the list is copied unchanged.
async fn polish_experience(
    document: &ResumeDocument,
    index: usize,
    generator: &dyn TextGenerator,
) -> Result<ResumePatch, AppError> {
    let entry = &document.experience[index];
    let description = generator
        .improve_text(&entry.description, StyleHint::Polish, Some(entry.position.as_str()))
        .await?;
    info!("Polished description of experience entry '{}'", entry.id);

    let mut experience = document.experience.clone();
    experience[index].description = description;

    Ok(ResumePatch {
        experience: Some(experience),
        ..Default::default()
    })
}
