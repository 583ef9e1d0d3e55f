use serde::{Deserialize, Serialize};

/// How badly an issue hurts ATS parsing.
///
/// `Info` is part of the taxonomy but no current rule emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// Resume section an issue belongs to; the editor uses it to navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
}

/// A single reported deficiency.
///
/// `id` doubles as the auto-fix dispatch key, see [`crate::ats::autofix::AutoFix`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    pub can_auto_fix: bool,
}

impl Issue {
    pub fn critical(id: impl Into<String>, title: &str, description: &str) -> Self {
        Self::new(id, Severity::Critical, title, description)
    }

    pub fn warning(id: impl Into<String>, title: &str, description: &str) -> Self {
        Self::new(id, Severity::Warning, title, description)
    }

    fn new(id: impl Into<String>, severity: Severity, title: &str, description: &str) -> Self {
        Self {
            id: id.into(),
            severity,
            title: title.to_string(),
            description: description.to_string(),
            section: None,
            target_id: None,
            can_auto_fix: false,
        }
    }

    pub fn in_section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    pub fn targeting(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    pub fn auto_fixable(mut self) -> Self {
        self.can_auto_fix = true;
        self
    }
}

/// Output of one scoring pass. Issues stay in rule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub issues: Vec<Issue>,
}
