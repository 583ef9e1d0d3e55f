//! Deterministic ATS compatibility scoring for a resume document.
//!
//! Runs a fixed, ordered pipeline of independent rules over a resume. Each
//! rule returns the points it awards and appends its own issues; no rule sees
//! another rule's output. Pure and synchronous: cheap enough to call on every
//! editor keystroke.
//!
//! | Rule                  | Max |
//! |-----------------------|-----|
//! | Contact completeness  | 15  |
//! | Summary quality       | 15  |
//! | Experience quality    | 30  |
//! | Skills breadth        | 20  |
//! | Education presence    | 10  |
//! | Identity completeness | 10  |

use std::sync::LazyLock;

use regex::Regex;

use crate::ats::issues::{Issue, ScoreResult, Section};
use crate::models::resume::ResumeDocument;

/// Summaries at or under this many characters are "short".
const SUMMARY_MIN_CHARS: usize = 50;
/// Experience descriptions under this many characters get a per-entry issue.
const EXPERIENCE_MIN_CHARS: usize = 20;
/// Combined skills + software count for full skills credit.
const SKILLS_TARGET: usize = 5;
const MAX_SCORE: u32 = 100;

/// Verbs that count as a strong opening for an experience description.
const ACTION_VERBS: &[&str] = &[
    "Led",
    "Managed",
    "Created",
    "Developed",
    "Designed",
    "Implemented",
    "Achieved",
    "Increased",
    "Decreased",
    "Saved",
    "Won",
    "Awarded",
    "Built",
    "Engineered",
    "Architected",
    "Generated",
    "Optimized",
];

// Substring match: "someone" and "often" both count.
static METRIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d|one|two|three|four|five|six|seven|eight|nine|ten")
        .expect("valid metric regex")
});

// Anchored at the very start of the description, not at each line.
static ACTION_VERB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)^(?:{})", ACTION_VERBS.join("|"))).expect("valid action verb regex")
});

type Rule = fn(&ResumeDocument, &mut Vec<Issue>) -> u32;

/// Evaluation order is part of the contract: it fixes the issue order.
const RULES: &[Rule] = &[
    contact_rule,
    summary_rule,
    experience_rule,
    skills_rule,
    education_rule,
    identity_rule,
];

/// Scores a resume for ATS compatibility. Never fails; an empty document
/// scores 0 with the full list of issues.
pub fn score(document: &ResumeDocument) -> ScoreResult {
    let mut issues = Vec::new();
    let total: u32 = RULES.iter().map(|rule| rule(document, &mut issues)).sum();

    ScoreResult {
        score: total.clamp(0, MAX_SCORE) as u8,
        issues,
    }
}

fn contact_rule(doc: &ResumeDocument, issues: &mut Vec<Issue>) -> u32 {
    let mut points = 0;

    if doc.email.is_empty() {
        issues.push(
            Issue::critical(
                "missing_email",
                "Missing Email",
                "Recruiters need an email address to contact you. Add one to your contact details.",
            )
            .in_section(Section::Personal),
        );
    } else {
        points += 5;
    }

    if doc.phone.is_empty() {
        issues.push(
            Issue::critical(
                "missing_phone",
                "Missing Phone Number",
                "Most ATS platforms expect a phone number. Add one to your contact details.",
            )
            .in_section(Section::Personal),
        );
    } else {
        points += 5;
    }

    if doc.location.is_empty() {
        issues.push(
            Issue::warning(
                "missing_location",
                "Missing Location",
                "Add a city and region so location-based searches can find you.",
            )
            .in_section(Section::Personal),
        );
    } else {
        points += 5;
    }

    points
}

fn summary_rule(doc: &ResumeDocument, issues: &mut Vec<Issue>) -> u32 {
    if doc.summary.is_empty() {
        issues.push(
            Issue::critical(
                "missing_summary",
                "Missing Professional Summary",
                "Add a short summary of your experience and strengths for the role you want.",
            )
            .in_section(Section::Summary)
            .auto_fixable(),
        );
        return 0;
    }

    if doc.summary.chars().count() > SUMMARY_MIN_CHARS {
        return 15;
    }

    issues.push(
        Issue::warning(
            "short_summary",
            "Summary Too Short",
            "Expand your summary to two or three sentences covering your experience and key skills.",
        )
        .in_section(Section::Summary)
        .auto_fixable(),
    );
    5
}

fn experience_rule(doc: &ResumeDocument, issues: &mut Vec<Issue>) -> u32 {
    if doc.experience.is_empty() {
        issues.push(
            Issue::critical(
                "missing_exp",
                "No Work Experience",
                "Add at least one role. ATS ranking relies heavily on work history.",
            )
            .in_section(Section::Experience),
        );
        return 0;
    }

    let mut points = 10;

    let has_metrics = doc
        .experience
        .iter()
        .any(|e| METRIC_PATTERN.is_match(&e.description));
    if has_metrics {
        points += 10;
    } else {
        issues.push(
            Issue::warning(
                "exp_no_metrics",
                "No Quantified Achievements",
                "Add numbers to your experience (team size, percentages, revenue) to show impact.",
            )
            .in_section(Section::Experience),
        );
    }

    let has_action_verbs = doc
        .experience
        .iter()
        .any(|e| ACTION_VERB_PATTERN.is_match(&e.description));
    if has_action_verbs {
        points += 10;
    } else {
        issues.push(
            Issue::warning(
                "exp_passive",
                "Weak Action Verbs",
                "Start your experience descriptions with strong verbs such as Led, Built or Optimized.",
            )
            .in_section(Section::Experience)
            .auto_fixable(),
        );
    }

    for entry in &doc.experience {
        if entry.description.chars().count() < EXPERIENCE_MIN_CHARS {
            let role = if entry.position.is_empty() {
                "this role"
            } else {
                entry.position.as_str()
            };
            issues.push(
                Issue::warning(
                    format!("short_exp_{}", entry.id),
                    "Experience Description Too Short",
                    &format!("Describe your responsibilities and results in {role} in more detail."),
                )
                .in_section(Section::Experience)
                .targeting(entry.id.clone())
                .auto_fixable(),
            );
        }
    }

    points
}

fn skills_rule(doc: &ResumeDocument, issues: &mut Vec<Issue>) -> u32 {
    // Raw lengths: blank skill strings still count.
    let count = doc.skills.len() + doc.softwares.len();

    if count >= SKILLS_TARGET {
        20
    } else if count > 0 {
        issues.push(
            Issue::warning(
                "low_skills",
                "Too Few Skills",
                "List at least five skills or tools so keyword searches can match your resume.",
            )
            .in_section(Section::Skills),
        );
        10
    } else {
        issues.push(
            Issue::critical(
                "missing_skills",
                "No Skills Listed",
                "Add a skills section. ATS keyword matching depends on it.",
            )
            .in_section(Section::Skills),
        );
        0
    }
}

fn education_rule(doc: &ResumeDocument, issues: &mut Vec<Issue>) -> u32 {
    if !doc.education.is_empty() {
        return 10;
    }
    issues.push(
        Issue::warning(
            "missing_edu",
            "No Education Listed",
            "Add your degree or relevant training. Many ATS filters check for education.",
        )
        .in_section(Section::Education),
    );
    0
}

fn identity_rule(doc: &ResumeDocument, issues: &mut Vec<Issue>) -> u32 {
    let mut points = 0;
    if !doc.full_name.is_empty() {
        points += 5;
    }

    // Never inferred from experience positions.
    if doc.job_title().is_some() {
        points += 5;
    } else {
        issues.push(
            Issue::critical(
                "missing_jobtitle",
                "Missing Job Title",
                "Add the job title you are targeting. ATS systems match it against open roles.",
            )
            .in_section(Section::Personal),
        );
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::issues::Severity;
    use crate::models::resume::{CustomSectionItem, Education, Experience};

    fn make_experience(id: &str, description: &str) -> Experience {
        Experience {
            id: id.to_string(),
            company: "Acme Corp".to_string(),
            position: "Software Engineer".to_string(),
            start_date: "2020".to_string(),
            end_date: "2023".to_string(),
            current: false,
            description: description.to_string(),
        }
    }

    fn make_complete_document() -> ResumeDocument {
        ResumeDocument {
            full_name: "Alex Johnson".to_string(),
            job_title: Some("Software Engineer".to_string()),
            email: "alex@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            summary: "Software engineer with five years of experience building web platforms."
                .to_string(),
            experience: vec![make_experience(
                "1",
                "Led a team of 4 engineers to rebuild the billing pipeline.",
            )],
            education: vec![Education {
                id: "1".to_string(),
                school: "UC Berkeley".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                start_date: "2015".to_string(),
                end_date: "2019".to_string(),
            }],
            skills: ["Rust", "TypeScript", "React", "AWS", "Docker"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Default::default()
        }
    }

    fn issue_ids(result: &ScoreResult) -> Vec<&str> {
        result.issues.iter().map(|i| i.id.as_str()).collect()
    }

    fn find<'a>(result: &'a ScoreResult, id: &str) -> Option<&'a Issue> {
        result.issues.iter().find(|i| i.id == id)
    }

    #[test]
    fn test_empty_document_scores_zero_with_full_issue_list() {
        let result = score(&ResumeDocument::default());
        assert_eq!(result.score, 0);
        assert_eq!(
            issue_ids(&result),
            vec![
                "missing_email",
                "missing_phone",
                "missing_location",
                "missing_summary",
                "missing_exp",
                "missing_skills",
                "missing_edu",
                "missing_jobtitle",
            ]
        );

        let critical: Vec<&str> = result
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(
            critical,
            vec![
                "missing_email",
                "missing_phone",
                "missing_summary",
                "missing_exp",
                "missing_skills",
                "missing_jobtitle",
            ]
        );
        assert_eq!(find(&result, "missing_location").unwrap().severity, Severity::Warning);
        assert_eq!(find(&result, "missing_edu").unwrap().severity, Severity::Warning);
    }

    #[test]
    fn test_complete_document_scores_100_without_issues() {
        let result = score(&make_complete_document());
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty(), "Unexpected issues: {:?}", issue_ids(&result));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let mut doc = make_complete_document();
        doc.phone.clear();
        doc.skills.truncate(2);
        assert_eq!(score(&doc), score(&doc));
    }

    #[test]
    fn test_contact_issues_are_not_fixable() {
        let result = score(&ResumeDocument::default());
        for id in ["missing_email", "missing_phone", "missing_location"] {
            let issue = find(&result, id).unwrap();
            assert!(!issue.can_auto_fix);
            assert_eq!(issue.section, Some(Section::Personal));
        }
    }

    #[test]
    fn test_missing_summary_is_fixable() {
        let mut doc = make_complete_document();
        doc.summary.clear();
        let result = score(&doc);
        assert_eq!(result.score, 85);
        let issue = find(&result, "missing_summary").unwrap();
        assert_eq!(issue.severity, Severity::Critical);
        assert!(issue.can_auto_fix);
    }

    #[test]
    fn test_summary_of_50_chars_is_short() {
        let mut doc = make_complete_document();
        doc.summary = "a".repeat(50);
        let result = score(&doc);
        assert_eq!(result.score, 90);
        let issue = find(&result, "short_summary").unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert!(issue.can_auto_fix);
    }

    #[test]
    fn test_summary_of_51_chars_gets_full_credit() {
        let mut doc = make_complete_document();
        doc.summary = "a".repeat(51);
        let result = score(&doc);
        assert_eq!(result.score, 100);
        assert!(find(&result, "short_summary").is_none());
    }

    #[test]
    fn test_summary_length_counts_characters_not_bytes() {
        let mut doc = make_complete_document();
        // 50 chars, 100 bytes
        doc.summary = "é".repeat(50);
        assert!(find(&score(&doc), "short_summary").is_some());
    }

    #[test]
    fn test_no_experience_is_critical() {
        let mut doc = make_complete_document();
        doc.experience.clear();
        let result = score(&doc);
        assert_eq!(result.score, 70);
        let issue = find(&result, "missing_exp").unwrap();
        assert_eq!(issue.severity, Severity::Critical);
        assert!(!issue.can_auto_fix);
        assert!(find(&result, "exp_no_metrics").is_none());
        assert!(find(&result, "exp_passive").is_none());
    }

    #[test]
    fn test_experience_without_metrics() {
        let mut doc = make_complete_document();
        doc.experience = vec![make_experience("1", "Led the migration of the billing system.")];
        let result = score(&doc);
        assert_eq!(result.score, 90);
        let issue = find(&result, "exp_no_metrics").unwrap();
        assert!(!issue.can_auto_fix);
    }

    #[test]
    fn test_spelled_out_numbers_count_as_metrics() {
        let mut doc = make_complete_document();
        doc.experience = vec![make_experience("1", "Led THREE product launches across Europe.")];
        assert!(find(&score(&doc), "exp_no_metrics").is_none());
    }

    #[test]
    fn test_metric_pattern_matches_inside_words() {
        let mut doc = make_complete_document();
        doc.experience = vec![make_experience("1", "Led onboarding for someone new.")];
        assert!(find(&score(&doc), "exp_no_metrics").is_none());
    }

    #[test]
    fn test_passive_experience_is_fixable() {
        let mut doc = make_complete_document();
        doc.experience = vec![make_experience("1", "Responsible for 3 internal dashboards.")];
        let result = score(&doc);
        assert_eq!(result.score, 90);
        let issue = find(&result, "exp_passive").unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert!(issue.can_auto_fix);
    }

    #[test]
    fn test_action_verb_must_open_the_description() {
        let mut doc = make_complete_document();
        doc.experience = vec![make_experience(
            "1",
            "Worked on 3 services.\nLed the on-call rotation.",
        )];
        assert!(find(&score(&doc), "exp_passive").is_some());
    }

    #[test]
    fn test_action_verb_is_case_insensitive() {
        let mut doc = make_complete_document();
        doc.experience = vec![make_experience("1", "optimized 12 slow database queries.")];
        assert!(find(&score(&doc), "exp_passive").is_none());
    }

    #[test]
    fn test_unlisted_action_verb_is_not_recognised() {
        let mut doc = make_complete_document();
        doc.experience = vec![make_experience("1", "Spearheaded 2 platform rewrites.")];
        assert!(find(&score(&doc), "exp_passive").is_some());
    }

    #[test]
    fn test_heuristics_are_document_level() {
        let mut doc = make_complete_document();
        doc.experience = vec![
            make_experience("1", "Responsible for 3 internal dashboards."),
            make_experience("2", "Built the customer onboarding flow."),
        ];
        let result = score(&doc);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_short_experience_entries_each_get_an_issue() {
        let mut doc = make_complete_document();
        doc.experience = vec![
            make_experience("a1", "Led 2 teams"),
            make_experience("b2", "Did stuff"),
        ];
        let result = score(&doc);

        let first = find(&result, "short_exp_a1").unwrap();
        assert_eq!(first.target_id.as_deref(), Some("a1"));
        assert_eq!(first.section, Some(Section::Experience));
        assert!(first.can_auto_fix);

        let second = find(&result, "short_exp_b2").unwrap();
        assert_eq!(second.target_id.as_deref(), Some("b2"));
        // Short-entry issues don't cost points on their own.
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_short_experience_issues_follow_document_level_ones() {
        let mut doc = make_complete_document();
        doc.experience = vec![make_experience("x", "Helped out"), make_experience("y", "Misc")];
        let result = score(&doc);
        assert_eq!(
            issue_ids(&result),
            vec!["exp_no_metrics", "exp_passive", "short_exp_x", "short_exp_y"]
        );
    }

    #[test]
    fn test_current_role_end_date_is_ignored() {
        let mut doc = make_complete_document();
        doc.experience[0].current = true;
        doc.experience[0].end_date = "???".to_string();
        let result = score(&doc);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());

        doc.experience[0].end_date.clear();
        assert_eq!(score(&doc).score, 100);
    }

    #[test]
    fn test_few_skills_is_a_warning() {
        let mut doc = make_complete_document();
        doc.skills.truncate(3);
        let result = score(&doc);
        assert_eq!(result.score, 90);
        let issue = find(&result, "low_skills").unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert!(!issue.can_auto_fix);
    }

    #[test]
    fn test_no_skills_is_critical() {
        let mut doc = make_complete_document();
        doc.skills.clear();
        let result = score(&doc);
        assert_eq!(result.score, 80);
        assert_eq!(
            find(&result, "missing_skills").unwrap().severity,
            Severity::Critical
        );
    }

    #[test]
    fn test_software_entries_count_toward_skills() {
        let mut doc = make_complete_document();
        doc.skills.truncate(3);
        doc.softwares = (0..2)
            .map(|i| CustomSectionItem {
                id: i.to_string(),
                name: format!("Tool {i}"),
                description: String::new(),
            })
            .collect();
        let result = score(&doc);
        assert_eq!(result.score, 100);
        assert!(find(&result, "low_skills").is_none());
    }

    #[test]
    fn test_blank_skills_are_still_counted() {
        let mut doc = make_complete_document();
        doc.skills = vec![String::new(); 5];
        assert_eq!(score(&doc).score, 100);
    }

    #[test]
    fn test_missing_education_is_a_warning() {
        let mut doc = make_complete_document();
        doc.education.clear();
        let result = score(&doc);
        assert_eq!(result.score, 90);
        let issue = find(&result, "missing_edu").unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.section, Some(Section::Education));
    }

    #[test]
    fn test_missing_full_name_costs_points_without_issue() {
        let mut doc = make_complete_document();
        doc.full_name.clear();
        let result = score(&doc);
        assert_eq!(result.score, 95);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_job_title_is_not_inferred_from_experience() {
        let mut doc = make_complete_document();
        doc.job_title = None;
        let result = score(&doc);
        assert_eq!(result.score, 95);
        let issue = find(&result, "missing_jobtitle").unwrap();
        assert_eq!(issue.severity, Severity::Critical);
        assert!(!issue.can_auto_fix);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let mut docs = vec![ResumeDocument::default(), make_complete_document()];
        let mut partial = make_complete_document();
        partial.email.clear();
        partial.experience.push(make_experience("2", ""));
        docs.push(partial);

        for doc in &docs {
            assert!(score(doc).score <= 100);
        }
    }
}
