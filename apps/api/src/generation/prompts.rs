// Prompt templates for the text-generation collaborator.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for summary generation.
pub const SUMMARY_SYSTEM: &str = "You are an expert career coach who writes \
    professional, concise resume summaries.";

/// Summary prompt. Replace: {target_role}, {skills}, {experience_count},
/// {latest_position}, {latest_company}, {format_instruction}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Write a professional, concise resume summary (max 3-4 sentences) for a {target_role}.

Candidate background:
Skills: {skills}
Experience count: {experience_count} roles.
Latest role: {latest_position} at {latest_company}.

Focus on value proposition and key achievements. Do not use first person pronouns excessively.
{format_instruction}"#;

/// System prompt for rewriting a piece of resume text.
pub const IMPROVE_SYSTEM: &str = "You are an expert resume writer.";

/// Rewrite prompt. Replace: {role_clause}, {style_instruction},
/// {format_instruction}, {text}
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"Rewrite the following resume text{role_clause}.
{style_instruction}
{format_instruction}

Original text: "{text}"

Return ONLY the rewritten text."#;

pub const GRAMMAR_INSTRUCTION: &str =
    "Fix grammar, spelling and punctuation only. Keep the wording and meaning unchanged.";

pub const POLISH_INSTRUCTION: &str = "Make it more impactful, action-oriented and \
    result-driven. Start with a strong action verb. Quantify results where possible, \
    using placeholders like [X] when exact numbers aren't known.";

pub const CONCISE_INSTRUCTION: &str =
    "Make it shorter and tighter without dropping any facts, numbers or technologies.";

/// System prompt for the free-form resume review.
pub const REVIEW_SYSTEM: &str = "You are an ATS (Applicant Tracking System) specialist \
    and senior recruiter who reviews resumes for parsing compatibility and best practices.";

/// Review prompt. Replace: {resume_json}
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Analyze this resume data for ATS compatibility and general best practices.

Resume data:
{resume_json}

Provide a brief critique in valid Markdown format.
1. Give a score out of 100.
2. List 3 strengths.
3. List 3 critical improvements needed for ATS parsing (e.g., keywords, formatting risks, missing sections)."#;
