// Cross-cutting prompt fragments and prompt-building utilities. Feature
// prompts live next to the code that sends them (see generation/prompts.rs).

/// System prompt fragment that asks for the bare answer with no framing.
pub const PLAIN_TEXT_SYSTEM: &str = "Respond with the requested text only. \
    Do NOT add headings, quotes, labels or markdown. \
    Do NOT include explanations or apologies.";

/// Formatting rule shared by every resume-writing prompt.
pub const ATS_FORMAT_INSTRUCTION: &str = "Keep it ATS friendly: plain sentences, \
    no tables, no columns, no special symbols or emoji.";

/// Fills `{name}` placeholders in a single pass over `template`.
///
/// Inserted values are never rescanned, so user text that happens to contain
/// `{skills}` or similar reaches the model verbatim. Unknown placeholders and
/// stray braces are copied through unchanged.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
