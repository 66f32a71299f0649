//! Prompt-level guard: appends a fixed restriction block to outgoing prompt
//! text and applies literal phrase substitutions to generated text. Purely
//! textual rewriting; no scoring.

/// Restriction block appended to every generated prompt.
pub const RESTRICTION_BLOCK: &str = "\n\nIMPORTANT CONTENT RESTRICTIONS:\n\
- Do NOT ask for or request passwords or personal login credentials\n\
- Do NOT provide specific medication names, dosages, or prescriptions\n\
- Do NOT provide definitive medical diagnoses\n\
- Focus on general health information and recommendations to seek professional care\n\
- Provide educational information only, not medical advice\n";

/// Literal substitutions applied to generated text, in order.
static PHRASE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("diagnosis is", "may suggest"),
    ("you have", "you may have"),
    ("take medication", "consult healthcare provider about treatment"),
    ("prescribe", "healthcare provider may consider"),
    ("password", "[RESTRICTED]"),
    ("login", "[RESTRICTED]"),
];

/// Append the restriction block to a prompt.
pub fn apply_restrictions(prompt: &str) -> String {
    let mut guarded = String::with_capacity(prompt.len() + RESTRICTION_BLOCK.len());
    guarded.push_str(prompt);
    guarded.push_str(RESTRICTION_BLOCK);
    guarded
}

/// Rewrite generated text with the literal phrase substitutions.
pub fn sanitize_generated(text: &str) -> String {
    let mut sanitized = text.to_string();
    for (from, to) in PHRASE_SUBSTITUTIONS {
        sanitized = sanitized.replace(from, to);
    }
    sanitized
}
