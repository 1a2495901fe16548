/// Shown to a new visitor before any conversation exists, in display order.
pub const SEED_PROMPTS: [&str; 4] = [
    "What's the weather today?",
    "Tell me a joke.",
    "How can I improve my productivity?",
    "Give me a fun fact.",
];

const SUGGESTION_INSTRUCTIONS: &str = "You are a conversational assistant. When given a user\u{2013}assistant chat, \
generate 3 quick-reply suggestions formatted as simple bullet points. Do not include any headings, \
introductions, footers, or explanations\u{2014}only the bullets.\n\n";

pub const CONVERSATION_LABEL: &str = "Conversation:\n";

pub fn seed_prompts() -> &'static [&'static str] {
    &SEED_PROMPTS
}

/// Instructions followed by the transcript, which is appended verbatim.
pub fn build_suggestion_prompt(conversation: &str) -> String {
    let mut prompt =
        String::with_capacity(SUGGESTION_INSTRUCTIONS.len() + CONVERSATION_LABEL.len() + conversation.len());
    prompt.push_str(SUGGESTION_INSTRUCTIONS);
    prompt.push_str(CONVERSATION_LABEL);
    prompt.push_str(conversation);
    prompt
}

/// Splits model output on `\n` or `\r\n`. Segments are kept as emitted,
/// blank ones and bullet markers included.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
