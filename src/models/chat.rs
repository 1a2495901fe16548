use serde::Deserialize;

pub const MAX_SYSTEM_PROMPT_CHARS: usize = 500;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    #[serde(rename = "systemPrompt", default)]
    pub system_prompt: Option<String>, // set by the widget's settings panel
}

impl SendMessageRequest {
    /// Blank system prompts count as absent.
    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestPromptsRequest {
    pub conversation: String,
}
