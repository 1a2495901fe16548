pub mod chat;

pub use chat::{SendMessageRequest, SuggestPromptsRequest, MAX_SYSTEM_PROMPT_CHARS};
