pub mod chat;
pub mod llm;
pub mod openai;
pub mod prompts;

pub use llm::{ChatModel, Completion, Prompt};
pub use openai::OpenRouterClient;
