use tracing::debug;

use crate::error::LlmError;
use crate::services::llm::{ChatModel, Prompt};
use crate::services::prompts::{build_suggestion_prompt, parse_suggestions};

/// Sends `message` to the model as is and returns the completion text untouched.
pub async fn relay(
    model: &dyn ChatModel,
    message: &str,
    system_prompt: Option<&str>,
) -> Result<String, LlmError> {
    let mut prompt = Prompt::new(message);
    if let Some(system) = system_prompt {
        prompt = prompt.with_system(system);
    }
    let completion = model.complete(&prompt).await?;
    Ok(completion.text)
}

pub async fn suggest(model: &dyn ChatModel, conversation: &str) -> Result<Vec<String>, LlmError> {
    let prompt = Prompt::new(build_suggestion_prompt(conversation));
    let completion = model.complete(&prompt).await?;
    let suggestions = parse_suggestions(&completion.text);
    debug!(count = suggestions.len(), "parsed quick-reply suggestions");
    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::llm::Completion;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct EchoModel {
        reply: String,
        seen: Mutex<Vec<Prompt>>,
    }

    impl EchoModel {
        fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatModel for EchoModel {
        async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmError> {
            self.seen.lock().unwrap().push(prompt.clone());
            Ok(Completion { text: self.reply.clone() })
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn relay_returns_completion_verbatim() {
        let model = EchoModel::replying("  Hello, WORLD!\n");
        let reply = relay(&model, " hi there ", None).await.unwrap();

        assert_eq!(reply, "  Hello, WORLD!\n");
        let seen = model.seen.lock().unwrap();
        assert_eq!(seen[0], Prompt::new(" hi there "));
    }

    #[tokio::test]
    async fn relay_passes_system_prompt_separately() {
        let model = EchoModel::replying("ok");
        relay(&model, "hello", Some("Answer like a pirate")).await.unwrap();

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen[0].text, "hello");
        assert_eq!(seen[0].system.as_deref(), Some("Answer like a pirate"));
    }

    #[tokio::test]
    async fn suggest_builds_prompt_and_splits_reply() {
        let model = EchoModel::replying("- a\r\n- b\n- c");
        let suggestions = suggest(&model, "User: hi\nBot: hello").await.unwrap();

        assert_eq!(suggestions, vec!["- a", "- b", "- c"]);
        let seen = model.seen.lock().unwrap();
        assert!(seen[0].text.ends_with("Conversation:\nUser: hi\nBot: hello"));
        assert!(seen[0].system.is_none());
    }
}
