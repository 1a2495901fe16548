use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LlmSettings;
use crate::error::LlmError;
use crate::services::llm::{ChatModel, Completion, Prompt};

const LOGGED_BODY_LIMIT: usize = 512;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatResponseBody {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client for OpenRouter and other OpenAI-compatible APIs.
pub struct OpenRouterClient {
    client: Client,
    settings: LlmSettings,
}

impl OpenRouterClient {
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatModel for OpenRouterClient {
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, LlmError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system.as_deref() {
            messages.push(ChatMessage { role: "system", content: system });
        }
        messages.push(ChatMessage { role: "user", content: &prompt.text });

        let req_body = ChatRequestBody {
            model: &self.settings.model,
            messages,
        };

        let mut req = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .json(&req_body);

        if let Some(referer) = self.settings.http_referer.as_deref() {
            req = req.header("HTTP-Referer", referer);
        }
        if let Some(title) = self.settings.app_title.as_deref() {
            req = req.header("X-Title", title);
        }

        debug!(model = %self.settings.model, prompt_len = prompt.text.len(), "sending chat completion");

        let res = req.send().await.map_err(|err| {
            warn!("chat completion request failed to send: {}", err);
            LlmError::from(err)
        })?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let mut body = res.text().await.unwrap_or_default();
            if body.len() > LOGGED_BODY_LIMIT {
                let cut = (0..=LOGGED_BODY_LIMIT).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
                body.truncate(cut);
            }
            warn!(status, body = %body, "model provider returned non-success status");
            return Err(LlmError::Status { status, body });
        }

        let body: ChatResponseBody = res.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::MalformedCompletion("response contained no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| LlmError::MalformedCompletion("first choice has no content".to_string()))?;

        debug!(completion_len = content.len(), "received chat completion");
        Ok(Completion { text: content })
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}
