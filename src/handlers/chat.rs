use actix_web::{web, HttpResponse};
use tracing::{info, warn};

use super::Params;
use crate::error::{AppError, Result};
use crate::models::{SendMessageRequest, SuggestPromptsRequest, MAX_SYSTEM_PROMPT_CHARS};
use crate::services::chat;
use crate::state::AppState;

pub async fn send_message(
    params: Params<SendMessageRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let req = params.into_inner();

    if let Some(system) = req.system_prompt() {
        if system.chars().count() > MAX_SYSTEM_PROMPT_CHARS {
            return Err(AppError::InvalidInput(format!(
                "systemPrompt must be at most {} characters",
                MAX_SYSTEM_PROMPT_CHARS
            )));
        }
    }

    info!(
        model = state.model.model_name(),
        message_len = req.message.len(),
        has_system_prompt = req.system_prompt().is_some(),
        "relaying chat message"
    );

    let reply = chat::relay(state.model.as_ref(), &req.message, req.system_prompt())
        .await
        .map_err(|err| {
            warn!("chat relay failed: {}", err);
            AppError::from(err)
        })?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(reply))
}

pub async fn suggest_prompts(
    params: Params<SuggestPromptsRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let req = params.into_inner();
    info!(
        model = state.model.model_name(),
        conversation_len = req.conversation.len(),
        "generating quick-reply suggestions"
    );

    let suggestions = chat::suggest(state.model.as_ref(), &req.conversation)
        .await
        .map_err(|err| {
            warn!("suggestion request failed: {}", err);
            AppError::from(err)
        })?;

    Ok(HttpResponse::Ok().json(suggestions))
}
