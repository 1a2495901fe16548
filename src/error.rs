use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Failures raised by a chat model provider.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to the model provider timed out")]
    Timeout,

    // Detail stays in the logs; it can carry the provider URL.
    #[error("could not reach the model provider")]
    Transport(String),

    #[error("model provider responded with status {status}")]
    Status { status: u16, body: String },

    #[error("model provider returned no usable completion: {0}")]
    MalformedCompletion(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_decode() {
            LlmError::MalformedCompletion(err.to_string())
        } else {
            LlmError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] LlmError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("request body exceeds {0} bytes")]
    PayloadTooLarge(usize),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Upstream(LlmError::Timeout) => "upstream_timeout",
            AppError::Upstream(LlmError::MalformedCompletion(_)) => "malformed_completion",
            AppError::Upstream(_) => "upstream_failure",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::PayloadTooLarge(_) => "payload_too_large",
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream(LlmError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Provider bodies stay in the logs; the client only sees the summary.
        let error_response = JsonErrorWrapper {
            error: JsonError {
                code: self.code(),
                message: self.to_string(),
            },
        };
        HttpResponse::build(self.status_code()).json(error_response)
    }
}
