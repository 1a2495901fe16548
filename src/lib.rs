pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

pub use config::Settings;
pub use error::{AppError, LlmError};
pub use state::AppState;
