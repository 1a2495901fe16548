use std::sync::Arc;

use crate::services::ChatModel;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ChatModel>,
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}
