use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::scores::{ScoreboardService, StoreError};
use crate::transport::{ChannelHub, ChatEventHandler};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ScoreboardService>,
    pub hub: Arc<ChannelHub>,
    pub chat: Arc<ChatEventHandler>,
}

impl AppState {
    pub fn new(service: Arc<ScoreboardService>, hub: Arc<ChannelHub>) -> Self {
        let chat = Arc::new(ChatEventHandler::new(service.clone(), hub.clone()));
        Self { service, hub, chat }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Storage error: {}", err),
                )
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
