use axum::{
    extract::{Path, State, WebSocketUpgrade},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use crate::shared::{AppError, AppState};

use super::{socket::Subscription, ChatReply};

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub player: String,
    pub content: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/channels/:channel/messages", post(post_message))
        .route("/channels/:channel/ws", get(subscribe_channel))
        .route("/leaderboard", get(get_leaderboard))
        .route("/summary", get(get_summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP handler for an inbound chat message
///
/// POST /channels/:channel/messages
#[instrument(name = "post_message", skip(state, request))]
pub async fn post_message(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<Json<ChatReply>, AppError> {
    if request.player.trim().is_empty() {
        return Err(AppError::BadRequest("player must not be empty".to_string()));
    }

    let reply = state
        .chat
        .handle_chat_message(&channel, &request.player, &request.content)
        .await?;

    Ok(Json(reply))
}

/// GET /leaderboard
#[instrument(name = "get_leaderboard", skip(state))]
pub async fn get_leaderboard(State(state): State<AppState>) -> String {
    state.service.render_leaderboard().await
}

/// GET /summary
#[instrument(name = "get_summary", skip(state))]
pub async fn get_summary(State(state): State<AppState>) -> String {
    state.service.render_daily_summary().await
}

/// Upgrades to a WebSocket that receives everything sent to `channel`
///
/// GET /channels/:channel/ws
pub async fn subscribe_channel(
    ws: WebSocketUpgrade,
    Path(channel): Path<String>,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| async move {
        let (id, outbound) = state.hub.subscribe(&channel).await;
        let subscribers = state.hub.subscriber_count(&channel).await;
        info!(
            channel = %channel,
            subscriber = %id,
            subscribers,
            "Channel subscriber connected"
        );

        let subscription = Subscription::new(channel.clone(), Box::new(socket), outbound);
        if let Err(err) = subscription.run().await {
            warn!(channel = %channel, error = %err, "Channel subscriber failed");
        }

        state.hub.unsubscribe(&channel, id).await;
        let subscribers = state.hub.subscriber_count(&channel).await;
        info!(
            channel = %channel,
            subscriber = %id,
            subscribers,
            "Channel subscriber disconnected"
        );
    })
}
