// Public API - what other modules can use
pub use channel_hub::ChannelHub;
pub use chat::{ChatEventHandler, ChatOutcome, ChatReply};
pub use commands::Command;
pub use handlers::router;
pub use sink::{DeliveryError, MessageSink};

// Internal modules
mod channel_hub;
mod chat;
mod commands;
mod handlers;
mod sink;
mod socket;
