// ABOUTME: Error types for the socket session and its wire codec

use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Empty frame")]
    Empty,

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Unsupported packet: {0}")]
    UnsupportedPacket(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("WebSocket handshake failed: {0}")]
    Handshake(#[source] Box<tungstenite::Error>),

    #[error("WebSocket error: {0}")]
    Transport(#[source] Box<tungstenite::Error>),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Server rejected the connection: {0}")]
    Rejected(String),

    #[error("Not connected")]
    NotConnected,
}

impl From<tungstenite::Error> for SessionError {
    fn from(err: tungstenite::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
