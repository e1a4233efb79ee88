use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Feed transport and decoding error types.
///
/// Every variant is terminal to the current message or connection attempt
/// only; none of them stops future messages from being processed.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("connection setup failed: {0}")]
    ConnectionSetup(#[source] tungstenite::Error),

    #[error("connection lost: {0}")]
    ConnectionLost(#[source] tungstenite::Error),

    #[error("subscribe failed: {0}")]
    Subscribe(#[source] tungstenite::Error),

    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
