use crate::config::Config;
use crate::error::{FeedError, Result};
use crate::types::StockQuote;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, error, info, warn};

/// Lifecycle of the broker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// Shared, readable connection state.
///
/// Replaces ad hoc boolean flags: the feed task writes it, the TUI status
/// bar and the retry guard read it.
pub struct ConnectionHandle {
    state: Mutex<ConnectionState>,
}

impl ConnectionHandle {
    /// Create a handle in the Disconnected state.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(ConnectionState::Disconnected),
        })
    }

    /// Current connection state.
    pub fn get(&self) -> ConnectionState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Check if a session is currently marked connected.
    pub fn is_connected(&self) -> bool {
        self.get() == ConnectionState::Connected
    }

    /// Mark the session state.
    pub fn set(&self, state: ConnectionState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }
}

/// Subscribe frame sent once per successful connection.
#[derive(Debug, Serialize)]
struct SubscribeMessage {
    #[serde(rename = "type")]
    msg_type: String,
    topic: String,
}

/// Build the JSON subscribe frame for a topic.
pub fn subscribe_frame(topic: &str) -> Result<String> {
    let msg = SubscribeMessage {
        msg_type: "subscribe".to_string(),
        topic: topic.to_string(),
    };
    Ok(serde_json::to_string(&msg)?)
}

/// Decode one wire message into an ordered quote batch.
///
/// The payload is a JSON array of `{ "name": string, "price": number }`.
/// Decoding is the only fallible step between the socket and the store, so
/// one malformed message can be dropped without touching anything else.
pub fn decode_batch(text: &str) -> Result<Vec<StockQuote>> {
    let quotes: Vec<StockQuote> = serde_json::from_str(text)?;
    Ok(quotes)
}

/// WebSocket client for the broker's price topic.
///
/// Decoded batches are forwarded over an unbounded channel; the consumer
/// task owns all store mutation.
pub struct FeedClient {
    config: Arc<Config>,
    handle: Arc<ConnectionHandle>,
    batches: mpsc::UnboundedSender<Vec<StockQuote>>,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(config: Arc<Config>, batches: mpsc::UnboundedSender<Vec<StockQuote>>) -> Self {
        Self {
            config,
            handle: ConnectionHandle::new(),
            batches,
        }
    }

    /// Shared connection state handle for status display.
    pub fn connection(&self) -> Arc<ConnectionHandle> {
        self.handle.clone()
    }

    /// Whether a fired retry timer should start a new session attempt.
    ///
    /// A session already marked connected is left alone.
    pub fn should_attempt(&self) -> bool {
        !self.handle.is_connected()
    }

    /// Connect and keep the session alive.
    ///
    /// Setup failures and mid-session transport errors both re-enter the
    /// same delayed retry; only one retry is ever in flight, and the attempt
    /// is skipped if a session is already marked connected when the timer
    /// fires. No backoff, no retry cap.
    pub async fn run(&self) {
        loop {
            // Checked at fire time: a session established elsewhere since the
            // timer was scheduled must not be disturbed.
            if !self.should_attempt() {
                debug!("session already connected, skipping retry");
            } else {
                match self.run_session().await {
                    Ok(()) => warn!(
                        "feed session closed, retrying in {:?}",
                        self.config.reconnect_delay
                    ),
                    Err(e) => error!(
                        error = %e,
                        "feed session failed, retrying in {:?}",
                        self.config.reconnect_delay
                    ),
                }
                self.handle.set(ConnectionState::Disconnected);
            }

            tokio::time::sleep(self.config.reconnect_delay).await;
        }
    }

    async fn run_session(&self) -> Result<()> {
        self.handle.set(ConnectionState::Connecting);
        info!(url = %self.config.broker_url, "connecting to broker");

        let (ws_stream, _) = connect_async(self.config.broker_url.as_str())
            .await
            .map_err(FeedError::ConnectionSetup)?;
        let (mut write, mut read) = ws_stream.split();

        let frame = subscribe_frame(&self.config.topic)?;
        write
            .send(Message::Text(frame))
            .await
            .map_err(FeedError::Subscribe)?;

        self.handle.set(ConnectionState::Connected);
        info!(topic = %self.config.topic, "connected and subscribed");

        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => match decode_batch(&text) {
                    Ok(batch) => {
                        debug!(count = batch.len(), "received quote batch");
                        if self.batches.send(batch).is_err() {
                            // Consumer gone: the UI is shutting down.
                            return Ok(());
                        }
                    }
                    Err(e) => warn!(error = %e, "dropping malformed payload"),
                },
                Ok(Message::Ping(data)) => {
                    let _ = write.send(Message::Pong(data)).await;
                }
                Ok(Message::Close(_)) => {
                    info!("broker closed the session");
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => return Err(FeedError::ConnectionLost(e)),
            }
        }

        Ok(())
    }
}
