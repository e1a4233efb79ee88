//! WebSocket feed client for the broker's price-update topic.

mod client;

pub use client::{decode_batch, subscribe_frame, ConnectionHandle, ConnectionState, FeedClient};
