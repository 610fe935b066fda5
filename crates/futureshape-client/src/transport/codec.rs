//! Frame classification for the link task.
//!
//! - Text frames are forwarded untouched; envelope decoding happens in the
//!   transport so identity filtering and decode errors live in one place.
//! - Binary frames are not part of the protocol and are reported by size only.
//! - Ping/Pong are answered by tungstenite itself.

use tokio_tungstenite::tungstenite::Message;

#[derive(Debug, PartialEq, Eq)]
pub enum Inbound {
    Text(String),
    Binary { bytes_len: usize },
    Control,
    Close,
}

pub fn classify(msg: Message) -> Inbound {
    match msg {
        Message::Text(s) => Inbound::Text(s),
        Message::Binary(b) => Inbound::Binary { bytes_len: b.len() },
        Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => Inbound::Control,
        Message::Close(_) => Inbound::Close,
    }
}
