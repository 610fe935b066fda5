//! Transport layer.
//!
//! Holds the client identity and the connection state for one page load and
//! turns raw link signals into the three lifecycle events the page reacts to:
//! `Connected`, `Disconnected`, and `MessageReceived`. Frames addressed to
//! another client never leave this module.

pub mod codec;
pub mod target;
pub mod ws;

use tokio::sync::mpsc::{self, error::TrySendError};

use futureshape_core::error::{Result, ShapeError};
use futureshape_core::protocol::{decode, encode, Envelope, Request};
use futureshape_core::ClientIdentity;

pub use target::Origin;
pub use ws::{Link, LinkSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

/// Lifecycle event surfaced to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    Connected,
    Disconnected,
    MessageReceived(Envelope),
}

#[derive(Debug)]
pub struct Transport {
    identity: ClientIdentity,
    state: ConnectionState,
    outbound: mpsc::Sender<String>,
}

impl Transport {
    pub fn new(identity: ClientIdentity, outbound: mpsc::Sender<String>) -> Self {
        Self {
            identity,
            state: ConnectionState::Connecting,
            outbound,
        }
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Apply one raw link signal.
    ///
    /// `Connected` and `Disconnected` fire at most once each; there is no
    /// transition out of `Closed`.
    pub fn on_signal(&mut self, sig: LinkSignal) -> Option<TransportEvent> {
        match sig {
            LinkSignal::Open => {
                if self.state != ConnectionState::Connecting {
                    return None;
                }
                self.state = ConnectionState::Open;
                tracing::info!(client_id = %self.identity, "socket connection opened");
                Some(TransportEvent::Connected)
            }
            LinkSignal::Closed => {
                if self.state == ConnectionState::Closed {
                    return None;
                }
                self.state = ConnectionState::Closed;
                tracing::error!("connection to backend has ceased; reload to reconnect");
                Some(TransportEvent::Disconnected)
            }
            LinkSignal::Frame(text) => {
                if self.state != ConnectionState::Open {
                    return None;
                }
                self.accept_frame(&text).map(TransportEvent::MessageReceived)
            }
        }
    }

    fn accept_frame(&self, text: &str) -> Option<Envelope> {
        let env = match decode(text) {
            Ok(env) => env,
            Err(e) => {
                tracing::warn!(code = e.code().as_str(), error = %e, "inbound frame dropped");
                return None;
            }
        };

        if !self.identity.matches(&env.client_id) {
            tracing::trace!(topic = %env.topic, "frame for another client ignored");
            return None;
        }

        Some(env)
    }

    /// Stamp the local identity onto `req` and queue it for transmission.
    ///
    /// Refused with `NotConnected` unless the connection is open, so nothing
    /// is ever transmitted before `Connected` or after `Disconnected`.
    pub fn send(&self, req: Request) -> Result<()> {
        if self.state != ConnectionState::Open {
            return Err(ShapeError::NotConnected);
        }

        let env = req.stamp(&self.identity);
        let text = encode(&env)?;

        self.outbound.try_send(text).map_err(|e| match e {
            TrySendError::Full(_) => ShapeError::Internal("outbound queue full".into()),
            TrySendError::Closed(_) => ShapeError::NotConnected,
        })?;

        tracing::debug!(category = env.category.as_str(), topic = %env.topic, "request queued");
        Ok(())
    }
}
