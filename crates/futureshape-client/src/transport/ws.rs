//! WebSocket link task.
//!
//! Owns the socket for one page load and reduces it to three raw signals
//! (open, inbound text frame, closed). Outbound frames arrive already encoded
//! on a bounded queue. There is no reconnect: once `Closed` is reported the
//! task ends.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

use crate::transport::codec::{classify, Inbound};

/// Raw signal reported by the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSignal {
    Open,
    Frame(String),
    Closed,
}

/// Channel ends handed to the page.
#[derive(Debug)]
pub struct Link {
    pub outbound: mpsc::Sender<String>,
    pub signals: mpsc::Receiver<LinkSignal>,
}

impl Link {
    /// Unconnected pair of queues; the caller plays the socket side.
    pub fn detached(capacity: usize) -> (Self, mpsc::Receiver<String>, mpsc::Sender<LinkSignal>) {
        let (out_tx, out_rx) = mpsc::channel(capacity);
        let (sig_tx, sig_rx) = mpsc::channel(capacity);
        (
            Self {
                outbound: out_tx,
                signals: sig_rx,
            },
            out_rx,
            sig_tx,
        )
    }
}

/// Spawn the link task for `target` (`ws://` or `wss://`).
pub fn spawn(target: String, capacity: usize) -> Link {
    let (link, out_rx, sig_tx) = Link::detached(capacity);
    tokio::spawn(run_link(target, out_rx, sig_tx));
    link
}

async fn run_link(target: String, mut out_rx: mpsc::Receiver<String>, sig_tx: mpsc::Sender<LinkSignal>) {
    let stream = match tokio_tungstenite::connect_async(target.as_str()).await {
        Ok((stream, _response)) => stream,
        Err(e) => {
            tracing::warn!(%target, error = %e, "websocket handshake failed");
            let _ = sig_tx.send(LinkSignal::Closed).await;
            return;
        }
    };

    if sig_tx.send(LinkSignal::Open).await.is_err() {
        return;
    }

    let (mut ws_tx, mut ws_rx) = stream.split();

    loop {
        tokio::select! {
            // outbound writer
            maybe_out = out_rx.recv() => {
                match maybe_out {
                    Some(text) => {
                        if ws_tx.send(Message::Text(text)).await.is_err() {
                            break;
                        }
                    }
                    None => {
                        // page dropped its transport
                        let _ = ws_tx.send(Message::Close(None)).await;
                        break;
                    }
                }
            }

            // inbound reader
            incoming = ws_rx.next() => {
                let Some(incoming) = incoming else { break; };
                let msg = match incoming {
                    Ok(msg) => msg,
                    Err(e) => {
                        tracing::debug!(error = %e, "websocket read failed");
                        break;
                    }
                };

                match classify(msg) {
                    Inbound::Text(text) => {
                        if sig_tx.send(LinkSignal::Frame(text)).await.is_err() {
                            break;
                        }
                    }
                    Inbound::Binary { bytes_len } => {
                        tracing::debug!(bytes_len, "binary frame dropped");
                    }
                    Inbound::Control => {}
                    Inbound::Close => break,
                }
            }
        }
    }

    let _ = sig_tx.send(LinkSignal::Closed).await;
}
