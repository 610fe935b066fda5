//! futureshape client library entry.
//!
//! This crate wires the WebSocket transport, the identity filter, the message
//! router, and the UI collaborator into one page-load lifecycle. It is
//! consumed by the headless binary (`main.rs`) and by integration tests.

pub mod config;
pub mod intent;
pub mod page;
pub mod router;
pub mod transport;
pub mod view;
