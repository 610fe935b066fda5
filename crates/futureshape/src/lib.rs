//! Top-level facade crate for futureshape.
//!
//! Re-exports the wire contracts and the client library so users can depend on a single crate.

pub mod core {
    pub use futureshape_core::*;
}

pub mod client {
    pub use futureshape_client::*;
}
