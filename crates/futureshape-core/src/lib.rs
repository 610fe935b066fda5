//! futureshape core: wire contracts, client identity, and the error surface.
//!
//! This crate defines the envelope exchanged with the backend, the catalogue
//! of routable `(category, topic)` pairs, and their typed payloads. It carries
//! no transport or runtime dependencies so the same contracts can be used by
//! the client, fake backends in tests, and tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A malformed frame must surface as `ShapeError::Protocol` so a single bad
//! message never takes the page down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod identity;
pub mod protocol;

/// Shared result type.
pub use error::{Result, ShapeError};
pub use identity::ClientIdentity;
