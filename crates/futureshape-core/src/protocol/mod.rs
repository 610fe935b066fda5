//! Protocol modules.
//!
//! - `envelope`: the JSON unit exchanged in both directions.
//! - `route`: the `(category, topic)` catalogue the router resolves against.
//! - `payload`: typed, lazily parsed payloads for each known route.
//!
//! Nothing here panics on hostile input: malformed data is reported as
//! `ShapeError::Protocol`.

pub mod envelope;
pub mod payload;
pub mod route;

pub use envelope::{decode, encode, Category, Envelope, Request};
pub use route::Route;
