//! Synchronous client core for the products API.
//!
//! # Overview
//! `ProductSubmitter` posts a `Product` as JSON to a configured endpoint,
//! accepts a 200 or 201 reply, and decodes the body back into a `Product`.
//!
//! # Design
//! - The network and the body encoder sit behind the `Transport` and
//!   `Encoder` traits. `UreqTransport` and `JsonEncoder` are the defaults;
//!   tests substitute closures and failing encoders.
//! - `submit` is `build_submit` + `Transport::post` + `parse_submit`, so a
//!   host can still do the I/O itself.
//! - Each failing step maps to its own `SubmitError` variant.

pub mod client;
pub mod encode;
pub mod error;
pub mod http;
pub mod types;

pub use client::ProductSubmitter;
pub use encode::{Encoder, JsonEncoder};
pub use error::{BoxError, SubmitError};
pub use http::{BodyReadError, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::Product;
