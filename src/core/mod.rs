//! Core components of the `findata-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FdClient`] and its builder.
//! - The primary [`FdError`] type.
//! - Shared data models like [`Price`] and [`LineItem`].
//! - The request/response pair the retrying executor works on.
//! - The [`PriceCache`] seam and its in-memory implementation.

/// Price cache trait and the default in-memory store.
pub mod cache;
/// The main client (`FdClient`), builder, retry policy and transport.
pub mod client;
/// The primary error type (`FdError`) for the crate.
pub mod error;
/// Shared data models (`Price`, `LineItem`).
pub mod models;
/// Transport-independent request and response values.
pub mod request;
pub(crate) mod wire;

pub use cache::{MemoryCache, PriceCache};
pub use client::{FdClient, FdClientBuilder};
pub use error::FdError;
pub use models::{LineItem, Price};
pub use request::{ApiRequest, ApiResponse, HttpMethod};
