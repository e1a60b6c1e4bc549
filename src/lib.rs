//! Libris: an in-memory library catalog served over HTTP.
//!
//! The domain model and catalog store live in `libris-core`; this crate
//! adds the transport layer (axum router, handlers, HTML views) and the
//! binary entry point.

pub mod api;
