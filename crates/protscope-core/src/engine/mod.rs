//! # Engine Module
//!
//! The stateful layer: everything that talks to the outside world or remembers
//! results between calls.
//!
//! ## Architecture
//!
//! - **Retrieval Session** ([`explorer`]) - Fetches records and interaction tables through a cached session
//! - **Remote Access** ([`source`]) - The [`source::RemoteSource`] seam and its blocking HTTP implementation
//! - **Caching** ([`cache`]) - Identifier-keyed storage of successful retrievals
//! - **Configuration** ([`config`]) - Endpoint templates, HTTP settings and per-operation parameters
//! - **Progress Monitoring** ([`progress`]) - Phase events for user-facing progress display
//! - **Error Handling** ([`error`]) - Transport, status and aggregated engine errors
//!
//! Requests are blocking and sequential. A failed request is never cached, so
//! repeating it performs a fresh round-trip.

pub mod cache;
pub mod config;
pub mod error;
pub mod explorer;
pub mod progress;
pub mod source;
