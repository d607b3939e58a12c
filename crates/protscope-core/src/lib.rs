//! # protscope Core Library
//!
//! A small toolkit for exploring proteins: registry record retrieval,
//! ProtParam-style sequence statistics, global pairwise alignment and
//! interaction network visualization.
//!
//! ## Architectural Philosophy
//!
//! The library keeps a strict three-layer architecture so that pure computation,
//! stateful retrieval and user-facing orchestration stay separate and testable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ProteinSequence`,
//!   `InteractionRecord`), the statistics of `protparam`, the dynamic programming
//!   of `alignment`, the graph, layout and rendering of `network`, and table I/O.
//!
//! - **[`engine`]: The Stateful Layer.** The `Explorer` session owns a
//!   `RemoteSource` and the retrieval caches, and reports progress. All network
//!   access happens here, behind a trait that tests replace with canned responses.
//!
//! - **[`workflows`]: The Public API.** `lookup`, `analyze` and `compare` tie the
//!   other layers together into the three operations offered to end-users.

pub mod core;
pub mod engine;
pub mod workflows;
