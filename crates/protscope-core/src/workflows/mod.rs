//! # Workflows Module
//!
//! The user-facing entry points. Each workflow ties the [`crate::engine`] and
//! [`crate::core`] layers together for one complete task:
//!
//! - **Lookup** ([`lookup`]) - Record retrieval plus interaction network graph, layout and drawing
//! - **Analyze** ([`analyze`]) - ProtParam-style statistics for a raw sequence
//! - **Compare** ([`compare`]) - Global alignment of two raw sequences
//!
//! Failures come back as typed errors; in a lookup the record and the network
//! fail independently of each other.

pub mod analyze;
pub mod compare;
pub mod lookup;
