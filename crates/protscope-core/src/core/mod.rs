//! # Core Module
//!
//! Stateless data models and pure computations. Nothing in this layer performs
//! network I/O or keeps state between calls.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Residues, cleaned sequences, registry records and interaction rows
//! - **Sequence Statistics** ([`protparam`]) - Molecular weight, composition, pI, instability and hydropathy
//! - **Pairwise Alignment** ([`alignment`]) - Global alignment with enumeration of all optimal paths
//! - **Interaction Networks** ([`network`]) - Graph construction, force-directed layout and SVG drawing
//! - **Tabular I/O** ([`io`]) - Reading and writing tab-separated interaction tables
//!
//! ## Conventions
//!
//! - Sequences are cleaned by keeping alphabetic characters only; analysis and
//!   alignment additionally upper-case them.
//! - Failures are reported through typed error enums, one per concern.

pub mod alignment;
pub mod io;
pub mod models;
pub mod network;
pub mod protparam;
