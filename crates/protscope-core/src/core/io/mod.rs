//! Provides input/output for delimited interaction tables.
//!
//! A trait-based interface ([`traits::TabularFile`]) covers reading from
//! readers, strings and paths; [`tsv::InteractionTsv`] implements it for
//! STRING's tab-separated network format.

pub mod traits;
pub mod tsv;
