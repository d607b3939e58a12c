//! Request-scoped data models: residues, cleaned sequences, registry records and
//! interaction table rows.

pub mod ids;
pub mod interaction;
pub mod record;
pub mod residue;
pub mod sequence;
