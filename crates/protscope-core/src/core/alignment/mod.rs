//! Global pairwise alignment with exhaustive enumeration of optimal paths.
//!
//! The default scoring counts identical columns only, so the optimal score of
//! two sequences equals the length of their longest common subsequence.

pub mod global;
pub mod result;
pub mod scoring;

pub use global::{AlignmentError, DEFAULT_MAX_ALIGNMENTS, align_global};
pub use result::{Alignment, AlignmentSet};
pub use scoring::Scoring;
