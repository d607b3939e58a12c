use crate::core::alignment::{AlignmentError, AlignmentSet, align_global};
use crate::engine::config::AlignmentConfig;
use tracing::{info, instrument};

/// Globally aligns two raw sequences and returns every optimal alignment found,
/// with the deterministic best one selected.
#[instrument(skip_all, name = "compare_workflow")]
pub fn run(a: &str, b: &str, config: &AlignmentConfig) -> Result<AlignmentSet, AlignmentError> {
    let set = align_global(a, b, &config.scoring, config.max_alignments)?;
    info!(
        score = set.score(),
        alignments = set.len(),
        truncated = set.is_truncated(),
        "Comparison finished"
    );
    Ok(set)
}
