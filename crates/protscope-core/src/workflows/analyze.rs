use crate::core::protparam::{AnalysisError, AnalysisResult, ProteinAnalysis};
use tracing::{debug, instrument};

/// Computes the full statistic bundle for a raw, possibly messy sequence.
#[instrument(skip_all, name = "analyze_workflow")]
pub fn run(raw: &str, monoisotopic: bool) -> Result<AnalysisResult, AnalysisError> {
    let analysis = ProteinAnalysis::new(raw)?;
    debug!(length = analysis.len(), monoisotopic, "Sequence accepted");
    Ok(analysis.summarize(monoisotopic))
}
