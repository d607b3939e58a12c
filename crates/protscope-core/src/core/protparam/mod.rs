//! Physicochemical statistics for protein sequences in the style of ExPASy
//! ProtParam: molecular weight, composition, aromaticity, instability index,
//! isoelectric point, secondary-structure propensity, GRAVY and extinction
//! coefficients.

pub mod analysis;
pub mod isoelectric;
pub mod tables;

pub use analysis::{AnalysisError, AnalysisResult, ProteinAnalysis, analyze_sequence};
