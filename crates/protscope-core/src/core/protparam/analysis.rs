use super::isoelectric::IsoelectricPoint;
use super::tables::{
    AVERAGE_WATER, AVERAGE_WEIGHTS, DIWV, EXTINCTION_CYSTINE, EXTINCTION_TRP, EXTINCTION_TYR,
    HELIX_RESIDUES, KYTE_DOOLITTLE, MONOISOTOPIC_WATER, MONOISOTOPIC_WEIGHTS, SHEET_RESIDUES,
    TURN_RESIDUES,
};
use crate::core::models::residue::AminoAcid;
use crate::core::models::sequence::clean_sequence;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    #[error("Cannot analyze an empty sequence (no letters remain after cleaning)")]
    EmptySequence,

    #[error("'{residue}' at position {position} is not a standard amino acid")]
    InvalidResidue { residue: char, position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SecondaryStructureFraction {
    pub helix: f64,
    pub turn: f64,
    pub sheet: f64,
}

/// Molar extinction coefficients at 280 nm in M^-1 cm^-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtinctionCoefficient {
    /// All cysteines reduced.
    pub reduced: u32,
    /// All cysteine pairs forming cystines.
    pub oxidized: u32,
}

/// The full statistic bundle for one sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub sequence: String,
    pub length: usize,
    pub molecular_weight: f64,
    pub monoisotopic: bool,
    pub amino_acid_counts: BTreeMap<char, usize>,
    pub aromaticity: f64,
    pub instability_index: f64,
    pub isoelectric_point: f64,
    pub secondary_structure: SecondaryStructureFraction,
    pub gravy: f64,
    pub extinction_coefficient: ExtinctionCoefficient,
}

/// A validated protein sequence with ProtParam-style statistics.
#[derive(Debug, Clone)]
pub struct ProteinAnalysis {
    sequence: String,
    residues: Vec<AminoAcid>,
    counts: [usize; 20],
}

impl ProteinAnalysis {
    /// Cleans `raw`, upper-cases it and validates every residue.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptySequence`] if no letters remain after cleaning,
    /// or [`AnalysisError::InvalidResidue`] for letters outside the 20 standard
    /// amino acids (positions are 1-based in the cleaned sequence).
    pub fn new(raw: &str) -> Result<Self, AnalysisError> {
        let sequence = clean_sequence(raw).to_uppercase();
        if sequence.is_empty() {
            return Err(AnalysisError::EmptySequence);
        }

        let mut counts = [0usize; 20];
        let residues = sequence
            .chars()
            .enumerate()
            .map(|(i, c)| {
                AminoAcid::from_code(c).ok_or(AnalysisError::InvalidResidue {
                    residue: c,
                    position: i + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        for aa in &residues {
            counts[aa.index()] += 1;
        }

        Ok(Self {
            sequence,
            residues,
            counts,
        })
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn count_of(&self, aa: AminoAcid) -> usize {
        self.counts[aa.index()]
    }

    /// Occurrence count for each of the 20 standard residues, zeros included.
    pub fn count_amino_acids(&self) -> BTreeMap<char, usize> {
        AminoAcid::ALL
            .iter()
            .map(|aa| (aa.code(), self.counts[aa.index()]))
            .collect()
    }

    /// Sum of free residue weights minus one water per peptide bond.
    pub fn molecular_weight(&self, monoisotopic: bool) -> f64 {
        let (table, water) = if monoisotopic {
            (&MONOISOTOPIC_WEIGHTS, MONOISOTOPIC_WATER)
        } else {
            (&AVERAGE_WEIGHTS, AVERAGE_WATER)
        };
        let residue_sum: f64 = self
            .residues
            .iter()
            .map(|aa| table.get(&aa.code()).copied().unwrap_or_default())
            .sum();
        residue_sum - (self.len() as f64 - 1.0) * water
    }

    pub fn aromaticity(&self) -> f64 {
        let aromatic: usize = self
            .residues
            .iter()
            .filter(|aa| aa.is_aromatic())
            .count();
        aromatic as f64 / self.len() as f64
    }

    /// `(10 / n) * sum(DIWV[x_i][x_i+1])`; below 40 predicts a stable protein.
    pub fn instability_index(&self) -> f64 {
        let score: f64 = self
            .residues
            .windows(2)
            .map(|pair| DIWV[pair[0].index()][pair[1].index()])
            .sum();
        (10.0 / self.len() as f64) * score
    }

    pub fn charge_at_ph(&self, ph: f64) -> f64 {
        self.charge_model().charge_at_ph(ph)
    }

    pub fn isoelectric_point(&self) -> f64 {
        self.charge_model().pi()
    }

    fn charge_model(&self) -> IsoelectricPoint {
        let first = self.residues[0];
        let last = self.residues[self.residues.len() - 1];
        IsoelectricPoint::new(first, last, &self.counts)
    }

    pub fn secondary_structure_fraction(&self) -> SecondaryStructureFraction {
        let n = self.len() as f64;
        let fraction = |group: &[char]| {
            group
                .iter()
                .filter_map(|c| AminoAcid::from_code(*c))
                .map(|aa| self.counts[aa.index()])
                .sum::<usize>() as f64
                / n
        };
        SecondaryStructureFraction {
            helix: fraction(&HELIX_RESIDUES),
            turn: fraction(&TURN_RESIDUES),
            sheet: fraction(&SHEET_RESIDUES),
        }
    }

    /// Grand average of hydropathy (Kyte-Doolittle).
    pub fn gravy(&self) -> f64 {
        let total: f64 = self
            .residues
            .iter()
            .map(|aa| KYTE_DOOLITTLE.get(&aa.code()).copied().unwrap_or_default())
            .sum();
        total / self.len() as f64
    }

    pub fn molar_extinction_coefficient(&self) -> ExtinctionCoefficient {
        let trp = self.count_of(AminoAcid::Tryptophan) as u32;
        let tyr = self.count_of(AminoAcid::Tyrosine) as u32;
        let cys = self.count_of(AminoAcid::Cysteine) as u32;
        let reduced = trp * EXTINCTION_TRP + tyr * EXTINCTION_TYR;
        ExtinctionCoefficient {
            reduced,
            oxidized: reduced + (cys / 2) * EXTINCTION_CYSTINE,
        }
    }

    pub fn summarize(&self, monoisotopic: bool) -> AnalysisResult {
        AnalysisResult {
            sequence: self.sequence.clone(),
            length: self.len(),
            molecular_weight: self.molecular_weight(monoisotopic),
            monoisotopic,
            amino_acid_counts: self.count_amino_acids(),
            aromaticity: self.aromaticity(),
            instability_index: self.instability_index(),
            isoelectric_point: self.isoelectric_point(),
            secondary_structure: self.secondary_structure_fraction(),
            gravy: self.gravy(),
            extinction_coefficient: self.molar_extinction_coefficient(),
        }
    }
}

/// Analyzes `raw` with average residue weights.
pub fn analyze_sequence(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    Ok(ProteinAnalysis::new(raw)?.summarize(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    const P53_N_TERMINUS: &str = "MEEPQSDPSVEPPLSQETFSDLWKLLPENNVLSPLPSQAMDDLMLSPDDIEQWFTEDPGP";

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn new_rejects_empty_and_non_letter_input() {
        assert_eq!(ProteinAnalysis::new("").unwrap_err(), AnalysisError::EmptySequence);
        assert_eq!(
            ProteinAnalysis::new(" 12 -- \n").unwrap_err(),
            AnalysisError::EmptySequence
        );
    }

    #[test]
    fn new_rejects_non_standard_letters_with_position() {
        let err = ProteinAnalysis::new("AC DX").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidResidue {
                residue: 'X',
                position: 4
            }
        );
    }

    #[test]
    fn new_cleans_and_uppercases_input() {
        let analysis = ProteinAnalysis::new("m e\ne-p 1q").unwrap();
        assert_eq!(analysis.sequence(), "MEEPQ");
        assert_eq!(analysis.len(), 5);
    }

    #[test]
    fn molecular_weight_of_single_alanine_matches_literature() {
        let analysis = ProteinAnalysis::new("A").unwrap();
        assert!(approx_eq(analysis.molecular_weight(false), 89.0932, 1e-3));
        assert!(approx_eq(analysis.molecular_weight(true), 89.047678, 1e-3));
    }

    #[test]
    fn molecular_weight_subtracts_water_per_peptide_bond() {
        let analysis = ProteinAnalysis::new("GG").unwrap();
        let expected = 2.0 * 75.0666 - 18.01528;
        assert!(approx_eq(analysis.molecular_weight(false), expected, 1e-6));
    }

    #[test]
    fn count_amino_acids_lists_all_twenty_residues() {
        let analysis = ProteinAnalysis::new("AAW").unwrap();
        let counts = analysis.count_amino_acids();
        assert_eq!(counts.len(), 20);
        assert_eq!(counts[&'A'], 2);
        assert_eq!(counts[&'W'], 1);
        assert_eq!(counts[&'C'], 0);
        assert_eq!(counts.values().sum::<usize>(), 3);
    }

    #[test]
    fn aromaticity_counts_f_w_y() {
        let analysis = ProteinAnalysis::new("FWYA").unwrap();
        assert!(approx_eq(analysis.aromaticity(), 0.75, 1e-12));
    }

    #[test]
    fn instability_index_of_homopolymer_alanine() {
        // Three AA dipeptides of weight 1.0, scaled by 10/4.
        let analysis = ProteinAnalysis::new("AAAA").unwrap();
        assert!(approx_eq(analysis.instability_index(), 7.5, 1e-12));
    }

    #[test]
    fn instability_index_of_single_residue_is_zero() {
        let analysis = ProteinAnalysis::new("M").unwrap();
        assert_eq!(analysis.instability_index(), 0.0);
    }

    #[test]
    fn secondary_structure_fraction_uses_propensity_groups() {
        // L belongs to both helix and sheet groups.
        let analysis = ProteinAnalysis::new("LNEK").unwrap();
        let ss = analysis.secondary_structure_fraction();
        assert!(approx_eq(ss.helix, 0.25, 1e-12));
        assert!(approx_eq(ss.turn, 0.25, 1e-12));
        assert!(approx_eq(ss.sheet, 0.5, 1e-12));
    }

    #[test]
    fn gravy_matches_kyte_doolittle_mean() {
        let analysis = ProteinAnalysis::new("IR").unwrap();
        assert!(approx_eq(analysis.gravy(), (4.5 - 4.5) / 2.0, 1e-12));
    }

    #[test]
    fn extinction_coefficient_counts_cystine_pairs() {
        let analysis = ProteinAnalysis::new("WYCCC").unwrap();
        let ext = analysis.molar_extinction_coefficient();
        assert_eq!(ext.reduced, 5500 + 1490);
        assert_eq!(ext.oxidized, 5500 + 1490 + 125);
    }

    #[test]
    fn analyze_sequence_uses_average_weights() {
        let result = analyze_sequence("A").unwrap();
        assert!(!result.monoisotopic);
        assert!(approx_eq(result.molecular_weight, 89.0932, 1e-3));
        assert_eq!(analyze_sequence("--").unwrap_err(), AnalysisError::EmptySequence);
    }

    #[test]
    fn summarize_is_consistent_with_individual_statistics() {
        let analysis = ProteinAnalysis::new(P53_N_TERMINUS).unwrap();
        let result = analysis.summarize(false);

        assert_eq!(result.length, 60);
        assert_eq!(result.sequence, P53_N_TERMINUS);
        assert_eq!(result.molecular_weight, analysis.molecular_weight(false));
        assert_eq!(result.instability_index, analysis.instability_index());
        assert!(result.isoelectric_point > 3.0 && result.isoelectric_point < 5.0);
        assert!(analysis.charge_at_ph(result.isoelectric_point).abs() < 1e-2);
        assert!(!result.monoisotopic);
    }
}
