//! Residue property tables used by the ProtParam-style statistics.
//!
//! Character-keyed tables are compile-time `phf` maps; the dipeptide instability
//! weights are a dense matrix indexed by [`AminoAcid::index`](crate::core::models::residue::AminoAcid::index).

use phf::{Map, phf_map};

/// Average free amino-acid weights in Daltons.
pub static AVERAGE_WEIGHTS: Map<char, f64> = phf_map! {
    'A' => 89.0932, 'C' => 121.1582, 'D' => 133.1027, 'E' => 147.1293,
    'F' => 165.1891, 'G' => 75.0666, 'H' => 155.1546, 'I' => 131.1729,
    'K' => 146.1876, 'L' => 131.1729, 'M' => 149.2113, 'N' => 132.1179,
    'P' => 115.1305, 'Q' => 146.1445, 'R' => 174.201, 'S' => 105.0926,
    'T' => 119.1192, 'V' => 117.1463, 'W' => 204.2252, 'Y' => 181.1885,
};

/// Monoisotopic free amino-acid weights in Daltons.
pub static MONOISOTOPIC_WEIGHTS: Map<char, f64> = phf_map! {
    'A' => 89.047678, 'C' => 121.019749, 'D' => 133.037508, 'E' => 147.053158,
    'F' => 165.078979, 'G' => 75.032028, 'H' => 155.069477, 'I' => 131.094629,
    'K' => 146.105528, 'L' => 131.094629, 'M' => 149.051049, 'N' => 132.053492,
    'P' => 115.063329, 'Q' => 146.069142, 'R' => 174.111676, 'S' => 105.042593,
    'T' => 119.058243, 'V' => 117.078979, 'W' => 204.089878, 'Y' => 181.073893,
};

pub const AVERAGE_WATER: f64 = 18.01528;
pub const MONOISOTOPIC_WATER: f64 = 18.010565;

/// Kyte-Doolittle (1982) hydropathy values.
pub static KYTE_DOOLITTLE: Map<char, f64> = phf_map! {
    'A' => 1.8, 'C' => 2.5, 'D' => -3.5, 'E' => -3.5, 'F' => 2.8,
    'G' => -0.4, 'H' => -3.2, 'I' => 4.5, 'K' => -3.9, 'L' => 3.8,
    'M' => 1.9, 'N' => -3.5, 'P' => -1.6, 'Q' => -3.5, 'R' => -4.5,
    'S' => -0.8, 'T' => -0.7, 'V' => 4.2, 'W' => -0.9, 'Y' => -1.3,
};

// --- Isoelectric point (ProtParam pK set) ---

pub const PK_N_TERMINUS: f64 = 9.0;
pub const PK_C_TERMINUS: f64 = 2.0;

pub static POSITIVE_PKS: Map<char, f64> = phf_map! {
    'K' => 10.0, 'R' => 12.0, 'H' => 5.98,
};

pub static NEGATIVE_PKS: Map<char, f64> = phf_map! {
    'D' => 4.05, 'E' => 4.45, 'C' => 9.0, 'Y' => 10.0,
};

/// N-terminal pK overrides keyed by the first residue.
pub static N_TERMINAL_PKS: Map<char, f64> = phf_map! {
    'A' => 7.59, 'M' => 7.0, 'S' => 6.93, 'P' => 8.36, 'T' => 6.82, 'V' => 7.44, 'E' => 7.7,
};

/// C-terminal pK overrides keyed by the last residue.
pub static C_TERMINAL_PKS: Map<char, f64> = phf_map! {
    'D' => 4.55, 'E' => 4.75,
};

// --- Secondary structure propensity groups ---

pub const HELIX_RESIDUES: [char; 6] = ['V', 'I', 'Y', 'F', 'W', 'L'];
pub const TURN_RESIDUES: [char; 4] = ['N', 'P', 'G', 'S'];
pub const SHEET_RESIDUES: [char; 4] = ['E', 'M', 'A', 'L'];

// --- Extinction coefficients at 280 nm ---

pub const EXTINCTION_TRP: u32 = 5500;
pub const EXTINCTION_TYR: u32 = 1490;
pub const EXTINCTION_CYSTINE: u32 = 125;

/// Dipeptide instability weight values (Guruprasad, Reddy & Pandit 1990).
///
/// `DIWV[x][y]` is the weight of residue `x` followed by residue `y`; rows and
/// columns follow the one-letter order A C D E F G H I K L M N P Q R S T V W Y.
#[rustfmt::skip]
pub const DIWV: [[f64; 20]; 20] = [
    //  A       C       D       E       F       G       H       I       K       L       M       N       P       Q       R       S       T       V       W       Y
    [  1.0,  44.94,  -7.49,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0  ], // A
    [  1.0,   1.0,   20.26,   1.0,    1.0,    1.0,   33.60,   1.0,    1.0,   20.26,  33.60,   1.0,   20.26,  -6.54,   1.0,    1.0,   33.60,  -6.54,  24.68,   1.0  ], // C
    [  1.0,   1.0,    1.0,    1.0,   -6.54,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,   -6.54,  20.26, -14.03,   1.0,    1.0,    1.0  ], // D
    [  1.0,  44.94,  20.26,  33.60,   1.0,    1.0,   -6.54,  20.26,   1.0,    1.0,    1.0,    1.0,   20.26,  20.26,   1.0,   20.26,   1.0,    1.0,  -14.03,   1.0  ], // E
    [  1.0,   1.0,   13.34,   1.0,    1.0,    1.0,    1.0,    1.0,  -14.03,   1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   33.601], // F
    [ -7.49,  1.0,    1.0,   -6.54,   1.0,   13.34,   1.0,   -7.49,  -7.49,   1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,   13.34,  -7.49 ], // G
    [  1.0,   1.0,    1.0,    1.0,   -9.37,  -9.37,   1.0,   44.94,  24.68,   1.0,    1.0,   24.68,  -1.88,   1.0,    1.0,    1.0,   -6.54,   1.0,   -1.88,  44.94 ], // H
    [  1.0,   1.0,    1.0,   44.94,   1.0,    1.0,   13.34,   1.0,   -7.49,  20.26,   1.0,    1.0,   -1.88,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,    1.0  ], // I
    [  1.0,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,   -7.49,   1.0,   -7.49,  33.60,   1.0,   -6.54,  24.64,  33.60,   1.0,    1.0,   -7.49,   1.0,    1.0  ], // K
    [  1.0,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,   20.26,  33.60,  20.26,   1.0,    1.0,    1.0,   24.68,   1.0  ], // L
    [ 13.34,  1.0,    1.0,    1.0,    1.0,    1.0,   58.28,   1.0,    1.0,    1.0,   -1.88,   1.0,   44.94,  -6.54,  -6.54,  44.94,  -1.88,   1.0,    1.0,   24.68 ], // M
    [  1.0,  -1.88,   1.0,    1.0,  -14.03, -14.03,   1.0,   44.94,  24.68,   1.0,    1.0,    1.0,   -1.88,  -6.54,   1.0,    1.0,   -7.49,   1.0,   -9.37,   1.0  ], // N
    [ 20.26, -6.54,  -6.54,  18.38,  20.26,   1.0,    1.0,    1.0,    1.0,    1.0,   -6.54,   1.0,   20.26,  20.26,  -6.54,  20.26,   1.0,   20.26,  -1.88,   1.0  ], // P
    [  1.0,  -6.54,  20.26,  20.26,  -6.54,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   20.26,  20.26,   1.0,   44.94,   1.0,   -6.54,   1.0,   -6.54 ], // Q
    [  1.0,   1.0,    1.0,    1.0,    1.0,   -7.49,  20.26,   1.0,    1.0,    1.0,    1.0,   13.34,  20.26,  20.26,  58.28,  44.94,   1.0,    1.0,   58.28,  -6.54 ], // R
    [  1.0,  33.60,   1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   44.94,  20.26,  20.26,  20.26,   1.0,    1.0,    1.0,    1.0  ], // S
    [  1.0,   1.0,    1.0,   20.26,  13.34,  -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,  -14.03,   1.0,   -6.54,   1.0,    1.0,    1.0,    1.0,  -14.03,   1.0  ], // T
    [  1.0,   1.0,  -14.03,   1.0,    1.0,   -7.49,   1.0,    1.0,   -1.88,   1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,   -6.54 ], // V
    [-14.03,  1.0,    1.0,    1.0,    1.0,   -9.37,  24.68,   1.0,    1.0,   13.34,  24.68,  13.34,   1.0,    1.0,    1.0,    1.0,  -14.03,  -7.49,   1.0,    1.0  ], // W
    [ 24.68,  1.0,   24.68,  -6.54,   1.0,   -7.49,  13.34,   1.0,    1.0,    1.0,   44.94,   1.0,   13.34,   1.0,  -15.91,   1.0,   -7.49,   1.0,   -9.37,  13.34 ], // Y
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::AminoAcid;

    #[test]
    fn every_standard_residue_has_weights_and_hydropathy() {
        for aa in AminoAcid::ALL {
            let code = aa.code();
            assert!(AVERAGE_WEIGHTS.contains_key(&code), "average weight for {code}");
            assert!(MONOISOTOPIC_WEIGHTS.contains_key(&code), "monoisotopic weight for {code}");
            assert!(KYTE_DOOLITTLE.contains_key(&code), "hydropathy for {code}");
        }
        assert_eq!(AVERAGE_WEIGHTS.len(), 20);
    }

    #[test]
    fn monoisotopic_weights_are_lighter_than_average() {
        for aa in AminoAcid::ALL {
            let code = aa.code();
            assert!(MONOISOTOPIC_WEIGHTS[&code] < AVERAGE_WEIGHTS[&code]);
        }
    }

    #[test]
    fn diwv_spot_checks() {
        let idx = |c: char| AminoAcid::from_code(c).unwrap().index();
        assert_eq!(DIWV[idx('A')][idx('A')], 1.0);
        assert_eq!(DIWV[idx('A')][idx('C')], 44.94);
        assert_eq!(DIWV[idx('M')][idx('H')], 58.28);
        assert_eq!(DIWV[idx('Y')][idx('R')], -15.91);
        assert_eq!(DIWV[idx('W')][idx('A')], -14.03);
        assert_eq!(DIWV[idx('P')][idx('E')], 18.38);
    }

    #[test]
    fn secondary_structure_groups_are_standard_residues() {
        for c in HELIX_RESIDUES.iter().chain(&TURN_RESIDUES).chain(&SHEET_RESIDUES) {
            assert!(AminoAcid::from_code(*c).is_some());
        }
    }
}
