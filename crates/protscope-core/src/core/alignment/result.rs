use serde::Serialize;
use std::fmt;

pub const GAP: char = '-';

/// One global alignment: two gapped strings of equal length and their score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub aligned_a: String,
    pub aligned_b: String,
    pub score: i64,
    pub start: usize,
    pub end: usize,
}

impl Alignment {
    pub(crate) fn from_columns(columns_a: &[char], columns_b: &[char], score: i64) -> Self {
        Self {
            aligned_a: columns_a.iter().collect(),
            aligned_b: columns_b.iter().collect(),
            score,
            start: 0,
            end: columns_a.len(),
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn columns(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.aligned_a.chars().zip(self.aligned_b.chars())
    }

    /// Columns where both sides carry the same residue.
    pub fn matches(&self) -> usize {
        self.columns().filter(|(a, b)| a == b && *a != GAP).count()
    }

    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.matches() as f64 / self.len() as f64
        }
    }

    pub fn match_line(&self) -> String {
        self.columns()
            .map(|(a, b)| match (a, b) {
                (GAP, _) | (_, GAP) => ' ',
                (a, b) if a == b => '|',
                _ => '.',
            })
            .collect()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.aligned_a)?;
        writeln!(f, "{}", self.match_line())?;
        writeln!(f, "{}", self.aligned_b)?;
        write!(f, "  Score={}", self.score)
    }
}

/// Every enumerated optimal alignment together with the selected best one.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentSet {
    alignments: Vec<Alignment>,
    best_index: usize,
    truncated: bool,
}

impl AlignmentSet {
    /// Picks the highest scoring alignment; equal scores fall back to the
    /// lexicographically smallest `(aligned_a, aligned_b)` pair.
    ///
    /// Returns `None` for an empty candidate list.
    pub(crate) fn select(alignments: Vec<Alignment>, truncated: bool) -> Option<Self> {
        let best_index = alignments
            .iter()
            .enumerate()
            .min_by(|(_, x), (_, y)| {
                y.score
                    .cmp(&x.score)
                    .then_with(|| x.aligned_a.cmp(&y.aligned_a))
                    .then_with(|| x.aligned_b.cmp(&y.aligned_b))
            })
            .map(|(index, _)| index)?;

        Some(Self {
            alignments,
            best_index,
            truncated,
        })
    }

    pub fn best(&self) -> &Alignment {
        &self.alignments[self.best_index]
    }

    pub fn score(&self) -> i64 {
        self.best().score
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alignment> {
        self.alignments.iter()
    }

    pub fn len(&self) -> usize {
        self.alignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alignments.is_empty()
    }

    /// True when more optimal alignments existed than the enumeration limit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(a: &str, b: &str, score: i64) -> Alignment {
        let ca: Vec<char> = a.chars().collect();
        let cb: Vec<char> = b.chars().collect();
        Alignment::from_columns(&ca, &cb, score)
    }

    #[test]
    fn matches_and_identity_ignore_gaps() {
        let aln = alignment("AC-GT", "ACTG-", 3);
        assert_eq!(aln.len(), 5);
        assert_eq!(aln.matches(), 3);
        assert!((aln.identity() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn display_draws_match_line_and_score() {
        let aln = alignment("MEEPQSD-PSV", "MEEPQSDL-SV", 9);
        let rendered = aln.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "MEEPQSD-PSV");
        assert_eq!(lines[1], "|||||||  ||");
        assert_eq!(lines[2], "MEEPQSDL-SV");
        assert_eq!(lines[3], "  Score=9");
    }

    #[test]
    fn mismatch_columns_use_a_dot() {
        assert_eq!(alignment("AC", "AD", 1).match_line(), "|.");
    }

    #[test]
    fn select_prefers_score_then_lexicographic_order() {
        let set = AlignmentSet::select(
            vec![
                alignment("AB", "AB", 1),
                alignment("A-B", "AB-", 2),
                alignment("-AB", "AB-", 2),
            ],
            false,
        )
        .unwrap();
        assert_eq!(set.best().aligned_a, "-AB");
        assert_eq!(set.score(), 2);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn select_of_nothing_is_none() {
        assert!(AlignmentSet::select(Vec::new(), false).is_none());
    }
}
