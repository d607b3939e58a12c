use serde::{Deserialize, Serialize};

/// Column scores for global alignment. Gaps always score zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    pub match_score: i32,
    pub mismatch_score: i32,
}

impl Scoring {
    /// Identity counting: one point per matched column, nothing else scores.
    pub const fn match_counting() -> Self {
        Self {
            match_score: 1,
            mismatch_score: 0,
        }
    }

    pub const fn new(match_score: i32, mismatch_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
        }
    }

    #[inline]
    pub fn pair(&self, a: char, b: char) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    #[inline]
    pub const fn gap(&self) -> i32 {
        0
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::match_counting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_match_counting() {
        let scoring = Scoring::default();
        assert_eq!(scoring.pair('A', 'A'), 1);
        assert_eq!(scoring.pair('A', 'C'), 0);
        assert_eq!(scoring.gap(), 0);
    }

    #[test]
    fn custom_scores_are_applied() {
        let scoring = Scoring::new(2, -1);
        assert_eq!(scoring.pair('W', 'W'), 2);
        assert_eq!(scoring.pair('W', 'Y'), -1);
    }
}
