use super::result::{Alignment, AlignmentSet, GAP};
use super::scoring::Scoring;
use crate::core::models::sequence::clean_sequence;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, trace};

pub const DEFAULT_MAX_ALIGNMENTS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AlignmentError {
    #[error("No alignment could be produced: {0}")]
    NoAlignment(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    GapInA,
    GapInB,
    Diagonal,
}

const MOVE_ORDER: [Move; 3] = [Move::GapInA, Move::GapInB, Move::Diagonal];

/// One traceback column and the cell it leads to.
#[derive(Debug, Clone, Copy)]
struct Step {
    i: usize,
    j: usize,
    col_a: char,
    col_b: char,
}

/// Optimal moves out of a cell, smallest resulting alignment first.
#[derive(Debug, Clone, Copy)]
struct Choices {
    moves: [Move; 3],
    len: usize,
}

impl Choices {
    const EMPTY: Self = Self {
        moves: MOVE_ORDER,
        len: 0,
    };

    fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

struct Frame {
    i: usize,
    j: usize,
    next_choice: usize,
}

/// Global aligner that enumerates every optimal alignment up to a limit.
///
/// `scores[i][j]` holds the optimal score of aligning `a[i..]` with `b[j..]`,
/// widened to `i64` to hold sums of `i32` column scores.
pub struct GlobalAligner<'a> {
    a: Vec<char>,
    b: Vec<char>,
    scoring: &'a Scoring,
    cols: usize,
    scores: Vec<i64>,
    choices: Vec<Choices>,
}

impl<'a> GlobalAligner<'a> {
    pub fn new(a: &str, b: &str, scoring: &'a Scoring) -> Self {
        let a: Vec<char> = clean_sequence(a).to_uppercase().chars().collect();
        let b: Vec<char> = clean_sequence(b).to_uppercase().chars().collect();
        let cols = b.len() + 1;
        let cells = (a.len() + 1) * cols;
        let mut aligner = Self {
            a,
            b,
            scoring,
            cols,
            scores: vec![0; cells],
            choices: vec![Choices::EMPTY; cells],
        };
        aligner.fill();
        aligner
    }

    pub fn optimal_score(&self) -> i64 {
        self.cell(0, 0)
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> i64 {
        self.scores[i * self.cols + j]
    }

    /// Column produced by `mv` at `(i, j)` and its score, if the move fits.
    fn advance(&self, i: usize, j: usize, mv: Move) -> Option<(Step, i64)> {
        let (n, m) = (self.a.len(), self.b.len());
        let gap = i64::from(self.scoring.gap());
        let (step, gained) = match mv {
            Move::GapInA if j < m => (
                Step {
                    i,
                    j: j + 1,
                    col_a: GAP,
                    col_b: self.b[j],
                },
                gap,
            ),
            Move::GapInB if i < n => (
                Step {
                    i: i + 1,
                    j,
                    col_a: self.a[i],
                    col_b: GAP,
                },
                gap,
            ),
            Move::Diagonal if i < n && j < m => (
                Step {
                    i: i + 1,
                    j: j + 1,
                    col_a: self.a[i],
                    col_b: self.b[j],
                },
                i64::from(self.scoring.pair(self.a[i], self.b[j])),
            ),
            _ => return None,
        };
        Some((step, gained))
    }

    /// First column of the smallest optimal alignment from `(i, j)`.
    fn best_step(&self, i: usize, j: usize) -> Option<Step> {
        let mv = *self.choices[i * self.cols + j].as_slice().first()?;
        self.advance(i, j, mv).map(|(step, _)| step)
    }

    /// Orders two optimal continuations by the `(aligned_a, aligned_b)` pair
    /// they complete, following each one's smallest path until they meet.
    fn compare_steps(&self, x: Step, y: Step) -> Ordering {
        if x.col_a != y.col_a {
            return x.col_a.cmp(&y.col_a);
        }
        let mut tie = x.col_b.cmp(&y.col_b);
        let (mut p, mut q) = (x, y);
        loop {
            if (p.i, p.j) == (q.i, q.j) {
                return tie;
            }
            match (self.best_step(p.i, p.j), self.best_step(q.i, q.j)) {
                (None, None) => return tie,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(s), Some(t)) => {
                    if s.col_a != t.col_a {
                        return s.col_a.cmp(&t.col_a);
                    }
                    if tie == Ordering::Equal {
                        tie = s.col_b.cmp(&t.col_b);
                    }
                    p = s;
                    q = t;
                }
            }
        }
    }

    /// Fills scores and sorted optimal moves from the bottom-right corner.
    fn fill(&mut self) {
        let (n, m) = (self.a.len(), self.b.len());
        for i in (0..=n).rev() {
            for j in (0..=m).rev() {
                if i == n && j == m {
                    continue;
                }
                let candidates: Vec<(Move, Step, i64)> = MOVE_ORDER
                    .iter()
                    .filter_map(|&mv| {
                        self.advance(i, j, mv).map(|(step, gained)| {
                            (mv, step, self.cell(step.i, step.j) + gained)
                        })
                    })
                    .collect();
                let best = candidates
                    .iter()
                    .map(|&(_, _, total)| total)
                    .max()
                    .unwrap_or(0);
                self.scores[i * self.cols + j] = best;

                let mut optimal: Vec<(Move, Step)> = candidates
                    .into_iter()
                    .filter(|&(_, _, total)| total == best)
                    .map(|(mv, step, _)| (mv, step))
                    .collect();
                optimal.sort_by(|x, y| self.compare_steps(x.1, y.1));

                let mut choices = Choices::EMPTY;
                for (slot, (mv, _)) in optimal.into_iter().enumerate() {
                    choices.moves[slot] = mv;
                    choices.len = slot + 1;
                }
                self.choices[i * self.cols + j] = choices;
            }
        }
    }

    /// Depth-first traceback from `(0, 0)` that visits the optimal moves of
    /// every cell smallest-first, so the first alignment produced is the
    /// lexicographically smallest `(aligned_a, aligned_b)` pair whatever the
    /// limit.
    ///
    /// Stops after `limit` alignments; the returned flag reports whether at
    /// least one further optimal alignment exists.
    pub fn enumerate(&self, limit: usize) -> (Vec<Alignment>, bool) {
        let limit = limit.max(1);
        let (n, m) = (self.a.len(), self.b.len());
        let score = self.optimal_score();

        let mut found = Vec::new();
        let mut truncated = false;
        let mut columns_a: Vec<char> = Vec::with_capacity(n + m);
        let mut columns_b: Vec<char> = Vec::with_capacity(n + m);
        let mut stack = vec![Frame {
            i: 0,
            j: 0,
            next_choice: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.i == n && frame.j == m {
                if found.len() == limit {
                    truncated = true;
                    break;
                }
                found.push(Alignment::from_columns(&columns_a, &columns_b, score));
                stack.pop();
                columns_a.pop();
                columns_b.pop();
                continue;
            }

            let moves = self.choices[frame.i * self.cols + frame.j].as_slice();
            let advanced = moves
                .get(frame.next_choice)
                .and_then(|&mv| self.advance(frame.i, frame.j, mv));
            frame.next_choice += 1;

            match advanced {
                Some((step, _)) => {
                    columns_a.push(step.col_a);
                    columns_b.push(step.col_b);
                    stack.push(Frame {
                        i: step.i,
                        j: step.j,
                        next_choice: 0,
                    });
                }
                None => {
                    stack.pop();
                    columns_a.pop();
                    columns_b.pop();
                }
            }
        }

        trace!(count = found.len(), truncated, "Traceback finished");
        (found, truncated)
    }
}

/// Aligns `a` against `b` end to end and selects the best of all optimal
/// alignments found.
///
/// # Errors
///
/// Returns [`AlignmentError::NoAlignment`] when either input is empty after
/// cleaning.
pub fn align_global(
    a: &str,
    b: &str,
    scoring: &Scoring,
    max_alignments: usize,
) -> Result<AlignmentSet, AlignmentError> {
    let aligner = GlobalAligner::new(a, b, scoring);
    if aligner.a.is_empty() || aligner.b.is_empty() {
        return Err(AlignmentError::NoAlignment(
            "both sequences must contain at least one residue".to_string(),
        ));
    }

    let (alignments, truncated) = aligner.enumerate(max_alignments);
    debug!(
        len_a = aligner.a.len(),
        len_b = aligner.b.len(),
        score = aligner.optimal_score(),
        alignments = alignments.len(),
        truncated,
        "Global alignment complete"
    );

    AlignmentSet::select(alignments, truncated)
        .ok_or_else(|| AlignmentError::NoAlignment("traceback produced no path".to_string()))
}
