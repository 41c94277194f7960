//! Dense reviewer x paper score storage.

use std::collections::HashMap;

/// A dense score matrix with reviewers as rows and papers as columns.
///
/// Stores one `f64` per (reviewer, paper) pair in row-major order, plus
/// id-to-index maps so callers can address cells either way. Scores lie in
/// `[0.0, 1.0]` with `f64::NEG_INFINITY` marking hard conflict exclusions.
///
/// Row and column order is the input order of the rosters the matrix was
/// built from; that order also drives deterministic tie-breaking during
/// allocation, so it must not be shuffled.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityMatrix {
    reviewer_ids: Vec<String>,
    paper_ids: Vec<String>,
    reviewer_index: HashMap<String, usize>,
    paper_index: HashMap<String, usize>,
    scores: Vec<f64>,
}

impl AffinityMatrix {
    /// Creates a zero-filled matrix over the given id lists.
    pub fn new(reviewer_ids: Vec<String>, paper_ids: Vec<String>) -> Self {
        let reviewer_index = reviewer_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        let paper_index = paper_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        let scores = vec![0.0; reviewer_ids.len() * paper_ids.len()];
        Self {
            reviewer_ids,
            paper_ids,
            reviewer_index,
            paper_index,
            scores,
        }
    }

    /// Number of reviewer rows.
    pub fn num_reviewers(&self) -> usize {
        self.reviewer_ids.len()
    }

    /// Number of paper columns.
    pub fn num_papers(&self) -> usize {
        self.paper_ids.len()
    }

    /// Reviewer ids in row order.
    pub fn reviewer_ids(&self) -> &[String] {
        &self.reviewer_ids
    }

    /// Paper ids in column order.
    pub fn paper_ids(&self) -> &[String] {
        &self.paper_ids
    }

    /// Row index of a reviewer id, if present.
    pub fn reviewer_index(&self, id: &str) -> Option<usize> {
        self.reviewer_index.get(id).copied()
    }

    /// Column index of a paper id, if present.
    pub fn paper_index(&self, id: &str) -> Option<usize> {
        self.paper_index.get(id).copied()
    }

    /// Score at (row, column).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, reviewer: usize, paper: usize) -> f64 {
        self.scores[self.offset(reviewer, paper)]
    }

    /// Sets the score at (row, column).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn set(&mut self, reviewer: usize, paper: usize, value: f64) {
        let offset = self.offset(reviewer, paper);
        self.scores[offset] = value;
    }

    /// Score addressed by ids; `None` if either id is unknown.
    pub fn score(&self, reviewer_id: &str, paper_id: &str) -> Option<f64> {
        let r = self.reviewer_index(reviewer_id)?;
        let p = self.paper_index(paper_id)?;
        Some(self.get(r, p))
    }

    /// Copies one paper's scores across all reviewers, in row order.
    pub fn column(&self, paper: usize) -> Vec<f64> {
        (0..self.num_reviewers())
            .map(|r| self.get(r, paper))
            .collect()
    }

    /// Multiplies every score in a reviewer's row by `factor`.
    ///
    /// `NEG_INFINITY` entries stay `NEG_INFINITY` for any positive factor,
    /// so conflict markers survive repeated decay.
    pub fn scale_row(&mut self, reviewer: usize, factor: f64) {
        let width = self.num_papers();
        let start = reviewer * width;
        for value in &mut self.scores[start..start + width] {
            *value *= factor;
        }
    }

    #[inline]
    fn offset(&self, reviewer: usize, paper: usize) -> usize {
        debug_assert!(reviewer < self.reviewer_ids.len());
        debug_assert!(paper < self.paper_ids.len());
        reviewer * self.paper_ids.len() + paper
    }
}
