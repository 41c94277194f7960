//! Greedy allocation loop execution.
//!
//! [`AssignRunner`] walks the papers in input order, repeatedly picking the
//! best-scoring eligible reviewer while tracking load and applying the
//! cross-paper fairness decay.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::config::AssignConfig;
use super::types::{AssignResult, AssignedReviewer, PaperAssignment};
use crate::affinity::{compute_affinity, AffinityMatrix};
use crate::model::{Reviewer, Submission};

/// Multiplicative penalty applied to a reviewer's entire score row after
/// each selection.
///
/// Each time a reviewer is picked, its scores for all later papers shrink
/// by this factor, making the next-best expert comparatively more
/// attractive and spreading work across the pool instead of piling it on
/// the single strongest match.
pub const FAIRNESS_DECAY: f64 = 0.95;

/// Executes the load-balanced greedy assignment.
///
/// # Usage
///
/// ```
/// use review_match::assign::{AssignConfig, AssignRunner};
/// use review_match::model::{Reviewer, Submission};
///
/// let reviewers = vec![Reviewer {
///     id: "r1".into(),
///     name: "Dr. Ada Lovelace".into(),
///     expertise: vec!["diffusion".into(), "generative models".into()],
///     max_load: 2,
///     current_load: 0,
///     conflicts: vec![],
/// }];
/// let submissions = vec![Submission {
///     id: "p01".into(),
///     title: "Denoising Diffusion Models".into(),
///     keywords: vec!["diffusion".into(), "generative models".into(), "sampling".into()],
///     author_emails: vec![],
/// }];
///
/// let config = AssignConfig::default();
/// let result = AssignRunner::run(&reviewers, &submissions, &config);
/// assert_eq!(result.assignments[0].num_assigned, 1);
/// ```
pub struct AssignRunner;

impl AssignRunner {
    /// Computes the affinity matrix for the rosters and allocates reviewers.
    ///
    /// Papers are processed in input order; selections for earlier papers
    /// influence later ones through load accounting and score decay, so
    /// the input order is part of the contract.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AssignConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(
        reviewers: &[Reviewer],
        submissions: &[Submission],
        config: &AssignConfig,
    ) -> AssignResult {
        let matrix = compute_affinity(reviewers, submissions);
        Self::run_with_matrix(reviewers, submissions, &matrix, config)
    }

    /// Allocates reviewers against a precomputed affinity matrix.
    ///
    /// The matrix must have been computed from exactly these rosters, in
    /// the same order. The caller's matrix is never mutated: the runner
    /// clones it into a private working copy before applying any decay, so
    /// the same base matrix can back multiple independent runs.
    ///
    /// Ties on the maximum candidate score break toward the reviewer that
    /// appears first in the roster, which keeps results reproducible for
    /// identical inputs.
    ///
    /// # Panics
    /// Panics if the configuration is invalid or the matrix dimensions do
    /// not match the rosters.
    pub fn run_with_matrix(
        reviewers: &[Reviewer],
        submissions: &[Submission],
        matrix: &AffinityMatrix,
        config: &AssignConfig,
    ) -> AssignResult {
        config.validate().expect("invalid AssignConfig");
        assert_eq!(
            matrix.num_reviewers(),
            reviewers.len(),
            "matrix rows must match the reviewer roster"
        );
        assert_eq!(
            matrix.num_papers(),
            submissions.len(),
            "matrix columns must match the submission list"
        );

        let mut working = matrix.clone();
        let mut loads: Vec<usize> = reviewers.iter().map(|r| r.current_load).collect();
        let mut assignments = Vec::with_capacity(submissions.len());
        let mut total_assigned = 0;

        for (p, submission) in submissions.iter().enumerate() {
            let mut candidates = working.column(p);

            // Reviewers already at capacity are out for this paper.
            for (r, reviewer) in reviewers.iter().enumerate() {
                if loads[r] >= reviewer.max_load {
                    candidates[r] = f64::NEG_INFINITY;
                }
            }

            let mut assigned = Vec::new();
            for _ in 0..config.reviews_per_paper {
                let Some(best) = argmax(&candidates) else {
                    break;
                };
                let score = candidates[best];
                if score == f64::NEG_INFINITY {
                    // No eligible reviewer remains; under-coverage is an
                    // accepted outcome, not an error.
                    break;
                }

                trace!(
                    paper = %submission.id,
                    reviewer = %reviewers[best].id,
                    score,
                    "selected reviewer"
                );
                assigned.push(AssignedReviewer {
                    reviewer_id: reviewers[best].id.clone(),
                    score,
                });
                loads[best] += 1;
                // Block repeat picks for this paper, then decay the
                // reviewer everywhere to spread later papers' load.
                candidates[best] = f64::NEG_INFINITY;
                working.scale_row(best, FAIRNESS_DECAY);
            }

            debug!(
                paper = %submission.id,
                assigned = assigned.len(),
                "paper processed"
            );
            total_assigned += assigned.len();
            let num_assigned = assigned.len();
            assignments.push(PaperAssignment {
                paper_id: submission.id.clone(),
                assigned,
                num_assigned,
            });
        }

        let papers_covered = assignments.iter().filter(|a| a.num_assigned > 0).count();
        let loads = reviewers
            .iter()
            .zip(&loads)
            .map(|(r, &load)| (r.id.clone(), load))
            .collect::<HashMap<_, _>>();

        AssignResult {
            assignments,
            loads,
            total_assigned,
            papers_covered,
        }
    }
}

/// Index of the first maximum value, or `None` for an empty slice.
fn argmax(values: &[f64]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    let mut best = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = i;
        }
    }
    Some(best)
}
