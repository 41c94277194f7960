//! Assignment result types.

use std::collections::HashMap;

/// One selected reviewer for one paper.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedReviewer {
    /// Id of the selected reviewer.
    pub reviewer_id: String,

    /// Candidate score at the moment of selection.
    ///
    /// This is the working-matrix value, so it reflects any fairness decay
    /// accumulated from the reviewer's earlier selections in the same run.
    /// Always in `[0.0, 1.0]`, since conflicted reviewers are never selected.
    pub score: f64,
}

/// The reviewers selected for a single paper, in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperAssignment {
    /// Id of the paper.
    pub paper_id: String,

    /// Selected reviewers, best candidate first.
    ///
    /// May be shorter than the configured target, or empty, when no
    /// eligible reviewer remained. That is an accepted outcome, not an
    /// error.
    pub assigned: Vec<AssignedReviewer>,

    /// Number of reviewers selected (same as `assigned.len()`).
    pub num_assigned: usize,
}

impl PaperAssignment {
    /// Whether a given reviewer was selected for this paper.
    pub fn contains_reviewer(&self, reviewer_id: &str) -> bool {
        self.assigned.iter().any(|a| a.reviewer_id == reviewer_id)
    }
}

/// Result of one allocation run.
///
/// Contains every paper's assignment in paper input order, plus the final
/// load state and aggregate counts.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignResult {
    /// Per-paper assignments, ordered as the submissions were supplied.
    pub assignments: Vec<PaperAssignment>,

    /// Final effective load per reviewer id: starting load plus every
    /// selection made during this run.
    pub loads: HashMap<String, usize>,

    /// Total number of selections across all papers.
    pub total_assigned: usize,

    /// Number of papers that received at least one reviewer.
    pub papers_covered: usize,
}

impl AssignResult {
    /// Looks up one paper's assignment by id.
    pub fn for_paper(&self, paper_id: &str) -> Option<&PaperAssignment> {
        self.assignments.iter().find(|a| a.paper_id == paper_id)
    }
}
