//! Derived assignment statistics.

use std::collections::HashMap;

use crate::assign::AssignResult;

/// Aggregate statistics over one allocation run.
///
/// Everything here is derived from the assignment map; nothing feeds back
/// into scoring or allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Total number of (paper, reviewer) selections.
    pub total_assigned: usize,

    /// Papers that received at least one reviewer.
    pub papers_covered: usize,

    /// Total number of papers in the run.
    pub total_papers: usize,

    /// Mean recorded score across all selections; `0.0` when nothing was
    /// assigned.
    pub mean_score: f64,

    /// Sample standard deviation of per-reviewer assignment counts, taken
    /// over reviewers that received at least one paper. `0.0` with fewer
    /// than two such reviewers. A low value means the run spread work
    /// evenly.
    pub load_std_dev: f64,
}

impl Summary {
    /// Computes the summary for one run.
    pub fn from_result(result: &AssignResult) -> Self {
        let mut score_sum = 0.0;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for picked in result.assignments.iter().flat_map(|a| &a.assigned) {
            score_sum += picked.score;
            *counts.entry(picked.reviewer_id.as_str()).or_insert(0) += 1;
        }

        let mean_score = if result.total_assigned > 0 {
            score_sum / result.total_assigned as f64
        } else {
            0.0
        };
        let counts: Vec<f64> = counts.values().map(|&c| c as f64).collect();

        Self {
            total_assigned: result.total_assigned,
            papers_covered: result.papers_covered,
            total_papers: result.assignments.len(),
            mean_score,
            load_std_dev: sample_std_dev(&counts),
        }
    }
}

/// Sample standard deviation (n - 1 denominator); `0.0` below two samples.
fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::{AssignedReviewer, PaperAssignment};

    fn result_with(papers: &[(&str, &[(&str, f64)])]) -> AssignResult {
        let assignments: Vec<PaperAssignment> = papers
            .iter()
            .map(|(pid, picks)| PaperAssignment {
                paper_id: pid.to_string(),
                assigned: picks
                    .iter()
                    .map(|(rid, score)| AssignedReviewer {
                        reviewer_id: rid.to_string(),
                        score: *score,
                    })
                    .collect(),
                num_assigned: picks.len(),
            })
            .collect();
        let total_assigned = assignments.iter().map(|a| a.num_assigned).sum();
        let papers_covered = assignments.iter().filter(|a| a.num_assigned > 0).count();
        AssignResult {
            assignments,
            loads: HashMap::new(),
            total_assigned,
            papers_covered,
        }
    }

    #[test]
    fn test_counts_and_mean() {
        let result = result_with(&[
            ("p1", &[("r1", 0.8), ("r2", 0.4)]),
            ("p2", &[("r1", 0.6)]),
            ("p3", &[]),
        ]);
        let summary = Summary::from_result(&result);
        assert_eq!(summary.total_assigned, 3);
        assert_eq!(summary.papers_covered, 2);
        assert_eq!(summary.total_papers, 3);
        assert!((summary.mean_score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_load_std_dev_over_assigned_reviewers() {
        // r1 twice, r2 once: sample std of [2, 1] = sqrt(0.5)
        let result = result_with(&[
            ("p1", &[("r1", 0.5), ("r2", 0.5)]),
            ("p2", &[("r1", 0.5)]),
        ]);
        let summary = Summary::from_result(&result);
        assert!((summary.load_std_dev - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_assigned_reviewer_has_zero_std_dev() {
        let result = result_with(&[("p1", &[("r1", 0.5)])]);
        let summary = Summary::from_result(&result);
        assert_eq!(summary.load_std_dev, 0.0);
    }

    #[test]
    fn test_empty_run() {
        let result = result_with(&[("p1", &[]), ("p2", &[])]);
        let summary = Summary::from_result(&result);
        assert_eq!(summary.total_assigned, 0);
        assert_eq!(summary.papers_covered, 0);
        assert_eq!(summary.mean_score, 0.0);
        assert_eq!(summary.load_std_dev, 0.0);
    }

    #[test]
    fn test_sample_std_dev_basics() {
        assert_eq!(sample_std_dev(&[]), 0.0);
        assert_eq!(sample_std_dev(&[3.0]), 0.0);
        assert!((sample_std_dev(&[2.0, 2.0, 2.0]) - 0.0).abs() < 1e-12);
        // [1, 2, 3]: variance 1.0
        assert!((sample_std_dev(&[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-12);
    }
}
