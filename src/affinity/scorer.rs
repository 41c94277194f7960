//! Affinity computation: Jaccard keyword overlap with conflict exclusion.

use std::collections::HashSet;

use tracing::debug;

use super::matrix::AffinityMatrix;
use crate::model::{Reviewer, Submission};

/// Normalizes a raw keyword list to a canonical set.
///
/// Each keyword is trimmed and lowercased; entries that are empty after
/// trimming are dropped. Duplicates collapse, so scoring is insensitive to
/// casing and repetition in the input files.
pub fn keyword_set(keywords: &[String]) -> HashSet<String> {
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Jaccard similarity of two sets: intersection size over union size.
///
/// Defined as `0.0` when both sets are empty, so keyword-less records score
/// zero rather than dividing by zero. Always in `[0.0, 1.0]`.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Whether a reviewer has a conflict of interest with a submission.
///
/// True when any of the reviewer's conflict identifiers appears verbatim in
/// the submission's author list. Identifiers are compared exactly: only
/// keywords get case normalization, not emails.
pub fn has_conflict(reviewer: &Reviewer, submission: &Submission) -> bool {
    reviewer
        .conflicts
        .iter()
        .any(|c| submission.author_emails.contains(c))
}

/// Computes the complete reviewer x paper affinity matrix.
///
/// Every pair gets a score: `NEG_INFINITY` under a conflict of interest,
/// otherwise the Jaccard similarity of the normalized keyword sets. Pure
/// with respect to its inputs; identical rosters always produce an
/// identical matrix.
pub fn compute_affinity(reviewers: &[Reviewer], submissions: &[Submission]) -> AffinityMatrix {
    let reviewer_ids = reviewers.iter().map(|r| r.id.clone()).collect();
    let paper_ids = submissions.iter().map(|s| s.id.clone()).collect();
    let mut matrix = AffinityMatrix::new(reviewer_ids, paper_ids);

    let paper_keywords: Vec<HashSet<String>> = submissions
        .iter()
        .map(|s| keyword_set(&s.keywords))
        .collect();

    for (r, reviewer) in reviewers.iter().enumerate() {
        let expertise = keyword_set(&reviewer.expertise);
        for (p, submission) in submissions.iter().enumerate() {
            let score = if has_conflict(reviewer, submission) {
                f64::NEG_INFINITY
            } else {
                jaccard(&expertise, &paper_keywords[p])
            };
            matrix.set(r, p, score);
        }
    }

    debug!(
        reviewers = reviewers.len(),
        papers = submissions.len(),
        "computed affinity matrix"
    );
    matrix
}
