//! JSON roster loading and validation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::error::LoadError;
use crate::model::{Reviewer, Submission};

/// Parses a reviewer roster from a JSON array string.
///
/// Record order is preserved; it defines both the tie-breaking order during
/// allocation and the row order of the affinity matrix. Duplicate ids are
/// rejected. A reviewer whose `current_load` already exceeds `max_load` is
/// accepted with a warning; such a reviewer is simply never assignable.
pub fn parse_reviewers(data: &str) -> Result<Vec<Reviewer>, LoadError> {
    let reviewers: Vec<Reviewer> = serde_json::from_str(data)?;
    let mut seen = HashSet::new();
    for reviewer in &reviewers {
        if !seen.insert(reviewer.id.as_str()) {
            return Err(LoadError::DuplicateReviewerId(reviewer.id.clone()));
        }
        if reviewer.current_load > reviewer.max_load {
            warn!(
                reviewer = %reviewer.id,
                current_load = reviewer.current_load,
                max_load = reviewer.max_load,
                "current load exceeds maximum; reviewer will never be assignable"
            );
        }
    }
    Ok(reviewers)
}

/// Parses a submission list from a JSON array string.
///
/// Record order is preserved; it defines the paper processing order of the
/// allocator. Duplicate ids are rejected.
pub fn parse_submissions(data: &str) -> Result<Vec<Submission>, LoadError> {
    let submissions: Vec<Submission> = serde_json::from_str(data)?;
    let mut seen = HashSet::new();
    for submission in &submissions {
        if !seen.insert(submission.id.as_str()) {
            return Err(LoadError::DuplicateSubmissionId(submission.id.clone()));
        }
    }
    Ok(submissions)
}

/// Loads a reviewer roster from a JSON file.
pub fn load_reviewers(path: impl AsRef<Path>) -> Result<Vec<Reviewer>, LoadError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_reviewers(&data)
}

/// Loads a submission list from a JSON file.
pub fn load_submissions(path: impl AsRef<Path>) -> Result<Vec<Submission>, LoadError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_submissions(&data)
}

/// Loads both rosters, reviewers first.
pub fn load_dataset(
    reviewers_path: impl AsRef<Path>,
    submissions_path: impl AsRef<Path>,
) -> Result<(Vec<Reviewer>, Vec<Submission>), LoadError> {
    let reviewers = load_reviewers(reviewers_path)?;
    let submissions = load_submissions(submissions_path)?;
    info!(
        reviewers = reviewers.len(),
        submissions = submissions.len(),
        "dataset loaded"
    );
    Ok((reviewers, submissions))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_REVIEWERS: &str = include_str!("../../data/sample_reviewers.json");
    const SAMPLE_SUBMISSIONS: &str = include_str!("../../data/submissions.json");

    #[test]
    fn test_parse_sample_reviewers() {
        let reviewers = parse_reviewers(SAMPLE_REVIEWERS).unwrap();
        assert_eq!(reviewers.len(), 6);
        assert_eq!(reviewers[0].id, "r1");
        assert_eq!(reviewers[0].name, "Dr. Ada Lovelace");
        assert!(!reviewers[0].conflicts.is_empty());
    }

    #[test]
    fn test_parse_sample_submissions() {
        let submissions = parse_submissions(SAMPLE_SUBMISSIONS).unwrap();
        assert_eq!(submissions.len(), 6);
        assert_eq!(submissions[0].id, "p01");
        assert!(submissions.iter().all(|s| !s.keywords.is_empty()));
    }

    #[test]
    fn test_parse_preserves_input_order() {
        let submissions = parse_submissions(SAMPLE_SUBMISSIONS).unwrap();
        let ids: Vec<&str> = submissions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["p01", "p02", "p03", "p04", "p05", "p06"]);
    }

    #[test]
    fn test_duplicate_reviewer_id_rejected() {
        let data = r#"[
            {"id": "r1", "name": "A", "expertise": [], "max_load": 1, "current_load": 0},
            {"id": "r1", "name": "B", "expertise": [], "max_load": 1, "current_load": 0}
        ]"#;
        let err = parse_reviewers(data).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateReviewerId(id) if id == "r1"));
    }

    #[test]
    fn test_duplicate_submission_id_rejected() {
        let data = r#"[
            {"id": "p1", "title": "A", "keywords": []},
            {"id": "p1", "title": "B", "keywords": []}
        ]"#;
        let err = parse_submissions(data).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateSubmissionId(id) if id == "p1"));
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let data = r#"[{"id": "r1", "name": "A", "expertise": []}]"#;
        let err = parse_reviewers(data).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        assert!(matches!(
            parse_reviewers("[{not json"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_over_capacity_reviewer_accepted() {
        let data = r#"[
            {"id": "r1", "name": "A", "expertise": [], "max_load": 1, "current_load": 3}
        ]"#;
        let reviewers = parse_reviewers(data).unwrap();
        assert_eq!(reviewers[0].current_load, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_reviewers("/nonexistent/reviewers.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_dataset_from_files() {
        let dir = std::env::temp_dir().join("review_match_load_test");
        fs::create_dir_all(&dir).unwrap();
        let rpath = dir.join("reviewers.json");
        let spath = dir.join("submissions.json");
        fs::write(&rpath, SAMPLE_REVIEWERS).unwrap();
        fs::write(&spath, SAMPLE_SUBMISSIONS).unwrap();

        let (reviewers, submissions) = load_dataset(&rpath, &spath).unwrap();
        assert_eq!(reviewers.len(), 6);
        assert_eq!(submissions.len(), 6);
    }
}
