//! Paper submission record.

use serde::Deserialize;

/// A submitted paper awaiting reviewer assignment.
///
/// Deserialized from one element of the submissions JSON array. All fields
/// except `author_emails` are required; an absent author list defaults to
/// empty (such a paper can never trigger a conflict exclusion).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Submission {
    /// Unique identifier (e.g. `"p01"`).
    pub id: String,

    /// Paper title, used only in reports.
    pub title: String,

    /// Topic keywords. Normalized (trimmed, lowercased) by the scorer.
    pub keywords: Vec<String>,

    /// Author identifiers checked against reviewer conflict sets.
    #[serde(default)]
    pub author_emails: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "p01",
            "title": "Denoising Diffusion Models",
            "keywords": ["diffusion", "generative models", "sampling"],
            "author_emails": ["a.chen@vision.example.edu"]
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.id, "p01");
        assert_eq!(submission.keywords.len(), 3);
        assert_eq!(submission.author_emails.len(), 1);
    }

    #[test]
    fn test_author_emails_default_to_empty() {
        let json = r#"{
            "id": "p02",
            "title": "Scaling Laws",
            "keywords": ["transformers"]
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert!(submission.author_emails.is_empty());
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let json = r#"{
            "id": "p03",
            "keywords": []
        }"#;
        let result: Result<Submission, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
