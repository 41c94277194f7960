//! CSV export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::assign::AssignResult;

/// Writes the assignment map as flat CSV, one row per selection.
///
/// Header: `paper_id,reviewer_id,score,num_assigned`. Rows follow paper
/// processing order; papers with no assigned reviewer emit a single row
/// with empty reviewer and score fields so every paper appears in the
/// output.
pub fn write_csv<W: Write>(out: &mut W, result: &AssignResult) -> io::Result<()> {
    writeln!(out, "paper_id,reviewer_id,score,num_assigned")?;
    for assignment in &result.assignments {
        if assignment.assigned.is_empty() {
            writeln!(out, "{},,,0", assignment.paper_id)?;
            continue;
        }
        for picked in &assignment.assigned {
            writeln!(
                out,
                "{},{},{:.4},{}",
                assignment.paper_id, picked.reviewer_id, picked.score, assignment.num_assigned
            )?;
        }
    }
    Ok(())
}

/// Writes the CSV to `path`, creating or truncating the file.
pub fn write_csv_file(path: impl AsRef<Path>, result: &AssignResult) -> io::Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_csv(&mut out, result)?;
    out.flush()?;
    info!(
        path = %path.display(),
        selections = result.total_assigned,
        "assignments written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::{AssignedReviewer, PaperAssignment};
    use std::collections::HashMap;

    fn sample_result() -> AssignResult {
        AssignResult {
            assignments: vec![
                PaperAssignment {
                    paper_id: "p1".to_string(),
                    assigned: vec![
                        AssignedReviewer {
                            reviewer_id: "r1".to_string(),
                            score: 0.75,
                        },
                        AssignedReviewer {
                            reviewer_id: "r2".to_string(),
                            score: 0.5,
                        },
                    ],
                    num_assigned: 2,
                },
                PaperAssignment {
                    paper_id: "p2".to_string(),
                    assigned: Vec::new(),
                    num_assigned: 0,
                },
            ],
            loads: HashMap::new(),
            total_assigned: 2,
            papers_covered: 1,
        }
    }

    #[test]
    fn test_csv_layout() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample_result()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "paper_id,reviewer_id,score,num_assigned");
        assert_eq!(lines[1], "p1,r1,0.7500,2");
        assert_eq!(lines[2], "p1,r2,0.5000,2");
        assert_eq!(lines[3], "p2,,,0");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_csv_file_roundtrip() {
        let dir = std::env::temp_dir().join("review_match_csv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("assignments.csv");

        write_csv_file(&path, &sample_result()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("paper_id,reviewer_id,score,num_assigned"));
        assert_eq!(text.lines().count(), 4);
    }
}
