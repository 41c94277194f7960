//! Console table rendering.

use std::collections::HashMap;
use std::io::{self, Write};

use super::summary::Summary;
use crate::assign::AssignResult;
use crate::model::{Reviewer, Submission};

const TABLE_WIDTH: usize = 94;
const TITLE_CHARS: usize = 38;

/// Renders the assignment table followed by the summary block.
///
/// One row per selection, in paper processing order, showing the load the
/// reviewer carries after that selection. Papers with no eligible reviewer
/// get an explicit placeholder row so under-coverage stays visible.
///
/// Writes to any sink, so tests can capture the output in a buffer.
///
/// # Panics
/// Panics if `result` references a reviewer id absent from `reviewers`.
pub fn render_table<W: Write>(
    out: &mut W,
    reviewers: &[Reviewer],
    submissions: &[Submission],
    result: &AssignResult,
) -> io::Result<()> {
    let by_id: HashMap<&str, &Reviewer> =
        reviewers.iter().map(|r| (r.id.as_str(), r)).collect();
    let titles: HashMap<&str, &str> = submissions
        .iter()
        .map(|s| (s.id.as_str(), s.title.as_str()))
        .collect();

    writeln!(out)?;
    writeln!(out, "=== Suggested Assignments ===")?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<10} {:<40} {:<22} {:<8} {:<10}",
        "Paper ID", "Title", "Reviewer", "Score", "New Load"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    let mut picks_so_far: HashMap<&str, usize> = HashMap::new();
    for assignment in &result.assignments {
        let title = titles
            .get(assignment.paper_id.as_str())
            .copied()
            .unwrap_or("");
        let title = truncate(title, TITLE_CHARS);

        if assignment.assigned.is_empty() {
            writeln!(
                out,
                "{:<10} {:<40} {:<22} {:<8} {:<10}",
                assignment.paper_id, title, "(no suitable reviewer)", "-", "-"
            )?;
            continue;
        }

        for picked in &assignment.assigned {
            let reviewer = by_id
                .get(picked.reviewer_id.as_str())
                .expect("reviewer id not in roster");
            let count = picks_so_far.entry(picked.reviewer_id.as_str()).or_insert(0);
            *count += 1;
            let load = format!("{}/{}", reviewer.current_load + *count, reviewer.max_load);
            writeln!(
                out,
                "{:<10} {:<40} {:<22} {:<8.3} {:<10}",
                assignment.paper_id, title, reviewer.name, picked.score, load
            )?;
        }
    }

    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
    let summary = Summary::from_result(result);
    if summary.total_assigned > 0 {
        writeln!(out, "Average expertise score : {:.3}", summary.mean_score)?;
        writeln!(out, "Load std deviation      : {:.2}", summary.load_std_dev)?;
    }
    writeln!(out, "Total assigned reviews  : {}", summary.total_assigned)?;
    writeln!(
        out,
        "Papers covered          : {} / {}",
        summary.papers_covered, summary.total_papers
    )
}

/// Truncates on character boundaries, so multi-byte titles never split.
fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
