//! Reviewer roster record.

use serde::Deserialize;

/// A member of the reviewer pool.
///
/// Deserialized from one element of the reviewer roster JSON array. All
/// fields except `conflicts` are required; an absent `conflicts` list
/// defaults to empty.
///
/// The record itself is immutable during allocation; the running load is
/// tracked by the allocator, seeded from `current_load`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reviewer {
    /// Unique identifier (e.g. `"r1"`).
    pub id: String,

    /// Display name used in reports.
    pub name: String,

    /// Expertise keywords. Normalized (trimmed, lowercased) by the scorer,
    /// so the raw strings may carry arbitrary casing.
    pub expertise: Vec<String>,

    /// Maximum number of concurrent reviews this reviewer accepts.
    pub max_load: usize,

    /// Reviews already on this reviewer's plate at the start of the run.
    pub current_load: usize,

    /// Identifiers (typically author emails) this reviewer must never be
    /// matched against. Compared verbatim against submission author lists.
    #[serde(default)]
    pub conflicts: Vec<String>,
}
