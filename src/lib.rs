//! Reviewer-to-paper matching engine.
//!
//! Matches conference submissions to qualified, conflict-free reviewers
//! under per-reviewer workload caps:
//!
//! - **Affinity scoring**: Jaccard similarity over normalized keyword
//!   sets, with conflict-of-interest pairs hard-excluded as `-inf`.
//! - **Load-balanced allocation**: greedy per-paper selection with a
//!   multiplicative cross-paper fairness decay, spreading work across the
//!   reviewer pool instead of concentrating it on the single best expert.
//!
//! The engine favors transparency over optimality: every selection is a
//! locally-best pick whose score is recorded in the output, and identical
//! inputs always reproduce identical assignments. It is not a min-cost
//! assignment solver.
//!
//! # Architecture
//!
//! Raw JSON records enter through [`load`], become [`model`] structs, flow
//! through [`affinity`] into a dense score matrix, which [`assign`]
//! consumes to produce the per-paper assignment map rendered by
//! [`report`]. Scoring is pure; all mutable state (working matrix, load
//! counters) is owned by the allocator for the duration of one run.

pub mod affinity;
pub mod assign;
pub mod load;
pub mod model;
pub mod report;
