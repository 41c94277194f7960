//! Load-balanced reviewer allocation.
//!
//! A greedy per-paper allocator over the affinity matrix. Papers are
//! processed in input order; for each paper it repeatedly picks the
//! highest-scoring reviewer that is conflict-free and under capacity, then
//! applies a multiplicative fairness decay to that reviewer's scores for
//! all later papers. The decay is what turns a purely local matcher into
//! one that spreads load across the pool: after each selection the runner-up
//! experts become comparatively more attractive.
//!
//! Selections for earlier papers influence later papers through both load
//! accounting and decay, so the algorithm is inherently sequential and the
//! paper input order is part of the contract.
//!
//! # Key Types
//!
//! - [`AssignConfig`]: parameters (target reviewers per paper)
//! - [`AssignRunner`]: executes the greedy loop
//! - [`AssignResult`]: per-paper assignments, final loads, aggregate counts
//! - [`FAIRNESS_DECAY`]: the per-selection score penalty factor

mod config;
mod runner;
mod types;

pub use config::AssignConfig;
pub use runner::{AssignRunner, FAIRNESS_DECAY};
pub use types::{AssignResult, AssignedReviewer, PaperAssignment};
