//! Affinity scoring.
//!
//! Produces a complete reviewer x paper score matrix from the input
//! rosters. Scores are Jaccard similarities over normalized keyword sets,
//! except for conflict-of-interest pairs, which are hard-excluded with
//! `f64::NEG_INFINITY` regardless of expertise overlap.
//!
//! Scoring is pure: no load state, no mutation of the rosters, identical
//! inputs always yield an identical matrix. The allocator takes its own
//! working copy before applying any decay.
//!
//! # Key Types
//!
//! - [`AffinityMatrix`]: dense row-major score storage with id-to-index maps
//! - [`compute_affinity`]: fills the matrix for a pair of rosters

mod matrix;
mod scorer;

pub use matrix::AffinityMatrix;
pub use scorer::{compute_affinity, has_conflict, jaccard, keyword_set};
