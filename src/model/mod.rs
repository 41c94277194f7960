//! Domain records for the matching pipeline.
//!
//! Plain data structs deserialized from the input JSON files. Records are
//! read-only for the duration of a run; mutable state (reviewer load) is
//! tracked separately by the allocator.
//!
//! # Key Types
//!
//! - [`Reviewer`]: roster entry with expertise, capacity, and conflict set
//! - [`Submission`]: paper entry with keywords and author identifiers

mod reviewer;
mod submission;

pub use reviewer::Reviewer;
pub use submission::Submission;
