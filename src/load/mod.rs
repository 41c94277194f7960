//! Input data loading.
//!
//! Reads reviewer rosters and submission lists from JSON files (or
//! in-memory strings), validating them against an explicit schema at the
//! boundary. Malformed input (unparseable JSON, missing required fields,
//! duplicate ids) fails fast with a [`LoadError`] rather than limping
//! along with partial data.
//!
//! # Key Types
//!
//! - [`LoadError`]: typed load-boundary failures
//! - [`load_dataset`] / [`load_reviewers`] / [`load_submissions`]: file entry points
//! - [`parse_reviewers`] / [`parse_submissions`]: string entry points

mod error;
mod json;

pub use error::LoadError;
pub use json::{load_dataset, load_reviewers, load_submissions, parse_reviewers, parse_submissions};
