//! Assignment reporting.
//!
//! Presentation-side consumers of the assignment map: aggregate statistics,
//! a human-readable console table, and a flat CSV export. Everything here
//! reads the allocator's output; nothing feeds back into scoring or
//! allocation.
//!
//! # Key Types
//!
//! - [`Summary`]: derived statistics (coverage, mean score, load spread)
//! - [`render_table`]: console table with running loads
//! - [`write_csv`] / [`write_csv_file`]: one-row-per-selection export

mod console;
mod csv;
mod summary;

pub use console::render_table;
pub use csv::{write_csv, write_csv_file};
pub use summary::Summary;
