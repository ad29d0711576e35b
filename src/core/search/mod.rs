//! Line search engine.
//!
//! Case-insensitive substring matching over the files of a scope, with
//! a stop-early result cap.

mod lines;
mod scan;

pub use lines::{match_lines, read_lossy, search_in_file};
pub use scan::SearchService;
