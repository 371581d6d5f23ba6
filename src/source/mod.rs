//! Range definition sources.
//!
//! - [`ranges_file`] - JSON file with range definitions

mod ranges_file;

pub use ranges_file::{parse_ranges, read_ranges_file};
