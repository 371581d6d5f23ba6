//! Output formatting for range inventories.
//!
//! This module handles formatting and outputting address data:
//! - csv - CSV address listing
//! - terminal - Range summaries and totals with colors
//! - json - JSON export of inventories and totals

mod csv;
mod json;
mod terminal;

pub use csv::{format_address_row, print_inventory_csv, CSV_HEADER};
pub use json::{inventory_to_json, report_to_json};
pub use terminal::{
    format_dashboard_stats, format_field, format_range_summary, print_dashboard_stats,
    print_range_summaries,
};
