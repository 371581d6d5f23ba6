//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::processing::{DashboardStats, RangeInventory, Utilization};
use colored::{ColoredString, Colorize};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn paint_utilization(text: &str, utilization: Utilization) -> ColoredString {
    match utilization {
        Utilization::Critical => text.on_red(),
        Utilization::High => text.bright_red(),
        Utilization::Moderate => text.yellow(),
        Utilization::Low => text.green(),
    }
}

/// One summary line for a range: name, block, label and usage.
pub fn format_range_summary(inventory: &RangeInventory) -> String {
    let stats = &inventory.stats;
    let usage = format!(
        "{used}/{total} ({pct}%)",
        used = stats.used_ips,
        total = stats.total_ips,
        pct = stats.utilization_percent()
    );
    format!(
        "RANGE: '{name}' {block} [{label}] vlan={vlan} - {usage} available={available} reserved={reserved} offline={offline}",
        name = inventory.range.name,
        block = inventory.block,
        label = inventory.range.label.display_text(),
        vlan = inventory.range.vlan.as_deref().unwrap_or("None"),
        usage = paint_utilization(&usage, stats.utilization()),
        available = stats.available_ips,
        reserved = stats.reserved_ips,
        offline = stats.offline_ips,
    )
}

/// Print the summary line of every range.
pub fn print_range_summaries(inventories: &[RangeInventory]) {
    for inventory in inventories {
        println!("{}", format_range_summary(inventory));
    }
}

/// Totals line over all ranges included in statistics.
pub fn format_dashboard_stats(stats: &DashboardStats) -> String {
    format!(
        "#{}# {ranges} range(s): total={total} used={used} available={available} utilization={pct}%",
        "TOTAL".on_blue(),
        ranges = stats.ranges_counted,
        total = stats.total_ips,
        used = stats.used_ips,
        available = stats.available_ips,
        pct = stats.utilization_percent(),
    )
}

pub fn print_dashboard_stats(stats: &DashboardStats) {
    println!("{}", format_dashboard_stats(stats));
}
