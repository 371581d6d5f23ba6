//! IP range inventory.
//!
//! Derives the usable host addresses of operator-defined IPv4 ranges and
//! keeps address collections in canonical numeric order.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

pub use error::{AddressError, Result};

use config::Config;
use models::IpRange;
use processing::{build_inventory, RangeInventory};
use std::error::Error;

/// Ranges to list: hidden ones only when `show_hidden` is set.
pub fn visible_ranges(ranges: &[IpRange], show_hidden: bool) -> Vec<&IpRange> {
    ranges.iter().filter(|r| show_hidden || !r.hidden).collect()
}

/// Build an inventory for every range; invalid ranges are logged and skipped.
pub fn build_inventories(ranges: &[&IpRange], max_addresses: u64) -> Vec<RangeInventory> {
    ranges
        .iter()
        .filter_map(|range| match build_inventory(range, max_addresses) {
            Ok(inventory) => Some(inventory),
            Err(e) => {
                log::warn!(
                    "Skipping range '{}' ({}/{}): {e}",
                    range.name,
                    range.network,
                    range.cidr
                );
                None
            }
        })
        .collect()
}

/// Read the configured ranges file and build the inventories to show.
pub fn load_inventories(config: &Config) -> std::result::Result<Vec<RangeInventory>, Box<dyn Error>> {
    let ranges = source::read_ranges_file(&config.ranges_file)?;
    let visible = visible_ranges(&ranges, config.show_hidden);
    log::info!(
        "# Got range count = {} ({} hidden)",
        ranges.len(),
        ranges.len() - visible.len()
    );

    let inventories = build_inventories(&visible, config.max_addresses);
    log::info!(
        "# Built {} of {} inventories",
        inventories.len(),
        visible.len()
    );
    Ok(inventories)
}
