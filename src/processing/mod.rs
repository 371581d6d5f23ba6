//! Address-space processing logic.
//!
//! This module contains the business logic operating on network blocks and
//! address records:
//! - [`enumerate`] - lazy derivation of usable host addresses
//! - [`ordering`] - canonical numeric ordering of address collections
//! - [`update`] - per-address and bulk metadata updates
//! - [`stats`] - range and dashboard statistics
//! - [`inventory`] - a range with its seeded, ordered addresses

mod enumerate;
mod inventory;
mod ordering;
mod stats;
mod update;

// Re-export public functions
pub use enumerate::{
    enumerate, enumerate_block, materialize, AddressRecords, HostAddresses,
    DEFAULT_MATERIALIZE_LIMIT,
};
pub use inventory::{build_inventory, RangeInventory};
pub use ordering::{ip_sort_key, order, order_by_last_octet};
pub use stats::{DashboardStats, RangeStats, StatsOptions, Utilization};
pub use update::{apply_update, bulk_update, AddressUpdate};
