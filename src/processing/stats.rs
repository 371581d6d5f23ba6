//! Usage statistics per range and across the dashboard.

use super::RangeInventory;
use crate::models::{AddressRecord, AddressStatus};
use serde::Serialize;

/// Address counts of one range by status.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RangeStats {
    pub total_ips: u64,
    pub used_ips: u64,
    pub available_ips: u64,
    pub reserved_ips: u64,
    pub offline_ips: u64,
}

/// Utilisation band of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utilization {
    Low,
    Moderate,
    High,
    Critical,
}

impl RangeStats {
    pub fn from_records(records: &[AddressRecord]) -> RangeStats {
        records.iter().fold(
            RangeStats {
                total_ips: records.len() as u64,
                ..Default::default()
            },
            |mut stats, record| {
                match record.status {
                    AddressStatus::Available => stats.available_ips += 1,
                    AddressStatus::Used => stats.used_ips += 1,
                    AddressStatus::Reserved => stats.reserved_ips += 1,
                    AddressStatus::Offline => stats.offline_ips += 1,
                }
                stats
            },
        )
    }

    /// Used share of the range in whole percent, rounded; 0 for empty ranges.
    pub fn utilization_percent(&self) -> u32 {
        if self.total_ips == 0 {
            return 0;
        }
        (self.used_ips as f64 / self.total_ips as f64 * 100.0).round() as u32
    }

    pub fn utilization(&self) -> Utilization {
        match self.utilization_percent() {
            p if p >= 90 => Utilization::Critical,
            p if p >= 75 => Utilization::High,
            p if p >= 50 => Utilization::Moderate,
            _ => Utilization::Low,
        }
    }
}

/// How reserved addresses count in the dashboard totals.
///
/// By default reserved addresses count as used and not as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    pub include_reserved_in_used: bool,
    pub include_reserved_in_available: bool,
}

impl Default for StatsOptions {
    fn default() -> Self {
        StatsOptions {
            include_reserved_in_used: true,
            include_reserved_in_available: false,
        }
    }
}

/// Totals over every range that is included in statistics.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub ranges_counted: usize,
    pub total_ips: u64,
    pub used_ips: u64,
    pub available_ips: u64,
}

impl DashboardStats {
    pub fn from_inventories(inventories: &[RangeInventory], options: StatsOptions) -> Self {
        inventories
            .iter()
            .filter(|inv| inv.range.include_in_stats)
            .fold(DashboardStats::default(), |mut totals, inv| {
                let stats = &inv.stats;
                totals.ranges_counted += 1;
                totals.total_ips += stats.total_ips;
                totals.used_ips += stats.used_ips;
                totals.available_ips += stats.available_ips;
                if options.include_reserved_in_used {
                    totals.used_ips += stats.reserved_ips;
                }
                if options.include_reserved_in_available {
                    totals.available_ips += stats.reserved_ips;
                }
                totals
            })
    }

    /// Used share over all counted ranges in whole percent; 0 when empty.
    pub fn utilization_percent(&self) -> u32 {
        if self.total_ips == 0 {
            return 0;
        }
        (self.used_ips as f64 / self.total_ips as f64 * 100.0).round() as u32
    }
}
