//! JSON export of range inventories.

use crate::processing::{DashboardStats, RangeInventory};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Report<'a> {
    ranges: &'a [RangeInventory],
    totals: &'a DashboardStats,
}

/// Pretty JSON of a range with its addresses and counts.
pub fn inventory_to_json(inventory: &RangeInventory) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(inventory)
        .map_err(|e| format!("Error serializing range '{}': {e}", inventory.range.name).into())
}

/// Pretty JSON of every inventory plus the dashboard totals.
pub fn report_to_json(
    inventories: &[RangeInventory],
    totals: &DashboardStats,
) -> Result<String, Box<dyn Error>> {
    let report = Report {
        ranges: inventories,
        totals,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Error serializing report: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IpRange;
    use crate::processing::{build_inventory, StatsOptions};

    #[test]
    fn test_inventory_to_json() {
        let inventory = build_inventory(&IpRange::new("Lab", "10.0.1.0", "30"), 16).unwrap();
        let json = inventory_to_json(&inventory).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["addresses"].as_array().map(|a| a.len()), Some(2));
        assert_eq!(value["addresses"][0]["status"], "available");
        assert!(value["addresses"][0]["lastSeen"].is_null());
        assert_eq!(value["usedIps"], 0);
    }

    #[test]
    fn test_report_to_json() {
        let inventories = vec![
            build_inventory(&IpRange::new("Lab", "10.0.1.0", "30"), 16).unwrap(),
            build_inventory(&IpRange::new("Office", "192.168.1.0", "29"), 16).unwrap(),
        ];
        let totals = DashboardStats::from_inventories(&inventories, StatsOptions::default());
        let json = report_to_json(&inventories, &totals).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ranges"].as_array().map(|r| r.len()), Some(2));
        assert_eq!(value["ranges"][1]["name"], "Office");
        assert_eq!(value["ranges"][1]["addresses"][5]["ip"], "192.168.1.6");
        assert_eq!(value["totals"]["rangesCounted"], 2);
        assert_eq!(value["totals"]["totalIps"], 8);
    }
}
