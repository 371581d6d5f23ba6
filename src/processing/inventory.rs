//! A range together with its ordered address records.

use super::{bulk_update, materialize, order, AddressUpdate, RangeStats};
use crate::error::Result;
use crate::models::{AddressRecord, IpRange, NetworkBlock};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Range plus its canonically ordered addresses and their counts.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RangeInventory {
    #[serde(flatten)]
    pub range: IpRange,
    pub block: NetworkBlock,
    pub addresses: Vec<AddressRecord>,
    #[serde(flatten)]
    pub stats: RangeStats,
}

impl RangeInventory {
    /// Apply a bulk update and refresh the counts.
    pub fn update_addresses(
        &mut self,
        ips: &[&str],
        update: &AddressUpdate,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        let updated = bulk_update(&mut self.addresses, ips, update, now)?;
        self.stats = RangeStats::from_records(&self.addresses);
        Ok(updated)
    }
}

/// Validate `range`, seed its addresses and compute its counts.
///
/// Fails without producing anything when the range is invalid or holds more
/// than `limit` usable hosts.
pub fn build_inventory(range: &IpRange, limit: u64) -> Result<RangeInventory> {
    let block = range.block()?;
    log::debug!("building inventory for '{}' ({block})", range.name);

    let addresses = order(materialize(&block, limit)?)?;
    let stats = RangeStats::from_records(&addresses);

    Ok(RangeInventory {
        range: range.clone(),
        block,
        addresses,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;
    use crate::models::AddressStatus;
    use chrono::TimeZone;

    #[test]
    fn test_build_inventory() {
        let range = IpRange::new("Main Office Network", "192.168.1.0", "24");
        let inventory = build_inventory(&range, 1024).expect("Failed to build inventory");
        assert_eq!(inventory.addresses.len(), 254);
        assert_eq!(inventory.stats.total_ips, 254);
        assert_eq!(inventory.stats.available_ips, 254);
        assert_eq!(inventory.block.to_string(), "192.168.1.0/24");
        assert_eq!(inventory.addresses[0].ip, "192.168.1.1");
    }

    #[test]
    fn test_build_inventory_errors() {
        assert_eq!(
            build_inventory(&IpRange::new("Bad", "300.1.1.0", "24"), 1024).unwrap_err(),
            AddressError::InvalidAddress("300.1.1.0".to_string())
        );
        assert!(matches!(
            build_inventory(&IpRange::new("Huge", "10.0.0.0", "8"), 1024),
            Err(AddressError::AddressSpaceTooLarge { .. })
        ));
    }

    #[test]
    fn test_update_addresses_refreshes_stats() {
        let mut inventory =
            build_inventory(&IpRange::new("Lab", "10.0.1.0", "29"), 1024).unwrap();
        let update = AddressUpdate {
            status: Some(AddressStatus::Used),
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let updated = inventory
            .update_addresses(&["10.0.1.1", "10.0.1.6"], &update, now)
            .unwrap();
        assert_eq!(updated, 2);
        assert_eq!(inventory.stats.used_ips, 2);
        assert_eq!(inventory.stats.available_ips, 4);
    }

    #[test]
    fn test_inventory_json_shape() {
        let inventory = build_inventory(&IpRange::new("Lab", "10.0.1.0", "30"), 16).unwrap();
        let json = serde_json::to_value(&inventory).unwrap();
        assert_eq!(json["name"], "Lab");
        assert_eq!(json["cidr"], "30");
        assert_eq!(json["block"], "10.0.1.0/30");
        assert_eq!(json["totalIps"], 2);
        assert_eq!(json["availableIps"], 2);
        assert_eq!(json["addresses"][1]["ip"], "10.0.1.2");
        assert_eq!(json["label"], "public");
    }
}
