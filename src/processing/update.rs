//! Per-address and bulk metadata updates.

use crate::error::{AddressError, Result};
use crate::models::{ip_to_u32, AddressRecord, AddressStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Partial update of an address record.
///
/// `None` leaves a field untouched. For the nullable text fields
/// `Some(None)` clears the value, which is what an explicit JSON `null`
/// deserializes to.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdate {
    #[serde(default)]
    pub status: Option<AddressStatus>,
    #[serde(default, deserialize_with = "present")]
    pub hostname: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub mac_address: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub assigned_to: Option<Option<String>>,
}

// A key that is present (even as null) maps to Some.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl AddressUpdate {
    pub fn is_empty(&self) -> bool {
        *self == AddressUpdate::default()
    }
}

/// Apply `update` to one record. Marking it used stamps `last_seen`.
pub fn apply_update(record: &mut AddressRecord, update: &AddressUpdate, now: DateTime<Utc>) {
    if let Some(status) = update.status {
        record.status = status;
        if status == AddressStatus::Used {
            record.last_seen = Some(now);
        }
    }
    if let Some(hostname) = &update.hostname {
        record.hostname = hostname.clone();
    }
    if let Some(description) = &update.description {
        record.description = description.clone();
    }
    if let Some(mac_address) = &update.mac_address {
        record.mac_address = mac_address.clone();
    }
    if let Some(assigned_to) = &update.assigned_to {
        record.assigned_to = assigned_to.clone();
    }
}

/// Apply `update` to every record whose address equals one of `ips`.
///
/// Targets are compared numerically and all validated up front, so a
/// malformed target leaves every record untouched. Returns how many
/// records changed.
pub fn bulk_update(
    records: &mut [AddressRecord],
    ips: &[&str],
    update: &AddressUpdate,
    now: DateTime<Utc>,
) -> Result<usize> {
    if ips.is_empty() {
        return Err(AddressError::NoTargets);
    }
    let targets: HashSet<u32> = ips
        .iter()
        .map(|ip| ip_to_u32(ip))
        .collect::<Result<_>>()?;

    let mut updated = 0;
    for record in records.iter_mut() {
        // Records carrying a malformed address can never match a target.
        let Ok(bits) = ip_to_u32(&record.ip) else {
            log::warn!("skipping record with malformed address '{}'", record.ip);
            continue;
        };
        if targets.contains(&bits) {
            apply_update(record, update, now);
            updated += 1;
        }
    }

    log::info!(
        "bulk update: {updated} of {} targeted addresses updated",
        targets.len()
    );
    Ok(updated)
}
