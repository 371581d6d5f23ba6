//! Address record data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Allocation state of a single address.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressStatus {
    #[default]
    Available,
    Used,
    Reserved,
    Offline,
}

impl AddressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressStatus::Available => "available",
            AddressStatus::Used => "used",
            AddressStatus::Reserved => "reserved",
            AddressStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for AddressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(AddressStatus::Available),
            "used" => Ok(AddressStatus::Used),
            "reserved" => Ok(AddressStatus::Reserved),
            "offline" => Ok(AddressStatus::Offline),
            other => Err(format!("unknown address status '{other}'")),
        }
    }
}

/// One tracked address inside a range.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    /// Dotted-quad address.
    pub ip: String,
    pub status: AddressStatus,
    pub hostname: Option<String>,
    pub description: Option<String>,
    pub mac_address: Option<String>,
    /// Owner the address is assigned to.
    pub assigned_to: Option<String>,
    /// Set whenever the address is marked as used.
    pub last_seen: Option<DateTime<Utc>>,
}

impl AddressRecord {
    /// Fresh record as seeded at range creation: available, no metadata.
    pub fn available(addr: Ipv4Addr) -> AddressRecord {
        AddressRecord {
            ip: addr.to_string(),
            ..Default::default()
        }
    }
}

/// Anything carrying a dotted-quad `ip` field can be ordered canonically.
pub trait HasIp {
    fn ip(&self) -> &str;
}

impl HasIp for AddressRecord {
    fn ip(&self) -> &str {
        &self.ip
    }
}

impl HasIp for String {
    fn ip(&self) -> &str {
        self
    }
}

impl HasIp for &str {
    fn ip(&self) -> &str {
        self
    }
}
