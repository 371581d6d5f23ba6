//! Administrator-defined IP range and its label.

use super::NetworkBlock;
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Longest custom label shown untruncated.
const LABEL_DISPLAY_LEN: usize = 12;

/// A named network range as defined by an operator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IpRange {
    /// Display name, e.g. "Main Office Network".
    pub name: String,
    /// Base address in dotted-quad form.
    pub network: String,
    /// Prefix length, kept as text the way ranges are stored.
    #[serde(deserialize_with = "cidr_text")]
    pub cidr: String,
    #[serde(default)]
    pub vlan: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub dns_servers: Option<Vec<String>>,
    /// Count this range in the dashboard totals.
    #[serde(default = "default_include_in_stats")]
    pub include_in_stats: bool,
    /// Leave this range out of the default listing.
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub label: RangeLabel,
}

fn default_include_in_stats() -> bool {
    true
}

/// Accept the prefix length either as `"24"` or as `24`.
fn cidr_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CidrRepr {
        Text(String),
        Number(i64),
    }

    Ok(match CidrRepr::deserialize(deserializer)? {
        CidrRepr::Text(s) => s,
        CidrRepr::Number(n) => n.to_string(),
    })
}

impl IpRange {
    /// Create a range with default flags and no optional metadata.
    pub fn new(name: &str, network: &str, cidr: &str) -> IpRange {
        IpRange {
            name: name.to_string(),
            network: network.to_string(),
            cidr: cidr.to_string(),
            vlan: None,
            description: None,
            gateway: None,
            dns_servers: None,
            include_in_stats: true,
            hidden: false,
            label: RangeLabel::Public,
        }
    }

    /// Validated network block of this range.
    pub fn block(&self) -> Result<NetworkBlock> {
        NetworkBlock::from_parts(&self.network, &self.cidr)
    }
}

/// Visibility label attached to a range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RangeLabel {
    #[default]
    Public,
    Private,
    Custom(String),
}

impl RangeLabel {
    /// Classify free-form label text; blank text means public.
    pub fn from_label(label: Option<&str>) -> RangeLabel {
        let label = match label {
            Some(l) if !l.trim().is_empty() => l,
            _ => return RangeLabel::Public,
        };
        match label.trim().to_lowercase().as_str() {
            "public" => RangeLabel::Public,
            "private" => RangeLabel::Private,
            _ => RangeLabel::Custom(label.to_string()),
        }
    }

    /// Label text as stored.
    pub fn as_str(&self) -> &str {
        match self {
            RangeLabel::Public => "public",
            RangeLabel::Private => "private",
            RangeLabel::Custom(label) => label,
        }
    }

    /// Short text for listings; long custom labels are cut to 12 chars.
    pub fn display_text(&self) -> String {
        match self {
            RangeLabel::Public => "Public".to_string(),
            RangeLabel::Private => "Private".to_string(),
            RangeLabel::Custom(label) if label.chars().count() > LABEL_DISPLAY_LEN => {
                let cut: String = label.chars().take(LABEL_DISPLAY_LEN).collect();
                format!("{cut}...")
            }
            RangeLabel::Custom(label) => label.clone(),
        }
    }
}

impl Serialize for RangeLabel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RangeLabel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<RangeLabel, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(RangeLabel::from_label(label.as_deref()))
    }
}
