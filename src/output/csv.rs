//! CSV output formatting for address listings.

use super::terminal::format_field;
use crate::models::AddressRecord;
use crate::processing::RangeInventory;

/// Header line matching [`format_address_row`].
pub const CSV_HEADER: &str = r#"    "range",             "ip",   "status",         "hostname",       "mac_address",      "assigned_to",                "last_seen",   "description""#;

/// Format a single address as a CSV row.
pub fn format_address_row(range_name: &str, record: &AddressRecord) -> String {
    format!(
        r#"{range},{ip},{status},{hostname},{mac},{assigned_to},{last_seen},{description}"#,
        range = format_field(range_name, 10),
        ip = format_field(&record.ip, 17),
        status = format_field(record.status, 11),
        hostname = format_field(record.hostname.as_deref().unwrap_or("None"), 19),
        mac = format_field(record.mac_address.as_deref().unwrap_or("None"), 19),
        assigned_to = format_field(record.assigned_to.as_deref().unwrap_or("None"), 18),
        last_seen = format_field(
            record
                .last_seen
                .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
                .unwrap_or_else(|| "None".to_string()),
            25
        ),
        description = format_field(record.description.as_deref().unwrap_or("None"), 16),
    )
}

/// Print every address of the given ranges as CSV to stdout.
pub fn print_inventory_csv(inventories: &[RangeInventory]) {
    log::info!("#Start print_inventory_csv() ranges={}", inventories.len());

    println!("{CSV_HEADER}");
    for inventory in inventories {
        log::debug!(
            "printing {} addresses for '{}'",
            inventory.addresses.len(),
            inventory.range.name
        );
        for record in &inventory.addresses {
            println!("{}", format_address_row(&inventory.range.name, record));
        }
    }
}
