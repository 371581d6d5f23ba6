//! Ranges definition file.
//!
//! A JSON array of range objects, as exported by the dashboard.

use crate::models::IpRange;
use std::error::Error;
use std::path::Path;

/// Read range definitions from a JSON file.
///
/// # Arguments
/// * `ranges_file` - Path to the JSON file
///
/// # Returns
/// * `Ok(Vec<IpRange>)` - The ranges in file order
/// * `Err` - If the file is missing or the JSON does not match, with the JSON path of the error
pub fn read_ranges_file(ranges_file: &str) -> Result<Vec<IpRange>, Box<dyn Error>> {
    if !Path::new(ranges_file).exists() {
        return Err(format!("Ranges file does not exist: {ranges_file}").into());
    }
    log::info!("Reading ranges from file: {ranges_file}");

    let json = std::fs::read_to_string(ranges_file)
        .map_err(|e| format!("Error reading ranges file {ranges_file}: {e}"))?;
    parse_ranges(&json)
}

/// Parse the ranges JSON document.
pub fn parse_ranges(json: &str) -> Result<Vec<IpRange>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let ranges: Vec<IpRange> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing ranges JSON: path={} error={}", e.path(), e))?;

    log::info!("Got {} range definitions", ranges.len());
    Ok(ranges)
}
