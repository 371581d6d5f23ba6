//! Canonical numeric ordering of address collections.

use crate::error::Result;
use crate::models::{ip_to_u32, parse_dotted_quad, HasIp};
use itertools::Itertools;

/// Numeric sort key of a dotted-quad.
pub fn ip_sort_key(ip: &str) -> Result<u32> {
    ip_to_u32(ip)
}

/// Order `addresses` ascending by numeric IPv4 value.
///
/// The sort is stable: duplicate addresses keep their input order. Every
/// address is validated before anything is reordered.
///
/// # Examples
/// ```
/// use ip_range_inventory::processing::order;
/// let sorted = order(vec!["10.0.0.100", "10.0.0.99"]).unwrap();
/// assert_eq!(sorted, vec!["10.0.0.99", "10.0.0.100"]);
/// ```
pub fn order<T: HasIp>(addresses: Vec<T>) -> Result<Vec<T>> {
    sort_by_validated_key(addresses, ip_sort_key)
}

/// Order by the last octet only.
///
/// Only meaningful when all addresses share their first three octets; it is
/// never a substitute for [`order`].
pub fn order_by_last_octet<T: HasIp>(addresses: Vec<T>) -> Result<Vec<T>> {
    sort_by_validated_key(addresses, |ip: &str| -> Result<u8> {
        Ok(parse_dotted_quad(ip)?.octets()[3])
    })
}

fn sort_by_validated_key<T, K, F>(addresses: Vec<T>, key: F) -> Result<Vec<T>>
where
    T: HasIp,
    K: Ord + Copy,
    F: Fn(&str) -> Result<K>,
{
    let keyed: Vec<(K, T)> = addresses
        .into_iter()
        .map(|a| -> Result<(K, T)> { Ok((key(a.ip())?, a)) })
        .collect::<Result<_>>()?;

    log::trace!("ordering {} addresses", keyed.len());

    Ok(keyed
        .into_iter()
        .sorted_by_key(|(k, _)| *k)
        .map(|(_, a)| a)
        .collect())
}
