//! IPv4 dotted-quad and prefix-length utilities.
//!
//! Strict parsing of dotted-quad text, conversion to and from the 32-bit
//! integer form, and mask arithmetic over the full 0..=32 prefix range.

use crate::error::{AddressError, Result};
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex")
    })
}

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^[0-9]{1,2}$").expect("Invalid Regex"))
}

/// Parse a dotted-quad string into an [`Ipv4Addr`].
///
/// Exactly four components, each one to three decimal digits with a value
/// of 0..=255. Leading zeros are accepted (`010` is octet 10), surrounding
/// whitespace is not.
///
/// # Examples
/// ```
/// use ip_range_inventory::models::parse_dotted_quad;
/// assert_eq!(
///     parse_dotted_quad("192.168.1.9").unwrap(),
///     std::net::Ipv4Addr::new(192, 168, 1, 9)
/// );
/// assert!(parse_dotted_quad("300.1.1.0").is_err());
/// ```
pub fn parse_dotted_quad(ip: &str) -> Result<Ipv4Addr> {
    let caps = get_dotted_quad_regex()
        .captures(ip)
        .ok_or_else(|| AddressError::InvalidAddress(ip.to_string()))?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // At most three ASCII digits, so u16 never overflows here.
        let value: u16 = caps[i + 1]
            .parse()
            .map_err(|_| AddressError::InvalidAddress(ip.to_string()))?;
        *octet = u8::try_from(value).map_err(|_| AddressError::InvalidAddress(ip.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Returns `true` when `ip` is a well-formed dotted-quad.
pub fn is_valid_ipv4(ip: &str) -> bool {
    parse_dotted_quad(ip).is_ok()
}

/// Convert a dotted-quad to its unsigned 32-bit value.
///
/// Octets are folded left to right as `acc * 256 + octet`.
pub fn ip_to_u32(ip: &str) -> Result<u32> {
    let addr = parse_dotted_quad(ip)?;
    Ok(addr
        .octets()
        .iter()
        .fold(0u32, |acc, octet| acc * 256 + u32::from(*octet)))
}

/// Convert an unsigned 32-bit value back to dotted-quad text.
pub fn u32_to_ip(bits: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (bits >> 24) & 0xFF,
        (bits >> 16) & 0xFF,
        (bits >> 8) & 0xFF,
        bits & 0xFF
    )
}

/// Validate a numeric prefix length.
pub fn check_prefix_length(len: u32) -> Result<u8> {
    if len > u32::from(MAX_LENGTH) {
        return Err(AddressError::InvalidPrefixLength(len.to_string()));
    }
    Ok(len as u8)
}

/// Parse a prefix length stored as text (e.g. `"24"`).
pub fn parse_prefix_length(cidr: &str) -> Result<u8> {
    if !get_prefix_regex().is_match(cidr) {
        return Err(AddressError::InvalidPrefixLength(cidr.to_string()));
    }
    let len: u32 = cidr
        .parse()
        .map_err(|_| AddressError::InvalidPrefixLength(cidr.to_string()))?;
    check_prefix_length(len)
}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_range_inventory::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        return Err(AddressError::InvalidPrefixLength(len.to_string()));
    }
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    Ok(mask as u32)
}

/// Subnet mask in dotted form, e.g. `255.255.255.0` for /24.
pub fn subnet_mask(len: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Network address for a given IP and prefix length (host bits cleared).
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Broadcast address for a given IP and prefix length (host bits set).
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_quad() {
        assert_eq!(
            parse_dotted_quad("10.0.1.0").unwrap(),
            Ipv4Addr::new(10, 0, 1, 0)
        );
        assert_eq!(
            parse_dotted_quad("255.255.255.255").unwrap(),
            Ipv4Addr::BROADCAST
        );
        assert_eq!(
            parse_dotted_quad("010.001.000.009").unwrap(),
            Ipv4Addr::new(10, 1, 0, 9)
        );
    }

    #[test]
    fn test_parse_dotted_quad_rejects() {
        for bad in [
            "300.1.1.0",
            "1.2.3.256",
            "1.2.3",
            "1.2.3.4.5",
            "1..3.4",
            "",
            " 1.2.3.4",
            "1.2.3.4 ",
            "-1.2.3.4",
            "+1.2.3.4",
            "1.2.3.4/24",
            "a.b.c.d",
            "1000.1.1.1",
            "١.٢.٣.٤",
        ] {
            assert_eq!(
                parse_dotted_quad(bad),
                Err(AddressError::InvalidAddress(bad.to_string())),
                "{bad} should be rejected"
            );
            assert!(!is_valid_ipv4(bad));
        }
    }

    #[test]
    fn test_ip_to_u32() {
        assert_eq!(ip_to_u32("0.0.0.0").unwrap(), 0);
        assert_eq!(ip_to_u32("0.0.0.1").unwrap(), 1);
        assert_eq!(ip_to_u32("0.0.1.0").unwrap(), 256);
        assert_eq!(ip_to_u32("192.168.1.10").unwrap(), 0xC0A8010A);
        assert_eq!(ip_to_u32("255.255.255.255").unwrap(), u32::MAX);
        assert!(ip_to_u32("10.0.0.999").is_err());
    }

    #[test]
    fn test_ip_to_u32_matches_std() {
        for ip in ["10.0.0.99", "10.0.0.100", "172.16.254.3", "128.0.0.0"] {
            let std_bits = u32::from(ip.parse::<Ipv4Addr>().unwrap());
            assert_eq!(ip_to_u32(ip).unwrap(), std_bits);
        }
    }

    #[test]
    fn test_round_trip_every_octet_position() {
        for position in 0..4 {
            for value in 0..=255u32 {
                let bits = value << (8 * position);
                let ip = u32_to_ip(bits);
                assert_eq!(ip_to_u32(&ip).unwrap(), bits, "{ip}");
            }
        }
    }

    #[test]
    fn test_round_trip_sampled_space() {
        // Sample the 32-bit space with an odd stride.
        let mut bits: u32 = 0;
        loop {
            let ip = u32_to_ip(bits);
            assert_eq!(ip_to_u32(&ip).unwrap(), bits, "{ip}");
            match bits.checked_add(16_777_259) {
                Some(next) => bits = next,
                None => break,
            }
        }
        assert_eq!(u32_to_ip(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_parse_prefix_length() {
        assert_eq!(parse_prefix_length("0").unwrap(), 0);
        assert_eq!(parse_prefix_length("24").unwrap(), 24);
        assert_eq!(parse_prefix_length("32").unwrap(), 32);
        assert_eq!(parse_prefix_length("08").unwrap(), 8);
        for bad in ["33", "-1", "", "24.5", "abc", " 24", "100"] {
            assert_eq!(
                parse_prefix_length(bad),
                Err(AddressError::InvalidPrefixLength(bad.to_string()))
            );
        }
        assert!(check_prefix_length(33).is_err());
        assert_eq!(check_prefix_length(30).unwrap(), 30);
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(24).unwrap().to_string(), "255.255.255.0");
        assert_eq!(subnet_mask(30).unwrap().to_string(), "255.255.255.252");
        assert_eq!(subnet_mask(0).unwrap().to_string(), "0.0.0.0");
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), ip);
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(broadcast_addr(ip, 0).unwrap(), Ipv4Addr::BROADCAST);
        assert_eq!(broadcast_addr(ip, 32).unwrap(), ip);
    }
}
