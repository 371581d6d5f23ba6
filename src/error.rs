//! Errors raised by address-space derivation and ordering.

use thiserror::Error;

/// Validation failures of the address core.
///
/// None of these are retryable: they all stem from the caller's input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Malformed dotted-quad or an octet outside 0..=255.
    #[error("invalid IPv4 address: '{0}'")]
    InvalidAddress(String),

    /// Prefix length that is not an integer in 0..=32.
    #[error("invalid prefix length: '{0}' (expected 0..=32)")]
    InvalidPrefixLength(String),

    /// Block holds more usable hosts than the caller allows in memory.
    #[error("address space too large: {requested} hosts requested, limit is {limit}")]
    AddressSpaceTooLarge { requested: u64, limit: u64 },

    /// Bulk update called without any target address.
    #[error("no target addresses given")]
    NoTargets,
}

pub type Result<T> = std::result::Result<T, AddressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AddressError::InvalidAddress("300.1.1.0".to_string()).to_string(),
            "invalid IPv4 address: '300.1.1.0'"
        );
        assert_eq!(
            AddressError::InvalidPrefixLength("33".to_string()).to_string(),
            "invalid prefix length: '33' (expected 0..=32)"
        );
        assert_eq!(
            AddressError::AddressSpaceTooLarge {
                requested: 4294967294,
                limit: 16777214
            }
            .to_string(),
            "address space too large: 4294967294 hosts requested, limit is 16777214"
        );
    }

    #[test]
    fn test_boxes_into_dyn_error() {
        fn outer() -> std::result::Result<(), Box<dyn std::error::Error>> {
            let inner: Result<()> = Err(AddressError::NoTargets);
            inner?;
            Ok(())
        }
        assert_eq!(outer().unwrap_err().to_string(), "no target addresses given");
    }
}
