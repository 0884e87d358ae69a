//! Chain-agnostic asset address.

use core::fmt;

/// Opaque 32-byte identifier of one of the pool's two assets.
///
/// The engine never interprets the bytes; it only compares them so that a
/// pool can refuse a pair made of the same asset twice.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::TokenAddress;
///
/// let addr = TokenAddress::from_bytes([1u8; 32]);
/// assert_eq!(addr.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for TokenAddress {
    /// Short hex form: the first four bytes, enough to tell assets apart in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; 32];
        assert_eq!(TokenAddress::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let lo = TokenAddress::from_bytes([0u8; 32]);
        let hi = TokenAddress::from_bytes([1u8; 32]);
        assert!(lo < hi);
    }

    #[test]
    fn display_is_short_hex() {
        let addr = TokenAddress::from_bytes([0xab; 32]);
        assert_eq!(addr.to_string(), "abababab…");
    }
}
