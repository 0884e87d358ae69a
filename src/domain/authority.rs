//! Identity allowed to toggle a pool's lock.

/// Opaque 32-byte identity of a pool's lock authority.
///
/// The engine does not authenticate anyone: the caller proves who is
/// acting and passes that identity in, and the pool only compares it
/// against the stored authority.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::Authority;
///
/// let admin = Authority::from_bytes([7u8; 32]);
/// assert_eq!(admin, Authority::from_bytes([7u8; 32]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Authority([u8; 32]);

impl Authority {
    /// Creates an `Authority` from raw bytes.
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
