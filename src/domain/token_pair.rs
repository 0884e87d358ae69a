//! The pool's two assets, in X/Y order.

use core::fmt;

use super::TokenAddress;
use crate::error::AmmError;

/// The two distinct assets a pool trades, kept in the caller's X/Y order.
///
/// Unlike a canonically sorted pair, X and Y keep the positions the pool
/// was created with because swap direction and reserve fields refer to
/// them.  Identity comparisons that must ignore order go through
/// [`canonical`](Self::canonical).
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::{TokenAddress, TokenPair};
///
/// let x = TokenAddress::from_bytes([2u8; 32]);
/// let y = TokenAddress::from_bytes([1u8; 32]);
/// let pair = TokenPair::new(x, y).expect("distinct assets");
/// assert_eq!(pair.x(), x);
/// assert_eq!(pair.canonical(), (y, x));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTokenPair"))]
pub struct TokenPair {
    x: TokenAddress,
    y: TokenAddress,
}

/// Unchecked wire form; deserialization goes through [`TokenPair::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTokenPair {
    x: TokenAddress,
    y: TokenAddress,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTokenPair> for TokenPair {
    type Error = AmmError;

    fn try_from(raw: RawTokenPair) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y)
    }
}

impl TokenPair {
    /// Creates a new pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both sides share one address.
    pub fn new(x: TokenAddress, y: TokenAddress) -> Result<Self, AmmError> {
        if x == y {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        Ok(Self { x, y })
    }

    /// Returns the X asset.
    #[must_use]
    pub const fn x(&self) -> TokenAddress {
        self.x
    }

    /// Returns the Y asset.
    #[must_use]
    pub const fn y(&self) -> TokenAddress {
        self.y
    }

    /// Both addresses sorted ascending, so `(A, B)` and `(B, A)` compare equal.
    #[must_use]
    pub fn canonical(&self) -> (TokenAddress, TokenAddress) {
        if self.x < self.y {
            (self.x, self.y)
        } else {
            (self.y, self.x)
        }
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.x, self.y)
    }
}
