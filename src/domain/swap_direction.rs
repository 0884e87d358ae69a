//! Which reserve a swap sells into.

use core::fmt;

/// Direction of a swap.
///
/// # Examples
///
/// ```
/// use cpmm_engine::domain::SwapDirection;
///
/// assert_eq!(SwapDirection::from_x_to_y(false), SwapDirection::YToX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell X, receive Y.
    XToY,
    /// Sell Y, receive X.
    YToX,
}

impl SwapDirection {
    /// Maps the boolean `direction_x_to_y` flag used by transaction layers.
    #[must_use]
    pub const fn from_x_to_y(x_to_y: bool) -> Self {
        if x_to_y {
            Self::XToY
        } else {
            Self::YToX
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XToY => write!(f, "X->Y"),
            Self::YToX => write!(f, "Y->X"),
        }
    }
}
