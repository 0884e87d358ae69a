//! Integer square root.

use crate::error::{AmmError, Result};

/// Largest `r` with `r * r <= n`, via Newton's method.
///
/// Used to size the first LP mint as `isqrt(x * y)`.  The root of any
/// `u128` fits in `u64`, so the narrowing only fails on a logic error.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if the root does not fit `u64`.
///
/// # Examples
///
/// ```
/// use cpmm_engine::math::isqrt;
///
/// assert_eq!(isqrt(1_000_000_000_000), Ok(1_000_000));
/// assert_eq!(isqrt(15), Ok(3));
/// assert_eq!(isqrt(0), Ok(0));
/// ```
pub fn isqrt(n: u128) -> Result<u64> {
    if n < 2 {
        return Ok(n as u64);
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    u64::try_from(x).map_err(|_| AmmError::ArithmeticOverflow("isqrt result exceeds u64"))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn perfect_squares() {
        for r in [0u64, 1, 2, 3, 10, 1_000, 1_000_000, 4_294_967_295] {
            assert_eq!(isqrt(u128::from(r) * u128::from(r)), Ok(r));
        }
    }

    #[test]
    fn rounds_down_between_squares() {
        assert_eq!(isqrt(2), Ok(1));
        assert_eq!(isqrt(8), Ok(2));
        assert_eq!(isqrt(99), Ok(9));
        assert_eq!(isqrt(1_000_001), Ok(1_000));
    }

    #[test]
    fn max_input() {
        let Ok(r) = isqrt(u128::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(r, u64::MAX);
    }

    #[test]
    fn floor_property_on_samples() {
        for n in [3u128, 17, 12_345, 987_654_321, 2_000_000_000_000_000_001] {
            let Ok(r) = isqrt(n) else {
                panic!("expected Ok");
            };
            let r = u128::from(r);
            assert!(r * r <= n);
            assert!((r + 1) * (r + 1) > n);
        }
    }
}
