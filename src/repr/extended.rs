// ============================================================================
// Extended-Range Encoding
// Sentinel placement for +/-infinity and NaN inside a machine integer
// ============================================================================
//
// Signed layout (both specials enabled):
//
//   MIN      MIN+1    MIN+2 .......... MAX-1    MAX
//   -inf     nan      min    values    max      +inf
//
// Unsigned layout (both specials enabled):
//
//   0 ........... MAX-3    MAX-2    MAX-1    MAX
//   min  values   max      nan      -inf     +inf
//
// Everything is an associated constant: evaluated once per (policy, type)
// pair at compile time.

use super::native::NativeInt;
use crate::policy::Policy;
use std::marker::PhantomData;

/// Sentinels and safe bounds of `T` under policy `P`.
///
/// When a special is disabled its sentinel constant is meaningless and the
/// slot belongs to the safe range instead.
pub struct ExtendedRange<P, T>(PhantomData<(P, T)>);

impl<P: Policy, T: NativeInt> ExtendedRange<P, T> {
    pub const PLUS_INFINITY: T = T::MAX;

    pub const MINUS_INFINITY: T = if T::SIGNED { T::MIN } else { T::MAX_MINUS_ONE };

    pub const NOT_A_NUMBER: T = if T::SIGNED {
        if P::HAS_INFINITY {
            T::MIN_PLUS_ONE
        } else {
            T::MIN
        }
    } else if P::HAS_INFINITY {
        T::MAX_MINUS_TWO
    } else {
        T::MAX
    };

    /// Smallest finite value.
    pub const MIN: T = if T::SIGNED {
        match (P::HAS_INFINITY, P::HAS_NAN) {
            (true, true) => T::MIN_PLUS_TWO,
            (true, false) | (false, true) => T::MIN_PLUS_ONE,
            (false, false) => T::MIN,
        }
    } else {
        T::ZERO
    };

    /// Largest finite value.
    pub const MAX: T = if T::SIGNED {
        if P::HAS_INFINITY {
            T::MAX_MINUS_ONE
        } else {
            T::MAX
        }
    } else {
        match (P::HAS_INFINITY, P::HAS_NAN) {
            (true, true) => T::MAX_MINUS_THREE,
            (true, false) => T::MAX_MINUS_TWO,
            (false, true) => T::MAX_MINUS_ONE,
            (false, false) => T::MAX,
        }
    };

    #[inline]
    pub fn is_nan(x: T) -> bool {
        P::HAS_NAN && x == Self::NOT_A_NUMBER
    }

    #[inline]
    pub fn is_minus_infinity(x: T) -> bool {
        P::HAS_INFINITY && x == Self::MINUS_INFINITY
    }

    #[inline]
    pub fn is_plus_infinity(x: T) -> bool {
        P::HAS_INFINITY && x == Self::PLUS_INFINITY
    }

    /// True when `x` holds no sentinel and lies in `[MIN, MAX]`.
    #[inline]
    pub fn is_finite(x: T) -> bool {
        x >= Self::MIN && x <= Self::MAX
    }
}
