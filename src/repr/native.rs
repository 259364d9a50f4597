// ============================================================================
// Native Representations
// Width, signedness and bit-level helpers for machine integers and floats
// ============================================================================

use num_traits::{Float, PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use std::fmt;
use std::hash::Hash;

/// A fixed-width two's-complement machine integer.
///
/// The associated constants are what the extended-range encoding is computed
/// from: it needs the true bounds and their immediate neighbours at compile
/// time, where generic arithmetic is not available.
pub trait NativeInt:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const BITS: u32;
    const SIGNED: bool;

    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    const MIN_PLUS_ONE: Self;
    const MIN_PLUS_TWO: Self;
    const MAX_MINUS_ONE: Self;
    const MAX_MINUS_TWO: Self;
    const MAX_MINUS_THREE: Self;

    /// Compute add/sub/fused-multiply-add in `i128` and range-check afterwards,
    /// instead of branching on operand signs. Performance only.
    const PREFER_WIDE: bool;

    /// Exact widening; every supported width fits.
    fn to_wide(self) -> i128;

    /// Truncating narrowing (`as` semantics).
    fn from_wide_wrapping(v: i128) -> Self;
}

macro_rules! native_int {
    (signed: $($t:ty),*) => {$(
        impl NativeInt for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = true;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            const MIN_PLUS_ONE: Self = <$t>::MIN + 1;
            const MIN_PLUS_TWO: Self = <$t>::MIN + 2;
            const MAX_MINUS_ONE: Self = <$t>::MAX - 1;
            const MAX_MINUS_TWO: Self = <$t>::MAX - 2;
            const MAX_MINUS_THREE: Self = <$t>::MAX - 3;

            const PREFER_WIDE: bool = <$t>::BITS <= 32;

            #[inline]
            fn to_wide(self) -> i128 {
                self as i128
            }

            #[inline]
            fn from_wide_wrapping(v: i128) -> Self {
                v as $t
            }
        }

        const _: () = {
            assert!(
                <$t>::MIN == -<$t>::MAX - 1,
                concat!(stringify!($t), ": sentinel placement requires two's complement")
            );
            assert!(<$t>::BITS <= 64, concat!(stringify!($t), ": wider than 64 bits"));
        };
    )*};

    (unsigned: $($t:ty),*) => {$(
        impl NativeInt for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = false;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = 0;
            const MAX: Self = <$t>::MAX;

            const MIN_PLUS_ONE: Self = 1;
            const MIN_PLUS_TWO: Self = 2;
            const MAX_MINUS_ONE: Self = <$t>::MAX - 1;
            const MAX_MINUS_TWO: Self = <$t>::MAX - 2;
            const MAX_MINUS_THREE: Self = <$t>::MAX - 3;

            const PREFER_WIDE: bool = <$t>::BITS <= 32;

            #[inline]
            fn to_wide(self) -> i128 {
                self as i128
            }

            #[inline]
            fn from_wide_wrapping(v: i128) -> Self {
                v as $t
            }
        }

        const _: () = {
            assert!(
                <$t>::MIN == 0 && <$t>::MAX.count_ones() == <$t>::BITS,
                concat!(stringify!($t), ": unexpected unsigned encoding")
            );
            assert!(<$t>::BITS <= 64, concat!(stringify!($t), ": wider than 64 bits"));
        };
    )*};
}

native_int!(signed: i8, i16, i32, i64, isize);
native_int!(unsigned: u8, u16, u32, u64, usize);

/// An IEEE-754 binary floating-point type.
pub trait NativeFloat: Float + Default + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Significand precision in bits, hidden bit included.
    const MANTISSA_DIGITS: u32;
    /// One more than the largest binary exponent of a finite value.
    const MAX_EXP: i32;
    /// `2^-SUBNORMAL_SHIFT` is the smallest positive subnormal.
    const SUBNORMAL_SHIFT: u32;

    fn to_f64_exact(self) -> f64;
    fn from_f64_nearest(v: f64) -> Self;
    fn from_i128_nearest(v: i128) -> Self;
    fn next_up(self) -> Self;
    fn next_down(self) -> Self;
    fn round_ties_even(self) -> Self;

    /// `2^exp` for an exponent in the normal range.
    fn pow2(exp: i32) -> Self;
}

impl NativeFloat for f64 {
    const MANTISSA_DIGITS: u32 = f64::MANTISSA_DIGITS;
    const MAX_EXP: i32 = f64::MAX_EXP;
    const SUBNORMAL_SHIFT: u32 = 1074;

    #[inline]
    fn to_f64_exact(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64_nearest(v: f64) -> Self {
        v
    }

    #[inline]
    fn from_i128_nearest(v: i128) -> Self {
        v as f64
    }

    #[inline]
    fn next_up(self) -> Self {
        f64::next_up(self)
    }

    #[inline]
    fn next_down(self) -> Self {
        f64::next_down(self)
    }

    #[inline]
    fn round_ties_even(self) -> Self {
        f64::round_ties_even(self)
    }

    #[inline]
    fn pow2(exp: i32) -> Self {
        debug_assert!((-1022..=1023).contains(&exp));
        f64::from_bits(((exp + 1023) as u64) << 52)
    }
}

impl NativeFloat for f32 {
    const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;
    const MAX_EXP: i32 = f32::MAX_EXP;
    const SUBNORMAL_SHIFT: u32 = 149;

    #[inline]
    fn to_f64_exact(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64_nearest(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn from_i128_nearest(v: i128) -> Self {
        v as f32
    }

    #[inline]
    fn next_up(self) -> Self {
        f32::next_up(self)
    }

    #[inline]
    fn next_down(self) -> Self {
        f32::next_down(self)
    }

    #[inline]
    fn round_ties_even(self) -> Self {
        f32::round_ties_even(self)
    }

    #[inline]
    fn pow2(exp: i32) -> Self {
        debug_assert!((-126..=127).contains(&exp));
        f32::from_bits(((exp + 127) as u32) << 23)
    }
}
