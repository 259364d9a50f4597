// ============================================================================
// Integer Primitives
// Checked arithmetic on machine integers under the extended-range encoding
// ============================================================================
//
// Exact intermediate values are computed in `i128`, which holds every
// operand, sum and (signed) product of the supported widths. The native
// sign-branching path is kept for 64-bit add/sub/mul/add_mul where the wide
// path stops being free.

use super::{div_rounded, extended_gcd, round_truncated};
use crate::io::{output::write_radix, NumericFormat};
use crate::policy::Policy;
use crate::repr::{ExtendedRange, IntFamily, NativeInt, Repr};
use crate::result::{Relation, ResultClass, ResultCode, RoundingDir};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Range Handling
// ============================================================================

/// Exact result above the safe maximum.
pub(crate) fn set_pos_overflow<P: Policy, T: NativeInt>(to: &mut T, dir: RoundingDir) -> ResultCode {
    if dir.round_down() {
        *to = ExtendedRange::<P, T>::MAX;
        ResultCode::V_GT_SUP
    } else if P::HAS_INFINITY {
        *to = ExtendedRange::<P, T>::PLUS_INFINITY;
        ResultCode::V_LT_PLUS_INFINITY
    } else {
        *to = ExtendedRange::<P, T>::MAX;
        ResultCode::V_GT_SUP.unrepresentable()
    }
}

/// Exact result below the safe minimum.
pub(crate) fn set_neg_overflow<P: Policy, T: NativeInt>(to: &mut T, dir: RoundingDir) -> ResultCode {
    if dir.round_up() {
        *to = ExtendedRange::<P, T>::MIN;
        ResultCode::V_LT_INF
    } else if P::HAS_INFINITY {
        *to = ExtendedRange::<P, T>::MINUS_INFINITY;
        ResultCode::V_GT_MINUS_INFINITY
    } else {
        *to = ExtendedRange::<P, T>::MIN;
        ResultCode::V_LT_INF.unrepresentable()
    }
}

#[inline]
fn assign_checked<P: Policy, T: NativeInt>(to: &mut T, v: T, dir: RoundingDir) -> ResultCode {
    if P::CHECK_OVERFLOW {
        if v > ExtendedRange::<P, T>::MAX {
            return set_pos_overflow::<P, T>(to, dir);
        }
        if v < ExtendedRange::<P, T>::MIN {
            return set_neg_overflow::<P, T>(to, dir);
        }
    }
    *to = v;
    ResultCode::V_EQ
}

/// Store a wide value whose relation to the exact result is `r`.
#[inline]
pub(crate) fn assign_wide_inexact<P: Policy, T: NativeInt>(
    to: &mut T,
    v: i128,
    r: ResultCode,
    dir: RoundingDir,
) -> ResultCode {
    if P::CHECK_OVERFLOW {
        if v > ExtendedRange::<P, T>::MAX.to_wide() {
            return set_pos_overflow::<P, T>(to, dir);
        }
        if v < ExtendedRange::<P, T>::MIN.to_wide() {
            return set_neg_overflow::<P, T>(to, dir);
        }
    }
    *to = T::from_wide_wrapping(v);
    r
}

#[inline]
pub(crate) fn assign_wide<P: Policy, T: NativeInt>(to: &mut T, v: i128, dir: RoundingDir) -> ResultCode {
    assign_wide_inexact::<P, T>(to, v, ResultCode::V_EQ, dir)
}

/// Single-limb fast path: the value of `q` when it fits in one 64-bit limb.
pub(crate) fn bigint_to_wide(q: &BigInt) -> Option<i128> {
    let mut digits = q.iter_u64_digits();
    if digits.len() > 1 {
        return None;
    }
    let magnitude = digits.next().unwrap_or(0) as i128;
    Some(if q.sign() == Sign::Minus { -magnitude } else { magnitude })
}

/// Store an arbitrary-precision result whose relation to the exact one is `r`.
pub(crate) fn assign_big_inexact<P: Policy, T: NativeInt>(
    to: &mut T,
    q: &BigInt,
    r: ResultCode,
    dir: RoundingDir,
) -> ResultCode {
    match bigint_to_wide(q) {
        Some(v) => assign_wide_inexact::<P, T>(to, v, r, dir),
        None if P::CHECK_OVERFLOW => {
            if q.sign() == Sign::Minus {
                set_neg_overflow::<P, T>(to, dir)
            } else {
                set_pos_overflow::<P, T>(to, dir)
            }
        }
        None => {
            // wrap modulo 2^BITS: only the lowest limb matters
            let low = q.iter_u64_digits().next().unwrap_or(0) as i128;
            let v = if q.sign() == Sign::Minus { -low } else { low };
            *to = T::from_wide_wrapping(v);
            r
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

#[inline]
pub(crate) fn is_nan<P: Policy, T: NativeInt>(x: T) -> bool {
    ExtendedRange::<P, T>::is_nan(x)
}

#[inline]
pub(crate) fn is_inf<P: Policy, T: NativeInt>(x: T) -> i32 {
    if ExtendedRange::<P, T>::is_minus_infinity(x) {
        -1
    } else if ExtendedRange::<P, T>::is_plus_infinity(x) {
        1
    } else {
        0
    }
}

#[inline]
pub(crate) fn sgn<T: NativeInt>(x: T) -> i32 {
    match x.cmp(&T::ZERO) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub(crate) fn assign_special<P: Policy, T: NativeInt>(
    to: &mut T,
    class: ResultClass,
    dir: RoundingDir,
) -> ResultCode {
    match class {
        ResultClass::Normal => ResultCode::V_EQ,
        ResultClass::NotANumber => {
            if P::HAS_NAN {
                *to = ExtendedRange::<P, T>::NOT_A_NUMBER;
            }
            ResultCode::V_NAN
        }
        ResultClass::MinusInfinity => {
            if P::HAS_INFINITY {
                *to = ExtendedRange::<P, T>::MINUS_INFINITY;
                ResultCode::V_EQ_MINUS_INFINITY
            } else {
                *to = ExtendedRange::<P, T>::MIN;
                if dir.round_up() {
                    ResultCode::V_LT_INF
                } else {
                    ResultCode::V_EQ_MINUS_INFINITY.unrepresentable()
                }
            }
        }
        ResultClass::PlusInfinity => {
            if P::HAS_INFINITY {
                *to = ExtendedRange::<P, T>::PLUS_INFINITY;
                ResultCode::V_EQ_PLUS_INFINITY
            } else {
                *to = ExtendedRange::<P, T>::MAX;
                if dir.round_down() {
                    ResultCode::V_GT_SUP
                } else {
                    ResultCode::V_EQ_PLUS_INFINITY.unrepresentable()
                }
            }
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

pub(crate) fn neg<P: Policy, T: NativeInt>(to: &mut T, x: T, dir: RoundingDir) -> ResultCode {
    if !P::CHECK_OVERFLOW {
        *to = x.wrapping_neg();
        return ResultCode::V_EQ;
    }
    assign_wide::<P, T>(to, -x.to_wide(), dir)
}

pub(crate) fn abs<P: Policy, T: NativeInt>(to: &mut T, x: T, dir: RoundingDir) -> ResultCode {
    assign_wide::<P, T>(to, x.to_wide().abs(), dir)
}

pub(crate) fn add<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if !P::CHECK_OVERFLOW {
        *to = x.wrapping_add(&y);
        return ResultCode::V_EQ;
    }
    if T::PREFER_WIDE {
        return assign_wide::<P, T>(to, x.to_wide() + y.to_wide(), dir);
    }
    match x.checked_add(&y) {
        Some(r) => assign_checked::<P, T>(to, r, dir),
        None if y > T::ZERO => set_pos_overflow::<P, T>(to, dir),
        None => set_neg_overflow::<P, T>(to, dir),
    }
}

pub(crate) fn sub<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if !P::CHECK_OVERFLOW {
        *to = x.wrapping_sub(&y);
        return ResultCode::V_EQ;
    }
    if T::PREFER_WIDE {
        return assign_wide::<P, T>(to, x.to_wide() - y.to_wide(), dir);
    }
    match x.checked_sub(&y) {
        Some(r) => assign_checked::<P, T>(to, r, dir),
        None if y < T::ZERO => set_pos_overflow::<P, T>(to, dir),
        None => set_neg_overflow::<P, T>(to, dir),
    }
}

pub(crate) fn mul<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if !P::CHECK_OVERFLOW {
        *to = x.wrapping_mul(&y);
        return ResultCode::V_EQ;
    }
    if T::PREFER_WIDE {
        return assign_wide::<P, T>(to, x.to_wide() * y.to_wide(), dir);
    }
    if x == T::ZERO || y == T::ZERO {
        *to = T::ZERO;
        return ResultCode::V_EQ;
    }
    if T::SIGNED && y.to_wide() == -1 {
        return neg::<P, T>(to, x, dir);
    }
    let max = ExtendedRange::<P, T>::MAX;
    let min = ExtendedRange::<P, T>::MIN;
    // y is neither 0 nor -1: the bound divisions cannot overflow
    let overflow = match (x > T::ZERO, y > T::ZERO) {
        (true, true) if x > max / y => 1,
        (false, false) if x < max / y => 1,
        (true, false) if x > min / y => -1,
        (false, true) if x < min / y => -1,
        _ => 0,
    };
    match overflow {
        1 => set_pos_overflow::<P, T>(to, dir),
        -1 => set_neg_overflow::<P, T>(to, dir),
        _ => {
            *to = x.wrapping_mul(&y);
            ResultCode::V_EQ
        }
    }
}

pub(crate) fn div<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if y == T::ZERO {
        return ResultCode::V_DIV_ZERO;
    }
    if T::SIGNED && y.to_wide() == -1 {
        return neg::<P, T>(to, x, dir);
    }
    let (q, r) = div_rounded(&x.to_wide(), &y.to_wide(), dir);
    assign_wide_inexact::<P, T>(to, q, r, dir)
}

pub(crate) fn idiv<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if y == T::ZERO {
        return ResultCode::V_DIV_ZERO;
    }
    assign_wide::<P, T>(to, x.to_wide() / y.to_wide(), dir)
}

pub(crate) fn rem<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if y == T::ZERO {
        return ResultCode::V_MOD_ZERO;
    }
    assign_wide::<P, T>(to, x.to_wide() % y.to_wide(), dir)
}

/// Digit-by-digit square root working on pairs of bits from the top down.
///
/// Returns `(root, remainder)` with `root^2 + remainder == n`.
pub(crate) fn isqrt_rem(n: u64) -> (u64, u64) {
    let mut rem = n;
    let mut root = 0u64;
    let mut bit = 1u64 << 62;
    while bit > n {
        bit >>= 2;
    }
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    (root, rem)
}

pub(crate) fn sqrt<P: Policy, T: NativeInt>(to: &mut T, x: T, dir: RoundingDir) -> ResultCode {
    if x < T::ZERO {
        return ResultCode::V_SQRT_NEG;
    }
    let (root, rem) = isqrt_rem(x.to_wide() as u64);
    if rem == 0 {
        return assign_wide::<P, T>(to, root as i128, dir);
    }
    let (root, r) = round_truncated(root as i128, true, dir);
    assign_wide_inexact::<P, T>(to, root, r, dir)
}

// ============================================================================
// Power-of-Two Family
// ============================================================================
//
// Exponents at or beyond the bit width are boundary cases decided from the
// sign of the operand; no native shift ever sees them.

pub(crate) fn mul_2exp<P: Policy, T: NativeInt>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    if x == T::ZERO {
        *to = T::ZERO;
        return ResultCode::V_EQ;
    }
    if exp >= T::BITS {
        if !P::CHECK_OVERFLOW {
            *to = T::ZERO;
            return ResultCode::V_EQ;
        }
        return if x > T::ZERO {
            set_pos_overflow::<P, T>(to, dir)
        } else {
            set_neg_overflow::<P, T>(to, dir)
        };
    }
    assign_wide::<P, T>(to, x.to_wide() << exp, dir)
}

pub(crate) fn div_2exp<P: Policy, T: NativeInt>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    if x == T::ZERO {
        *to = T::ZERO;
        return ResultCode::V_EQ;
    }
    if exp >= T::BITS {
        let (q, r) = round_truncated(0i128, x > T::ZERO, dir);
        return assign_wide_inexact::<P, T>(to, q, r, dir);
    }
    let (q, r) = div_rounded(&x.to_wide(), &(1i128 << exp), dir);
    assign_wide_inexact::<P, T>(to, q, r, dir)
}

pub(crate) fn add_2exp<P: Policy, T: NativeInt>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    if exp >= T::BITS {
        if !P::CHECK_OVERFLOW {
            *to = x;
            return ResultCode::V_EQ;
        }
        return set_pos_overflow::<P, T>(to, dir);
    }
    assign_wide::<P, T>(to, x.to_wide() + (1i128 << exp), dir)
}

pub(crate) fn sub_2exp<P: Policy, T: NativeInt>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    if exp >= T::BITS {
        if !P::CHECK_OVERFLOW {
            *to = x;
            return ResultCode::V_EQ;
        }
        return set_neg_overflow::<P, T>(to, dir);
    }
    assign_wide::<P, T>(to, x.to_wide() - (1i128 << exp), dir)
}

/// Exponents from here on exceed every representable magnitude.
const WIDE_EXP_LIMIT: u32 = 127;

pub(crate) fn smod_2exp<P: Policy, T: NativeInt>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    if exp == 0 {
        *to = T::ZERO;
        return ResultCode::V_EQ;
    }
    if exp >= WIDE_EXP_LIMIT {
        return assign_checked::<P, T>(to, x, dir);
    }
    let m = 1i128 << exp;
    let r = x.to_wide().rem_euclid(m);
    let r = if r >= m >> 1 { r - m } else { r };
    assign_wide::<P, T>(to, r, dir)
}

pub(crate) fn umod_2exp<P: Policy, T: NativeInt>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    if exp >= WIDE_EXP_LIMIT {
        if x < T::ZERO {
            return set_pos_overflow::<P, T>(to, dir);
        }
        return assign_checked::<P, T>(to, x, dir);
    }
    assign_wide::<P, T>(to, x.to_wide().rem_euclid(1i128 << exp), dir)
}

// ============================================================================
// Number Theory
// ============================================================================

pub(crate) fn gcd<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    assign_wide::<P, T>(to, x.to_wide().gcd(&y.to_wide()), dir)
}

pub(crate) fn lcm<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if x == T::ZERO || y == T::ZERO {
        *to = T::ZERO;
        return ResultCode::V_EQ;
    }
    let (a, b) = (x.to_wide().abs(), y.to_wide().abs());
    match (a / a.gcd(&b)).checked_mul(b) {
        Some(l) => assign_wide::<P, T>(to, l, dir),
        None => set_pos_overflow::<P, T>(to, dir),
    }
}

pub(crate) fn gcdext<P: Policy, T: NativeInt>(
    g: &mut T,
    s: &mut T,
    t: &mut T,
    x: T,
    y: T,
    dir: RoundingDir,
) -> ResultCode {
    let (wg, ws, wt) = extended_gcd(&x.to_wide(), &y.to_wide());
    let r = assign_wide::<P, T>(g, wg, dir);
    if !r.is_exact() {
        return r;
    }
    let r = assign_wide::<P, T>(s, ws, dir);
    if !r.is_exact() {
        return r;
    }
    assign_wide::<P, T>(t, wt, dir)
}

// ============================================================================
// Fused Multiply-Accumulate
// ============================================================================

/// The product overflowed `T`: the final sign is only known when the
/// accumulator does not pull the other way.
fn product_overflow<P: Policy, T: NativeInt>(to: &mut T, product_sign: i32, dir: RoundingDir) -> ResultCode {
    let acc = sgn(*to);
    if acc == 0 || acc == product_sign {
        if product_sign > 0 {
            set_pos_overflow::<P, T>(to, dir)
        } else {
            set_neg_overflow::<P, T>(to, dir)
        }
    } else if product_sign > 0 {
        ResultCode::V_UNKNOWN_POS_OVERFLOW
    } else {
        ResultCode::V_UNKNOWN_NEG_OVERFLOW
    }
}

pub(crate) fn add_mul<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if !P::CHECK_OVERFLOW {
        *to = to.wrapping_add(&x.wrapping_mul(&y));
        return ResultCode::V_EQ;
    }
    if T::PREFER_WIDE {
        let v = to.to_wide() + x.to_wide() * y.to_wide();
        return assign_wide::<P, T>(to, v, dir);
    }
    match x.checked_mul(&y) {
        Some(p) => match to.checked_add(&p) {
            Some(r) => assign_checked::<P, T>(to, r, dir),
            None if p > T::ZERO => set_pos_overflow::<P, T>(to, dir),
            None => set_neg_overflow::<P, T>(to, dir),
        },
        None => product_overflow::<P, T>(to, sgn(x) * sgn(y), dir),
    }
}

pub(crate) fn sub_mul<P: Policy, T: NativeInt>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if !P::CHECK_OVERFLOW {
        *to = to.wrapping_sub(&x.wrapping_mul(&y));
        return ResultCode::V_EQ;
    }
    if T::PREFER_WIDE {
        let v = to.to_wide() - x.to_wide() * y.to_wide();
        return assign_wide::<P, T>(to, v, dir);
    }
    match x.checked_mul(&y) {
        Some(p) => match to.checked_sub(&p) {
            Some(r) => assign_checked::<P, T>(to, r, dir),
            None if p < T::ZERO => set_pos_overflow::<P, T>(to, dir),
            None => set_neg_overflow::<P, T>(to, dir),
        },
        None => product_overflow::<P, T>(to, -sgn(x) * sgn(y), dir),
    }
}

// ============================================================================
// Exact Bridge
// ============================================================================

pub(crate) fn from_rational<P: Policy, T: NativeInt>(
    to: &mut T,
    q: &BigRational,
    dir: RoundingDir,
) -> ResultCode {
    let (quotient, r) = div_rounded(q.numer(), q.denom(), dir);
    assign_big_inexact::<P, T>(to, &quotient, r, dir)
}

pub(crate) fn to_rational<T: NativeInt>(x: T) -> BigRational {
    BigRational::from_integer(BigInt::from(x.to_wide()))
}

pub(crate) fn write_literal<T: NativeInt, W: fmt::Write>(
    x: T,
    format: &NumericFormat,
    out: &mut W,
) -> Result<Relation, fmt::Error> {
    let v = x.to_wide();
    write_radix(out, v < 0, v.unsigned_abs(), format)?;
    Ok(Relation::EQ)
}

// ============================================================================
// Repr Implementations
// ============================================================================

macro_rules! int_repr {
    ($($t:ty),*) => {$(
        impl Repr for $t {
            type Family = IntFamily;
            const NAME: &'static str = stringify!($t);
            const IS_INTEGER: bool = true;

            #[inline]
            fn is_nan<P: Policy>(x: &Self) -> bool {
                is_nan::<P, Self>(*x)
            }

            #[inline]
            fn is_inf<P: Policy>(x: &Self) -> i32 {
                is_inf::<P, Self>(*x)
            }

            #[inline]
            fn native_class(_x: &Self) -> ResultClass {
                ResultClass::Normal
            }

            #[inline]
            fn sgn(x: &Self) -> i32 {
                sgn(*x)
            }

            #[inline]
            fn is_integer(_x: &Self) -> bool {
                true
            }

            fn assign_special<P: Policy>(to: &mut Self, class: ResultClass, dir: RoundingDir) -> ResultCode {
                assign_special::<P, Self>(to, class, dir)
            }

            fn assign<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode {
                assign_checked::<P, Self>(to, *x, dir)
            }

            fn neg<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode {
                neg::<P, Self>(to, *x, dir)
            }

            fn abs<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode {
                abs::<P, Self>(to, *x, dir)
            }

            fn add<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                add::<P, Self>(to, *x, *y, dir)
            }

            fn sub<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                sub::<P, Self>(to, *x, *y, dir)
            }

            fn mul<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                mul::<P, Self>(to, *x, *y, dir)
            }

            fn div<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                div::<P, Self>(to, *x, *y, dir)
            }

            fn idiv<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                idiv::<P, Self>(to, *x, *y, dir)
            }

            fn rem<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                rem::<P, Self>(to, *x, *y, dir)
            }

            fn floor<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode {
                assign_checked::<P, Self>(to, *x, dir)
            }

            fn ceil<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode {
                assign_checked::<P, Self>(to, *x, dir)
            }

            fn trunc<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode {
                assign_checked::<P, Self>(to, *x, dir)
            }

            fn sqrt<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode {
                sqrt::<P, Self>(to, *x, dir)
            }

            fn add_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode {
                add_2exp::<P, Self>(to, *x, exp, dir)
            }

            fn sub_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode {
                sub_2exp::<P, Self>(to, *x, exp, dir)
            }

            fn mul_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode {
                mul_2exp::<P, Self>(to, *x, exp, dir)
            }

            fn div_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode {
                div_2exp::<P, Self>(to, *x, exp, dir)
            }

            fn smod_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode {
                smod_2exp::<P, Self>(to, *x, exp, dir)
            }

            fn umod_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode {
                umod_2exp::<P, Self>(to, *x, exp, dir)
            }

            fn gcd<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                gcd::<P, Self>(to, *x, *y, dir)
            }

            fn lcm<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                lcm::<P, Self>(to, *x, *y, dir)
            }

            fn gcdext<P: Policy>(
                g: &mut Self,
                s: &mut Self,
                t: &mut Self,
                x: &Self,
                y: &Self,
                dir: RoundingDir,
            ) -> ResultCode {
                gcdext::<P, Self>(g, s, t, *x, *y, dir)
            }

            fn add_mul<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                add_mul::<P, Self>(to, *x, *y, dir)
            }

            fn sub_mul<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
                sub_mul::<P, Self>(to, *x, *y, dir)
            }

            #[inline]
            fn cmp(x: &Self, y: &Self) -> Option<Ordering> {
                Some(Ord::cmp(x, y))
            }

            fn to_rational(x: &Self) -> Option<BigRational> {
                Some(to_rational(*x))
            }

            fn from_rational<P: Policy>(to: &mut Self, q: &BigRational, dir: RoundingDir) -> ResultCode {
                from_rational::<P, Self>(to, q, dir)
            }

            fn write_literal<W: fmt::Write>(
                x: &Self,
                format: &NumericFormat,
                out: &mut W,
            ) -> Result<Relation, fmt::Error> {
                write_literal(*x, format, out)
            }
        }
    )*};
}

int_repr!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CheckOverflow, Extended, Saturating, Transparent};

    #[test]
    fn test_add_within_range() {
        let mut to = 0i32;
        assert_eq!(add::<CheckOverflow, i32>(&mut to, 40, 2, RoundingDir::IGNORE), ResultCode::V_EQ);
        assert_eq!(to, 42);
    }

    #[test]
    fn test_add_overflow_to_infinity() {
        let mut to = 0i32;
        let max = ExtendedRange::<Extended, i32>::MAX;
        let r = add::<Extended, i32>(&mut to, max, 1, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT_PLUS_INFINITY);
        assert_eq!(to, i32::MAX);
    }

    #[test]
    fn test_add_overflow_without_infinity() {
        let mut to = 0i64;
        let r = add::<Saturating, i64>(&mut to, i64::MAX, 1, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_GT_SUP.unrepresentable());
        assert_eq!(to, i64::MAX);

        let r = sub::<Saturating, i64>(&mut to, i64::MIN, 1, RoundingDir::IGNORE);
        assert_eq!(r, ResultCode::V_LT_INF.unrepresentable());
        assert_eq!(to, i64::MIN);
    }

    #[test]
    fn test_overflow_round_down_saturates() {
        let mut to = 0u8;
        let r = add::<Extended, u8>(&mut to, 250, 10, RoundingDir::DOWN);
        assert_eq!(r, ResultCode::V_GT_SUP);
        assert_eq!(to, ExtendedRange::<Extended, u8>::MAX);
    }

    #[test]
    fn test_unsigned_negative_result() {
        let mut to = 0u64;
        let r = sub::<Extended, u64>(&mut to, 1, 2, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT_INF);
        assert_eq!(to, 0);
        let r = sub::<Extended, u64>(&mut to, 1, 2, RoundingDir::DOWN);
        assert_eq!(r, ResultCode::V_GT_MINUS_INFINITY);
        assert_eq!(to, u64::MAX - 1);
    }

    #[test]
    fn test_mul_quadrants() {
        let mut to = 0i64;
        assert_eq!(mul::<CheckOverflow, i64>(&mut to, -3, 7, RoundingDir::IGNORE), ResultCode::V_EQ);
        assert_eq!(to, -21);
        assert_eq!(mul::<CheckOverflow, i64>(&mut to, -3, -7, RoundingDir::IGNORE), ResultCode::V_EQ);
        assert_eq!(to, 21);
        assert!(mul::<CheckOverflow, i64>(&mut to, i64::MAX / 2 + 1, 2, RoundingDir::IGNORE).is_overflow());
        assert!(mul::<CheckOverflow, i64>(&mut to, i64::MIN / 2 - 1, 2, RoundingDir::IGNORE).is_overflow());
        assert_eq!(
            mul::<CheckOverflow, i64>(&mut to, i64::MIN / 2, 2, RoundingDir::IGNORE),
            ResultCode::V_EQ
        );
        assert_eq!(to, i64::MIN);
        assert!(mul::<CheckOverflow, i64>(&mut to, i64::MIN, -1, RoundingDir::IGNORE).is_overflow());
    }

    #[test]
    fn test_mul_wide_path() {
        let mut to = 0i16;
        let r = mul::<CheckOverflow, i16>(&mut to, 300, 300, RoundingDir::IGNORE);
        assert!(r.is_overflow());
        assert_eq!(mul::<CheckOverflow, i16>(&mut to, -100, 300, RoundingDir::IGNORE), ResultCode::V_EQ);
        assert_eq!(to, -30000);
    }

    #[test]
    fn test_div_rounding() {
        let mut to = 0i32;
        assert_eq!(div::<CheckOverflow, i32>(&mut to, 7, 2, RoundingDir::UP), ResultCode::V_LT);
        assert_eq!(to, 4);
        assert_eq!(div::<CheckOverflow, i32>(&mut to, -7, 2, RoundingDir::DOWN), ResultCode::V_GT);
        assert_eq!(to, -4);
        assert_eq!(div::<CheckOverflow, i32>(&mut to, 8, -2, RoundingDir::DOWN), ResultCode::V_EQ);
        assert_eq!(to, -4);
    }

    #[test]
    fn test_div_min_by_minus_one() {
        let mut to = 0i64;
        let r = div::<CheckOverflow, i64>(&mut to, i64::MIN, -1, RoundingDir::IGNORE);
        assert!(r.is_overflow());
    }

    #[test]
    fn test_div_by_zero_never_panics() {
        let mut to = 5i32;
        assert_eq!(div::<Transparent, i32>(&mut to, 1, 0, RoundingDir::IGNORE), ResultCode::V_DIV_ZERO);
        assert_eq!(rem::<Transparent, i32>(&mut to, 1, 0, RoundingDir::IGNORE), ResultCode::V_MOD_ZERO);
        assert_eq!(to, 5);
    }

    #[test]
    fn test_idiv_and_rem() {
        let mut to = 0i32;
        idiv::<CheckOverflow, i32>(&mut to, -7, 2, RoundingDir::IGNORE);
        assert_eq!(to, -3);
        rem::<CheckOverflow, i32>(&mut to, -7, 2, RoundingDir::IGNORE);
        assert_eq!(to, -1);
    }

    #[test]
    fn test_isqrt_rem() {
        assert_eq!(isqrt_rem(0), (0, 0));
        assert_eq!(isqrt_rem(1), (1, 0));
        assert_eq!(isqrt_rem(15), (3, 6));
        assert_eq!(isqrt_rem(16), (4, 0));
        assert_eq!(isqrt_rem(u64::MAX), (u32::MAX as u64, 2 * u32::MAX as u64));
    }

    #[test]
    fn test_sqrt_rounding() {
        let mut to = 0u32;
        assert_eq!(sqrt::<CheckOverflow, u32>(&mut to, 10, RoundingDir::UP), ResultCode::V_LT);
        assert_eq!(to, 4);
        assert_eq!(sqrt::<CheckOverflow, u32>(&mut to, 10, RoundingDir::DOWN), ResultCode::V_GT);
        assert_eq!(to, 3);
        let mut neg = 0i32;
        assert_eq!(sqrt::<CheckOverflow, i32>(&mut neg, -4, RoundingDir::UP), ResultCode::V_SQRT_NEG);
    }

    #[test]
    fn test_2exp_boundaries() {
        let mut to = 0i32;
        assert!(mul_2exp::<CheckOverflow, i32>(&mut to, 1, 32, RoundingDir::IGNORE).is_overflow());
        assert_eq!(mul_2exp::<CheckOverflow, i32>(&mut to, 3, 4, RoundingDir::IGNORE), ResultCode::V_EQ);
        assert_eq!(to, 48);
        assert_eq!(div_2exp::<CheckOverflow, i32>(&mut to, 5, 40, RoundingDir::UP), ResultCode::V_LT);
        assert_eq!(to, 1);
        assert_eq!(div_2exp::<CheckOverflow, i32>(&mut to, -5, 40, RoundingDir::DOWN), ResultCode::V_GT);
        assert_eq!(to, -1);
        assert_eq!(div_2exp::<CheckOverflow, i32>(&mut to, -5, 1, RoundingDir::UP), ResultCode::V_LT);
        assert_eq!(to, -2);
        assert!(add_2exp::<CheckOverflow, u8>(&mut 0u8, 1, 8, RoundingDir::IGNORE).is_overflow());
        assert!(sub_2exp::<CheckOverflow, u8>(&mut 0u8, 1, 1, RoundingDir::IGNORE).is_overflow());
    }

    #[test]
    fn test_mod_2exp() {
        let mut to = 0i32;
        smod_2exp::<CheckOverflow, i32>(&mut to, 7, 3, RoundingDir::IGNORE);
        assert_eq!(to, -1);
        smod_2exp::<CheckOverflow, i32>(&mut to, -5, 3, RoundingDir::IGNORE);
        assert_eq!(to, 3);
        umod_2exp::<CheckOverflow, i32>(&mut to, -5, 3, RoundingDir::IGNORE);
        assert_eq!(to, 3);
        umod_2exp::<CheckOverflow, i32>(&mut to, 12, 200, RoundingDir::IGNORE);
        assert_eq!(to, 12);
        let mut u = 0u8;
        assert!(smod_2exp::<CheckOverflow, u8>(&mut u, 7, 3, RoundingDir::IGNORE).is_overflow());
    }

    #[test]
    fn test_gcd_lcm() {
        let mut to = 0i64;
        gcd::<CheckOverflow, i64>(&mut to, -12, 18, RoundingDir::IGNORE);
        assert_eq!(to, 6);
        lcm::<CheckOverflow, i64>(&mut to, -4, 6, RoundingDir::IGNORE);
        assert_eq!(to, 12);
        assert!(lcm::<CheckOverflow, u64>(&mut 0u64, u64::MAX, u64::MAX - 1, RoundingDir::IGNORE).is_overflow());
        assert!(gcd::<CheckOverflow, i64>(&mut to, i64::MIN, 0, RoundingDir::IGNORE).is_overflow());
    }

    #[test]
    fn test_gcdext() {
        let (mut g, mut s, mut t) = (0i32, 0i32, 0i32);
        let r = gcdext::<CheckOverflow, i32>(&mut g, &mut s, &mut t, 240, 46, RoundingDir::IGNORE);
        assert_eq!(r, ResultCode::V_EQ);
        assert_eq!(g, 2);
        assert_eq!(s * 240 + t * 46, 2);
    }

    #[test]
    fn test_add_mul() {
        let mut to = 10i32;
        add_mul::<CheckOverflow, i32>(&mut to, 3, 4, RoundingDir::IGNORE);
        assert_eq!(to, 22);
        sub_mul::<CheckOverflow, i32>(&mut to, 3, 4, RoundingDir::IGNORE);
        assert_eq!(to, 10);

        let mut big = 5i64;
        let r = add_mul::<CheckOverflow, i64>(&mut big, i64::MAX, 2, RoundingDir::IGNORE);
        assert!(r.is_overflow());
        let mut neg_acc = -5i64;
        let r = add_mul::<CheckOverflow, i64>(&mut neg_acc, i64::MAX, 2, RoundingDir::IGNORE);
        assert_eq!(r, ResultCode::V_UNKNOWN_POS_OVERFLOW);
        assert_eq!(neg_acc, -5);
    }

    #[test]
    fn test_from_rational_rounds() {
        let q = BigRational::new(BigInt::from(7), BigInt::from(3));
        let mut to = 0i32;
        assert_eq!(from_rational::<CheckOverflow, i32>(&mut to, &q, RoundingDir::UP), ResultCode::V_LT);
        assert_eq!(to, 3);
        assert_eq!(from_rational::<CheckOverflow, i32>(&mut to, &-q, RoundingDir::UP), ResultCode::V_LT);
        assert_eq!(to, -2);
    }

    #[test]
    fn test_single_limb_fast_path() {
        assert_eq!(bigint_to_wide(&BigInt::from(u64::MAX)), Some(u64::MAX as i128));
        assert_eq!(bigint_to_wide(&BigInt::from(-5)), Some(-5));
        assert_eq!(bigint_to_wide(&(BigInt::from(u64::MAX) * 2)), None);
    }

    #[test]
    fn test_assign_special_without_sentinels() {
        let mut to = 0i32;
        let r = assign_special::<CheckOverflow, i32>(&mut to, ResultClass::PlusInfinity, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_EQ_PLUS_INFINITY.unrepresentable());
        assert_eq!(to, i32::MAX);
        let r = assign_special::<CheckOverflow, i32>(&mut to, ResultClass::MinusInfinity, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT_INF);
        assert_eq!(to, i32::MIN);
    }

    #[test]
    fn test_write_literal() {
        let mut out = String::new();
        write_literal(-255i32, &NumericFormat::default().with_base(16), &mut out).unwrap();
        assert_eq!(out, "-ff");
    }
}
