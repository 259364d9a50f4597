// ============================================================================
// Dispatch Module
// Special-value rules in front of the arithmetic primitives
// ============================================================================
//
// This module provides:
// - classify: the class of a raw value as seen through its policy
// - one generic entry point per operation, parameterized by the destination
//   policy and the policy of every operand
// - cmp / sgn / is_integer over operands of any policy
//
// Design principles:
// - Every entry point is monomorphized per (representation, policies), there
//   is no runtime type switch
// - NaN operands always yield NaN; combinations of infinities follow IEEE
//   rules, with the undefined ones reported through their own NaN reason when
//   the destination policy checks them
// - Only finite operands reach a primitive
// - A NaN-class outcome stores the NaN sentinel when the destination has one

use crate::policy::Policy;
use crate::repr::{ConvertFrom, Repr};
use crate::result::{ResultClass, ResultCode, RoundingDir};
use std::cmp::Ordering;

// ============================================================================
// Classification
// ============================================================================

/// Class of `x` under policy `P`: a sentinel when `P` defines one, otherwise
/// whatever the hardware says (a native float infinity stays an infinity).
#[inline]
pub fn classify<T: Repr, P: Policy>(x: &T) -> ResultClass {
    if T::is_nan::<P>(x) {
        return ResultClass::NotANumber;
    }
    match T::is_inf::<P>(x) {
        -1 => ResultClass::MinusInfinity,
        1 => ResultClass::PlusInfinity,
        _ => T::native_class(x),
    }
}

#[inline]
fn sign_of<T: Repr>(x: &T, class: ResultClass) -> i32 {
    match class {
        ResultClass::MinusInfinity => -1,
        ResultClass::PlusInfinity => 1,
        ResultClass::NotANumber => 0,
        ResultClass::Normal => T::sgn(x),
    }
}

#[inline]
fn infinity(sign: i32) -> ResultClass {
    if sign < 0 {
        ResultClass::MinusInfinity
    } else {
        ResultClass::PlusInfinity
    }
}

/// Store NaN (when the destination can hold it) and report `reason`.
#[inline]
fn store_nan<T: Repr, To: Policy>(to: &mut T, reason: ResultCode) -> ResultCode {
    T::assign_special::<To>(to, ResultClass::NotANumber, RoundingDir::IGNORE);
    reason
}

#[inline]
fn store_infinity<T: Repr, To: Policy>(to: &mut T, sign: i32, dir: RoundingDir) -> ResultCode {
    T::assign_special::<To>(to, infinity(sign), dir)
}

/// Reason for an undefined combination: the dedicated one when `checked`.
#[inline]
fn undefined<T: Repr, To: Policy>(to: &mut T, checked: bool, reason: ResultCode) -> ResultCode {
    store_nan::<T, To>(to, if checked { reason } else { ResultCode::V_NAN })
}

/// Primitives report domain errors without writing; put the sentinel in.
#[inline]
fn settle<T: Repr, To: Policy>(to: &mut T, r: ResultCode) -> ResultCode {
    if r.is_nan() && To::HAS_NAN {
        T::assign_special::<To>(to, ResultClass::NotANumber, RoundingDir::IGNORE);
    }
    r
}

#[inline]
fn store_zero<T: Repr>(to: &mut T) -> ResultCode {
    *to = T::zero();
    ResultCode::V_EQ
}

// ============================================================================
// Conversion
// ============================================================================

/// Assign `from` (held under policy `From`) to `to` under policy `To`.
pub fn convert<T, S, To, From>(to: &mut T, from: &S, dir: RoundingDir) -> ResultCode
where
    T: ConvertFrom<S>,
    S: Repr,
    To: Policy,
    From: Policy,
{
    match classify::<S, From>(from) {
        ResultClass::Normal => {
            let r = <T as ConvertFrom<S>>::convert_from::<To>(to, from, dir);
            settle::<T, To>(to, r)
        }
        ResultClass::NotANumber => store_nan::<T, To>(to, ResultCode::V_NAN),
        class => T::assign_special::<To>(to, class, dir),
    }
}

// ============================================================================
// Unary Operations
// ============================================================================

/// Copy between policies of the same representation.
pub fn assign<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, dir: RoundingDir) -> ResultCode {
    keep_infinity::<T, To, P1>(to, x, dir, T::assign::<To>)
}

pub fn neg<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, dir: RoundingDir) -> ResultCode {
    match classify::<T, P1>(x) {
        ResultClass::Normal => {
            let r = <T as Repr>::neg::<To>(to, x, dir);
            settle::<T, To>(to, r)
        }
        ResultClass::NotANumber => store_nan::<T, To>(to, ResultCode::V_NAN),
        ResultClass::MinusInfinity => store_infinity::<T, To>(to, 1, dir),
        ResultClass::PlusInfinity => store_infinity::<T, To>(to, -1, dir),
    }
}

pub fn abs<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, dir: RoundingDir) -> ResultCode {
    match classify::<T, P1>(x) {
        ResultClass::Normal => {
            let r = <T as Repr>::abs::<To>(to, x, dir);
            settle::<T, To>(to, r)
        }
        ResultClass::NotANumber => store_nan::<T, To>(to, ResultCode::V_NAN),
        _ => store_infinity::<T, To>(to, 1, dir),
    }
}

/// Shared shape of the operations that map an infinity to itself.
#[inline]
fn keep_infinity<T: Repr, To: Policy, P1: Policy>(
    to: &mut T,
    x: &T,
    dir: RoundingDir,
    finite: impl FnOnce(&mut T, &T, RoundingDir) -> ResultCode,
) -> ResultCode {
    match classify::<T, P1>(x) {
        ResultClass::Normal => {
            let r = finite(to, x, dir);
            settle::<T, To>(to, r)
        }
        ResultClass::NotANumber => store_nan::<T, To>(to, ResultCode::V_NAN),
        class => T::assign_special::<To>(to, class, dir),
    }
}

pub fn floor<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, dir: RoundingDir) -> ResultCode {
    keep_infinity::<T, To, P1>(to, x, dir, T::floor::<To>)
}

pub fn ceil<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, dir: RoundingDir) -> ResultCode {
    keep_infinity::<T, To, P1>(to, x, dir, T::ceil::<To>)
}

pub fn trunc<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, dir: RoundingDir) -> ResultCode {
    keep_infinity::<T, To, P1>(to, x, dir, T::trunc::<To>)
}

pub fn sqrt<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, dir: RoundingDir) -> ResultCode {
    match classify::<T, P1>(x) {
        ResultClass::Normal => {
            let r = <T as Repr>::sqrt::<To>(to, x, dir);
            settle::<T, To>(to, r)
        }
        ResultClass::NotANumber => store_nan::<T, To>(to, ResultCode::V_NAN),
        ResultClass::MinusInfinity => {
            undefined::<T, To>(to, To::CHECK_SQRT_NEG, ResultCode::V_SQRT_NEG)
        }
        ResultClass::PlusInfinity => store_infinity::<T, To>(to, 1, dir),
    }
}

// ============================================================================
// Power-of-Two Family
// ============================================================================

pub fn mul_2exp<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, exp: u32, dir: RoundingDir) -> ResultCode {
    keep_infinity::<T, To, P1>(to, x, dir, |to, x, dir| T::mul_2exp::<To>(to, x, exp, dir))
}

pub fn div_2exp<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, exp: u32, dir: RoundingDir) -> ResultCode {
    keep_infinity::<T, To, P1>(to, x, dir, |to, x, dir| T::div_2exp::<To>(to, x, exp, dir))
}

pub fn add_2exp<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, exp: u32, dir: RoundingDir) -> ResultCode {
    keep_infinity::<T, To, P1>(to, x, dir, |to, x, dir| T::add_2exp::<To>(to, x, exp, dir))
}

pub fn sub_2exp<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, exp: u32, dir: RoundingDir) -> ResultCode {
    keep_infinity::<T, To, P1>(to, x, dir, |to, x, dir| T::sub_2exp::<To>(to, x, exp, dir))
}

fn mod_2exp<T: Repr, To: Policy, P1: Policy>(
    to: &mut T,
    x: &T,
    dir: RoundingDir,
    finite: impl FnOnce(&mut T, &T, RoundingDir) -> ResultCode,
) -> ResultCode {
    match classify::<T, P1>(x) {
        ResultClass::Normal => {
            let r = finite(to, x, dir);
            settle::<T, To>(to, r)
        }
        ResultClass::NotANumber => store_nan::<T, To>(to, ResultCode::V_NAN),
        _ => undefined::<T, To>(to, To::CHECK_INF_MOD, ResultCode::V_INF_MOD),
    }
}

pub fn smod_2exp<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, exp: u32, dir: RoundingDir) -> ResultCode {
    mod_2exp::<T, To, P1>(to, x, dir, |to, x, dir| T::smod_2exp::<To>(to, x, exp, dir))
}

pub fn umod_2exp<T: Repr, To: Policy, P1: Policy>(to: &mut T, x: &T, exp: u32, dir: RoundingDir) -> ResultCode {
    mod_2exp::<T, To, P1>(to, x, dir, |to, x, dir| T::umod_2exp::<To>(to, x, exp, dir))
}

// ============================================================================
// Binary Operations
// ============================================================================

pub fn add<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    let cx = classify::<T, P1>(x);
    let cy = classify::<T, P2>(y);
    match (cx, cy) {
        (ResultClass::Normal, ResultClass::Normal) => {
            let r = <T as Repr>::add::<To>(to, x, y, dir);
            settle::<T, To>(to, r)
        }
        (ResultClass::NotANumber, _) | (_, ResultClass::NotANumber) => {
            store_nan::<T, To>(to, ResultCode::V_NAN)
        }
        (ResultClass::Normal, _) => store_infinity::<T, To>(to, sign_of(y, cy), dir),
        (_, ResultClass::Normal) => store_infinity::<T, To>(to, sign_of(x, cx), dir),
        _ if cx == cy => store_infinity::<T, To>(to, sign_of(x, cx), dir),
        _ => undefined::<T, To>(to, To::CHECK_INF_ADD_INF, ResultCode::V_INF_ADD_INF),
    }
}

pub fn sub<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    let cx = classify::<T, P1>(x);
    let cy = classify::<T, P2>(y);
    match (cx, cy) {
        (ResultClass::Normal, ResultClass::Normal) => {
            let r = <T as Repr>::sub::<To>(to, x, y, dir);
            settle::<T, To>(to, r)
        }
        (ResultClass::NotANumber, _) | (_, ResultClass::NotANumber) => {
            store_nan::<T, To>(to, ResultCode::V_NAN)
        }
        (ResultClass::Normal, _) => store_infinity::<T, To>(to, -sign_of(y, cy), dir),
        (_, ResultClass::Normal) => store_infinity::<T, To>(to, sign_of(x, cx), dir),
        _ if cx != cy => store_infinity::<T, To>(to, sign_of(x, cx), dir),
        _ => undefined::<T, To>(to, To::CHECK_INF_SUB_INF, ResultCode::V_INF_SUB_INF),
    }
}

pub fn mul<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    let cx = classify::<T, P1>(x);
    let cy = classify::<T, P2>(y);
    match (cx, cy) {
        (ResultClass::Normal, ResultClass::Normal) => {
            let r = <T as Repr>::mul::<To>(to, x, y, dir);
            settle::<T, To>(to, r)
        }
        (ResultClass::NotANumber, _) | (_, ResultClass::NotANumber) => {
            store_nan::<T, To>(to, ResultCode::V_NAN)
        }
        _ => {
            let sign = sign_of(x, cx) * sign_of(y, cy);
            if sign == 0 {
                undefined::<T, To>(to, To::CHECK_INF_MUL_ZERO, ResultCode::V_INF_MUL_ZERO)
            } else {
                store_infinity::<T, To>(to, sign, dir)
            }
        }
    }
}

/// Special cases shared by `div` and `idiv`; `None` when both are finite.
fn div_specials<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> Option<ResultCode> {
    let cx = classify::<T, P1>(x);
    let cy = classify::<T, P2>(y);
    let r = match (cx, cy) {
        (ResultClass::Normal, ResultClass::Normal) => return None,
        (ResultClass::NotANumber, _) | (_, ResultClass::NotANumber) => {
            store_nan::<T, To>(to, ResultCode::V_NAN)
        }
        (ResultClass::Normal, _) => store_zero(to),
        (_, ResultClass::Normal) => match sign_of(y, cy) {
            0 if To::CHECK_DIV_ZERO => store_nan::<T, To>(to, ResultCode::V_DIV_ZERO),
            0 => store_infinity::<T, To>(to, sign_of(x, cx), dir),
            sy => store_infinity::<T, To>(to, sign_of(x, cx) * sy, dir),
        },
        _ => undefined::<T, To>(to, To::CHECK_INF_DIV_INF, ResultCode::V_INF_DIV_INF),
    };
    Some(r)
}

pub fn div<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    match div_specials::<T, To, P1, P2>(to, x, y, dir) {
        Some(r) => r,
        None => {
            let r = <T as Repr>::div::<To>(to, x, y, dir);
            settle::<T, To>(to, r)
        }
    }
}

pub fn idiv<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    match div_specials::<T, To, P1, P2>(to, x, y, dir) {
        Some(r) => r,
        None => {
            let r = <T as Repr>::idiv::<To>(to, x, y, dir);
            settle::<T, To>(to, r)
        }
    }
}

pub fn rem<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    let cx = classify::<T, P1>(x);
    let cy = classify::<T, P2>(y);
    match (cx, cy) {
        (ResultClass::Normal, ResultClass::Normal) => {
            let r = <T as Repr>::rem::<To>(to, x, y, dir);
            settle::<T, To>(to, r)
        }
        (ResultClass::NotANumber, _) | (_, ResultClass::NotANumber) => {
            store_nan::<T, To>(to, ResultCode::V_NAN)
        }
        // x mod inf == x
        (ResultClass::Normal, _) => {
            let r = <T as Repr>::assign::<To>(to, x, dir);
            settle::<T, To>(to, r)
        }
        _ => undefined::<T, To>(to, To::CHECK_INF_MOD, ResultCode::V_INF_MOD),
    }
}

// ============================================================================
// Number Theory
// ============================================================================

/// NaN unless both operands are finite.
#[inline]
fn finite_pair<T: Repr, P1: Policy, P2: Policy>(x: &T, y: &T) -> bool {
    classify::<T, P1>(x) == ResultClass::Normal && classify::<T, P2>(y) == ResultClass::Normal
}

pub fn gcd<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    if !finite_pair::<T, P1, P2>(x, y) {
        return store_nan::<T, To>(to, ResultCode::V_NAN);
    }
    let r = <T as Repr>::gcd::<To>(to, x, y, dir);
    settle::<T, To>(to, r)
}

pub fn lcm<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    if !finite_pair::<T, P1, P2>(x, y) {
        return store_nan::<T, To>(to, ResultCode::V_NAN);
    }
    let r = <T as Repr>::lcm::<To>(to, x, y, dir);
    settle::<T, To>(to, r)
}

/// Extended gcd: `s * x + t * y == g`.
pub fn gcdext<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    g: &mut T,
    s: &mut T,
    t: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    if !finite_pair::<T, P1, P2>(x, y) {
        store_nan::<T, To>(s, ResultCode::V_NAN);
        store_nan::<T, To>(t, ResultCode::V_NAN);
        return store_nan::<T, To>(g, ResultCode::V_NAN);
    }
    let r = T::gcdext::<To>(g, s, t, x, y, dir);
    settle::<T, To>(g, r)
}

// ============================================================================
// Fused Multiply-Accumulate
// ============================================================================

/// `to += x * y` (or `-=` when `subtract`) with at least one special among
/// the accumulator and the factors.
fn fused_specials<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    subtract: bool,
    dir: RoundingDir,
) -> ResultCode {
    let ca = classify::<T, To>(to);
    let cx = classify::<T, P1>(x);
    let cy = classify::<T, P2>(y);
    if [ca, cx, cy].contains(&ResultClass::NotANumber) {
        return store_nan::<T, To>(to, ResultCode::V_NAN);
    }
    let product_infinite = cx != ResultClass::Normal || cy != ResultClass::Normal;
    let mut product_sign = sign_of(x, cx) * sign_of(y, cy);
    if subtract {
        product_sign = -product_sign;
    }
    if product_infinite && product_sign == 0 {
        return undefined::<T, To>(to, To::CHECK_INF_MUL_ZERO, ResultCode::V_INF_MUL_ZERO);
    }
    if ca == ResultClass::Normal {
        return store_infinity::<T, To>(to, product_sign, dir);
    }
    let acc_sign = sign_of(to, ca);
    if !product_infinite || product_sign == acc_sign {
        return store_infinity::<T, To>(to, acc_sign, dir);
    }
    if subtract {
        undefined::<T, To>(to, To::CHECK_INF_SUB_INF, ResultCode::V_INF_SUB_INF)
    } else {
        undefined::<T, To>(to, To::CHECK_INF_ADD_INF, ResultCode::V_INF_ADD_INF)
    }
}

#[inline]
fn all_finite<T: Repr, To: Policy, P1: Policy, P2: Policy>(to: &T, x: &T, y: &T) -> bool {
    classify::<T, To>(to) == ResultClass::Normal && finite_pair::<T, P1, P2>(x, y)
}

/// `to += x * y`, the accumulator being held under the destination policy.
pub fn add_mul<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    if !all_finite::<T, To, P1, P2>(to, x, y) {
        return fused_specials::<T, To, P1, P2>(to, x, y, false, dir);
    }
    let r = <T as Repr>::add_mul::<To>(to, x, y, dir);
    settle::<T, To>(to, r)
}

/// `to -= x * y`
pub fn sub_mul<T: Repr, To: Policy, P1: Policy, P2: Policy>(
    to: &mut T,
    x: &T,
    y: &T,
    dir: RoundingDir,
) -> ResultCode {
    if !all_finite::<T, To, P1, P2>(to, x, y) {
        return fused_specials::<T, To, P1, P2>(to, x, y, true, dir);
    }
    let r = <T as Repr>::sub_mul::<To>(to, x, y, dir);
    settle::<T, To>(to, r)
}

// ============================================================================
// Comparison
// ============================================================================

/// Ordering of two operands; `None` when either one is NaN.
pub fn cmp<T: Repr, P1: Policy, P2: Policy>(x: &T, y: &T) -> Option<Ordering> {
    let cx = classify::<T, P1>(x);
    let cy = classify::<T, P2>(y);
    match (cx, cy) {
        (ResultClass::Normal, ResultClass::Normal) => T::cmp(x, y),
        (ResultClass::NotANumber, _) | (_, ResultClass::NotANumber) => None,
        _ if cx == cy => Some(Ordering::Equal),
        (ResultClass::MinusInfinity, _) | (_, ResultClass::PlusInfinity) => Some(Ordering::Less),
        _ => Some(Ordering::Greater),
    }
}

/// -1, 0 or 1; NaN counts as 0.
pub fn sgn<T: Repr, P: Policy>(x: &T) -> i32 {
    sign_of(x, classify::<T, P>(x))
}

pub fn is_integer<T: Repr, P: Policy>(x: &T) -> bool {
    classify::<T, P>(x) == ResultClass::Normal && T::is_integer(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CheckOverflow, Extended, Saturating, Transparent};
    use crate::repr::ExtendedRange;
    use num_bigint::BigInt;

    type E32 = ExtendedRange<Extended, i32>;

    #[test]
    fn test_classify_sentinels() {
        assert_eq!(classify::<i32, Extended>(&E32::NOT_A_NUMBER), ResultClass::NotANumber);
        assert_eq!(classify::<i32, Extended>(&E32::PLUS_INFINITY), ResultClass::PlusInfinity);
        assert_eq!(classify::<i32, Extended>(&E32::MINUS_INFINITY), ResultClass::MinusInfinity);
        assert_eq!(classify::<i32, CheckOverflow>(&i32::MAX), ResultClass::Normal);
        assert_eq!(classify::<f64, Transparent>(&f64::INFINITY), ResultClass::PlusInfinity);
        assert_eq!(classify::<f64, Transparent>(&f64::NAN), ResultClass::NotANumber);
    }

    #[test]
    fn test_infinity_addition() {
        let mut to = 0i32;
        let r = add::<i32, Extended, Extended, Extended>(
            &mut to,
            &E32::PLUS_INFINITY,
            &E32::MINUS_INFINITY,
            RoundingDir::UP,
        );
        assert_eq!(r, ResultCode::V_INF_ADD_INF);
        assert_eq!(to, E32::NOT_A_NUMBER);

        let r = add::<i32, Extended, Extended, Transparent>(&mut to, &E32::PLUS_INFINITY, &5, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_EQ_PLUS_INFINITY);
        assert_eq!(to, E32::PLUS_INFINITY);
    }

    #[test]
    fn test_infinity_subtraction() {
        let mut to = 0i32;
        let r = sub::<i32, Extended, Extended, Extended>(
            &mut to,
            &E32::PLUS_INFINITY,
            &E32::PLUS_INFINITY,
            RoundingDir::UP,
        );
        assert_eq!(r, ResultCode::V_INF_SUB_INF);
        let r = sub::<i32, Extended, Transparent, Extended>(&mut to, &3, &E32::PLUS_INFINITY, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_EQ_MINUS_INFINITY);
        assert_eq!(to, E32::MINUS_INFINITY);
    }

    #[test]
    fn test_nan_propagates() {
        let mut to = 0i32;
        let r = mul::<i32, Extended, Extended, Transparent>(&mut to, &E32::NOT_A_NUMBER, &2, RoundingDir::UP);
        assert!(r.is_nan());
        assert_eq!(to, E32::NOT_A_NUMBER);
        assert_eq!(cmp::<i32, Extended, Transparent>(&E32::NOT_A_NUMBER, &0), None);
    }

    #[test]
    fn test_infinity_times_zero() {
        let mut to = 0i32;
        let r = mul::<i32, Extended, Extended, Transparent>(&mut to, &E32::MINUS_INFINITY, &0, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_INF_MUL_ZERO);
        let r = mul::<i32, Extended, Extended, Transparent>(&mut to, &E32::MINUS_INFINITY, &-2, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_EQ_PLUS_INFINITY);
    }

    #[test]
    fn test_division_specials() {
        let mut to = 7i32;
        let r = div::<i32, Extended, Transparent, Transparent>(&mut to, &1, &0, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_DIV_ZERO);
        assert_eq!(to, E32::NOT_A_NUMBER);

        let r = div::<i32, Extended, Transparent, Extended>(&mut to, &5, &E32::PLUS_INFINITY, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_EQ);
        assert_eq!(to, 0);

        let r = div::<i32, Extended, Extended, Extended>(
            &mut to,
            &E32::PLUS_INFINITY,
            &E32::PLUS_INFINITY,
            RoundingDir::UP,
        );
        assert_eq!(r, ResultCode::V_INF_DIV_INF);
    }

    #[test]
    fn test_remainder_specials() {
        let mut to = 0i32;
        let r = rem::<i32, Extended, Extended, Transparent>(&mut to, &E32::PLUS_INFINITY, &3, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_INF_MOD);
        let r = rem::<i32, Extended, Transparent, Extended>(&mut to, &-4, &E32::MINUS_INFINITY, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_EQ);
        assert_eq!(to, -4);
    }

    #[test]
    fn test_sqrt_of_minus_infinity() {
        let mut to = 0i32;
        let r = sqrt::<i32, Extended, Extended>(&mut to, &E32::MINUS_INFINITY, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_SQRT_NEG);
        assert_eq!(to, E32::NOT_A_NUMBER);
    }

    #[test]
    fn test_infinity_into_bounded_policy() {
        let mut to = 0i32;
        let r = convert::<i32, f64, Saturating, Transparent>(&mut to, &f64::INFINITY, RoundingDir::DOWN);
        assert_eq!(r, ResultCode::V_GT_SUP);
        assert_eq!(to, i32::MAX);

        let r = convert::<i32, f64, CheckOverflow, Transparent>(&mut to, &f64::NEG_INFINITY, RoundingDir::DOWN);
        assert!(!r.is_representable());
        assert_eq!(to, i32::MIN);
    }

    #[test]
    fn test_convert_finite() {
        let mut to = BigInt::from(0);
        let r = convert::<BigInt, i64, CheckOverflow, Transparent>(&mut to, &-42i64, RoundingDir::IGNORE);
        assert_eq!(r, ResultCode::V_EQ);
        assert_eq!(to, BigInt::from(-42));
    }

    #[test]
    fn test_fused_with_infinite_accumulator() {
        let mut acc = E32::PLUS_INFINITY;
        let r = add_mul::<i32, Extended, Transparent, Transparent>(&mut acc, &3, &4, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_EQ_PLUS_INFINITY);

        let mut acc = E32::PLUS_INFINITY;
        let r = add_mul::<i32, Extended, Extended, Transparent>(&mut acc, &E32::MINUS_INFINITY, &2, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_INF_ADD_INF);

        let mut acc = 10i32;
        let r = sub_mul::<i32, Extended, Extended, Transparent>(&mut acc, &E32::PLUS_INFINITY, &2, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_EQ_MINUS_INFINITY);
        assert_eq!(acc, E32::MINUS_INFINITY);
    }

    #[test]
    fn test_ordering_with_infinities() {
        assert_eq!(
            cmp::<i32, Extended, Transparent>(&E32::MINUS_INFINITY, &i32::MIN),
            Some(Ordering::Less)
        );
        assert_eq!(
            cmp::<i32, Transparent, Extended>(&i32::MAX, &E32::PLUS_INFINITY),
            Some(Ordering::Less)
        );
        assert_eq!(
            cmp::<i32, Extended, Extended>(&E32::PLUS_INFINITY, &E32::PLUS_INFINITY),
            Some(Ordering::Equal)
        );
        assert_eq!(sgn::<i32, Extended>(&E32::MINUS_INFINITY), -1);
        assert_eq!(sgn::<i32, Extended>(&E32::NOT_A_NUMBER), 0);
        assert!(!is_integer::<i32, Extended>(&E32::PLUS_INFINITY));
        assert!(is_integer::<f64, Transparent>(&4.0));
    }
}
