// ============================================================================
// Arithmetic Primitives
// One implementation per operation per representation family
// ============================================================================
//
// This module provides:
// - int: machine integers, range-checked against the extended encoding
// - float: machine floats, exact relations via error-free transformations
// - big: arbitrary-precision integers (exact, no sentinels)
// - rational: arbitrary-precision rationals (exact, no sentinels)
// - convert: the conversion matrix between families
//
// Shared rounding helpers live here.

pub(crate) mod big;
pub(crate) mod convert;
pub(crate) mod float;
pub(crate) mod int;
pub(crate) mod rational;

use crate::result::{ResultCode, RoundingDir};
use num_integer::Integer;
use num_traits::Signed;

/// Resolve a truncated quotient whose exact value lies strictly above it
/// (`exact_above`) or strictly below it.
///
/// Returns the rounded quotient and the relation of the exact value to it.
pub(crate) fn round_truncated<N>(q: N, exact_above: bool, dir: RoundingDir) -> (N, ResultCode)
where
    N: Integer + Clone,
{
    if exact_above {
        if dir.round_up() {
            (q + N::one(), ResultCode::V_LT)
        } else {
            (q, ResultCode::V_GT)
        }
    } else if dir.round_down() {
        (q - N::one(), ResultCode::V_GT)
    } else {
        (q, ResultCode::V_LT)
    }
}

/// Truncating division of `n` by `d` (non-zero) rounded per `dir`.
pub(crate) fn div_rounded<N>(n: &N, d: &N, dir: RoundingDir) -> (N, ResultCode)
where
    N: Integer + Signed + Clone,
{
    let (q, r) = n.div_rem(d);
    if r.is_zero() {
        return (q, ResultCode::V_EQ);
    }
    // exact = q + r/d, above q when r and d agree in sign
    let exact_above = r.is_positive() == d.is_positive();
    round_truncated(q, exact_above, dir)
}

/// Integer square root of a non-negative `n`, rounded per `dir`.
pub(crate) fn sqrt_rounded<N>(n: &N, dir: RoundingDir) -> (N, ResultCode)
where
    N: Integer + num_integer::Roots + Clone,
{
    let root = n.sqrt();
    if &(root.clone() * root.clone()) == n {
        (root, ResultCode::V_EQ)
    } else {
        round_truncated(root, true, dir)
    }
}

/// Extended Euclid: `(g, s, t)` with `s * x + t * y == g` and `g >= 0`.
pub(crate) fn extended_gcd<N>(x: &N, y: &N) -> (N, N, N)
where
    N: Integer + Signed + Clone,
{
    if x.is_zero() && y.is_zero() {
        return (N::zero(), N::zero(), N::zero());
    }
    let (mut old_r, mut r) = (x.clone(), y.clone());
    let (mut old_s, mut s) = (N::one(), N::zero());
    let (mut old_t, mut t) = (N::zero(), N::one());
    while !r.is_zero() {
        let q = old_r.div_floor(&r);
        let next_r = old_r - q.clone() * r.clone();
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = old_s - q.clone() * s.clone();
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = old_t - q * t.clone();
        old_t = std::mem::replace(&mut t, next_t);
    }
    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}
