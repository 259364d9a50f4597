// ============================================================================
// Arbitrary-Precision Rational Primitives
// ============================================================================
//
// Closed under the field operations, so only the square root can be inexact:
// irrational roots are bracketed on the grid of `2^-precision`, where the
// precision comes from the shared big-number constants.

use super::{extended_gcd, round_truncated};
use crate::constants::BigConstants;
use crate::io::{output::write_rational, NumericFormat};
use crate::policy::Policy;
use crate::repr::{RationalFamily, Repr};
use crate::result::{Relation, ResultClass, ResultCode, RoundingDir};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

#[inline]
fn no_specials<P: Policy>() {
    const {
        assert!(
            !P::HAS_NAN && !P::HAS_INFINITY,
            "arbitrary-precision values cannot hold NaN or infinity sentinels"
        )
    }
}

#[inline]
fn pow2(exp: u32) -> BigRational {
    BigRational::from_integer(BigConstants::with(|c| c.one() << exp))
}

// ============================================================================
// Number Theory over Rationals
// ============================================================================
//
// With L the lcm of both denominators, a = A / L and b = C / L for integers
// A and C, and gcd(a, b) = gcd(A, C) / L.

fn common_scale(a: &BigRational, b: &BigRational) -> (BigInt, BigInt, BigInt) {
    let l = a.denom().lcm(b.denom());
    let scaled_a = a.numer() * (&l / a.denom());
    let scaled_b = b.numer() * (&l / b.denom());
    (scaled_a, scaled_b, l)
}

/// Largest rational dividing both `a` and `b` an integral number of times.
pub(crate) fn gcd_q(a: &BigRational, b: &BigRational) -> BigRational {
    let (sa, sb, l) = common_scale(a, b);
    BigRational::new(sa.gcd(&sb), l)
}

pub(crate) fn lcm_q(a: &BigRational, b: &BigRational) -> BigRational {
    let (sa, sb, l) = common_scale(a, b);
    BigRational::new(sa.lcm(&sb), l)
}

/// `(g, s, t)` with integral `s`, `t` and `s * a + t * b == g`.
pub(crate) fn gcdext_q(a: &BigRational, b: &BigRational) -> (BigRational, BigRational, BigRational) {
    let (sa, sb, l) = common_scale(a, b);
    let (g, s, t) = extended_gcd(&sa, &sb);
    (
        BigRational::new(g, l),
        BigRational::from_integer(s),
        BigRational::from_integer(t),
    )
}

/// Square root of a non-negative rational.
///
/// Exact when numerator and denominator are both perfect squares; otherwise
/// the root is irrational and the result lies on the `2^-precision` grid.
pub(crate) fn sqrt_q(x: &BigRational, precision: u32, dir: RoundingDir) -> (BigRational, ResultCode) {
    let (n, d) = (x.numer(), x.denom());
    let (rn, rd) = (n.sqrt(), d.sqrt());
    if &(&rn * &rn) == n && &(&rd * &rd) == d {
        return (BigRational::new(rn, rd), ResultCode::V_EQ);
    }
    let scaled = (n << (2 * precision as usize)) / d;
    let (root, r) = round_truncated(scaled.sqrt(), true, dir);
    (BigRational::new(root, BigConstants::with(|c| c.one() << precision)), r)
}

impl Repr for BigRational {
    type Family = RationalFamily;
    const NAME: &'static str = "BigRational";
    const IS_INTEGER: bool = false;

    #[inline]
    fn is_nan<P: Policy>(_x: &Self) -> bool {
        false
    }

    #[inline]
    fn is_inf<P: Policy>(_x: &Self) -> i32 {
        0
    }

    #[inline]
    fn native_class(_x: &Self) -> ResultClass {
        ResultClass::Normal
    }

    #[inline]
    fn sgn(x: &Self) -> i32 {
        if x.is_positive() {
            1
        } else if x.is_negative() {
            -1
        } else {
            0
        }
    }

    #[inline]
    fn is_integer(x: &Self) -> bool {
        BigRational::is_integer(x)
    }

    fn assign_special<P: Policy>(_to: &mut Self, class: ResultClass, _dir: RoundingDir) -> ResultCode {
        no_specials::<P>();
        match class {
            ResultClass::Normal => ResultCode::V_EQ,
            ResultClass::NotANumber => ResultCode::V_NAN,
            ResultClass::MinusInfinity => ResultCode::V_EQ_MINUS_INFINITY.unrepresentable(),
            ResultClass::PlusInfinity => ResultCode::V_EQ_PLUS_INFINITY.unrepresentable(),
        }
    }

    fn assign<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
        no_specials::<P>();
        to.clone_from(x);
        ResultCode::V_EQ
    }

    fn neg<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
        *to = -x;
        ResultCode::V_EQ
    }

    fn abs<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
        *to = x.abs();
        ResultCode::V_EQ
    }

    fn add<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        *to = x + y;
        ResultCode::V_EQ
    }

    fn sub<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        *to = x - y;
        ResultCode::V_EQ
    }

    fn mul<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        *to = x * y;
        ResultCode::V_EQ
    }

    fn div<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        if y.is_zero() {
            return ResultCode::V_DIV_ZERO;
        }
        *to = x / y;
        ResultCode::V_EQ
    }

    fn idiv<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        if y.is_zero() {
            return ResultCode::V_DIV_ZERO;
        }
        *to = (x / y).trunc();
        ResultCode::V_EQ
    }

    fn rem<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        if y.is_zero() {
            return ResultCode::V_MOD_ZERO;
        }
        *to = x - (x / y).trunc() * y;
        ResultCode::V_EQ
    }

    fn floor<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
        *to = x.floor();
        ResultCode::V_EQ
    }

    fn ceil<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
        *to = x.ceil();
        ResultCode::V_EQ
    }

    fn trunc<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
        *to = x.trunc();
        ResultCode::V_EQ
    }

    fn sqrt<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode {
        if x.is_negative() {
            return ResultCode::V_SQRT_NEG;
        }
        let (root, r) = sqrt_q(x, BigConstants::irrational_precision(), dir);
        *to = root;
        r
    }

    fn add_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, _dir: RoundingDir) -> ResultCode {
        *to = x + pow2(exp);
        ResultCode::V_EQ
    }

    fn sub_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, _dir: RoundingDir) -> ResultCode {
        *to = x - pow2(exp);
        ResultCode::V_EQ
    }

    fn mul_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, _dir: RoundingDir) -> ResultCode {
        *to = x * pow2(exp);
        ResultCode::V_EQ
    }

    fn div_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, _dir: RoundingDir) -> ResultCode {
        *to = x / pow2(exp);
        ResultCode::V_EQ
    }

    fn smod_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, _dir: RoundingDir) -> ResultCode {
        let m = pow2(exp);
        let r = x - (x / &m).floor() * &m;
        *to = if &r + &r >= m { r - m } else { r };
        ResultCode::V_EQ
    }

    fn umod_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, _dir: RoundingDir) -> ResultCode {
        let m = pow2(exp);
        *to = x - (x / &m).floor() * &m;
        ResultCode::V_EQ
    }

    fn gcd<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        *to = gcd_q(x, y);
        ResultCode::V_EQ
    }

    fn lcm<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        *to = lcm_q(x, y);
        ResultCode::V_EQ
    }

    fn gcdext<P: Policy>(
        g: &mut Self,
        s: &mut Self,
        t: &mut Self,
        x: &Self,
        y: &Self,
        _dir: RoundingDir,
    ) -> ResultCode {
        (*g, *s, *t) = gcdext_q(x, y);
        ResultCode::V_EQ
    }

    fn add_mul<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        *to += x * y;
        ResultCode::V_EQ
    }

    fn sub_mul<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        *to -= x * y;
        ResultCode::V_EQ
    }

    #[inline]
    fn cmp(x: &Self, y: &Self) -> Option<Ordering> {
        Some(Ord::cmp(x, y))
    }

    fn to_rational(x: &Self) -> Option<BigRational> {
        Some(x.clone())
    }

    fn from_rational<P: Policy>(to: &mut Self, q: &BigRational, _dir: RoundingDir) -> ResultCode {
        no_specials::<P>();
        to.clone_from(q);
        ResultCode::V_EQ
    }

    fn write_literal<W: fmt::Write>(
        x: &Self,
        format: &NumericFormat,
        out: &mut W,
    ) -> Result<Relation, fmt::Error> {
        write_rational(out, x, format)?;
        Ok(Relation::EQ)
    }
}
