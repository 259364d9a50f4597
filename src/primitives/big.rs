// ============================================================================
// Arbitrary-Precision Integer Primitives
// ============================================================================
//
// Every result is exact except division, square root and the shifting
// family, which round per the requested direction. There is no room for
// sentinels, so wrapping a BigInt under a policy with specials is rejected
// at compile time.

use super::{div_rounded, extended_gcd, round_truncated, sqrt_rounded};
use crate::constants::BigConstants;
use crate::io::{output::write_big_radix, NumericFormat};
use crate::policy::Policy;
use crate::repr::{BigIntFamily, Repr};
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
fn pow2(exp: u32) -> BigInt {
    BigConstants::with(|c| c.one() << exp)
}

impl Repr for BigInt {
    type Family = BigIntFamily;
    const NAME: &'static str = "BigInt";
    const IS_INTEGER: bool = true;

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
    fn is_integer(_x: &Self) -> bool {
        true
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

    fn div<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode {
        if y.is_zero() {
            return ResultCode::V_DIV_ZERO;
        }
        let (q, r) = div_rounded(x, y, dir);
        *to = q;
        r
    }

    fn idiv<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        if y.is_zero() {
            return ResultCode::V_DIV_ZERO;
        }
        *to = x / y;
        ResultCode::V_EQ
    }

    fn rem<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        if y.is_zero() {
            return ResultCode::V_MOD_ZERO;
        }
        *to = x % y;
        ResultCode::V_EQ
    }

    fn floor<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
        to.clone_from(x);
        ResultCode::V_EQ
    }

    fn ceil<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
        to.clone_from(x);
        ResultCode::V_EQ
    }

    fn trunc<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
        to.clone_from(x);
        ResultCode::V_EQ
    }

    fn sqrt<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode {
        if x.is_negative() {
            return ResultCode::V_SQRT_NEG;
        }
        let (root, r) = sqrt_rounded(x, dir);
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
        *to = x << exp;
        ResultCode::V_EQ
    }

    fn div_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode {
        if x.is_zero() {
            to.set_zero();
            return ResultCode::V_EQ;
        }
        if u64::from(exp) > x.bits() {
            // |x| < 2^exp: the quotient truncates to zero
            let zero = BigConstants::with(|c| c.zero().clone());
            let (q, r) = round_truncated(zero, x.is_positive(), dir);
            *to = q;
            return r;
        }
        let (q, r) = div_rounded(x, &pow2(exp), dir);
        *to = q;
        r
    }

    fn smod_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, _dir: RoundingDir) -> ResultCode {
        if exp == 0 {
            to.set_zero();
            return ResultCode::V_EQ;
        }
        if x.bits() < u64::from(exp) {
            to.clone_from(x);
            return ResultCode::V_EQ;
        }
        let m = pow2(exp);
        let r = x.mod_floor(&m);
        *to = if r >= pow2(exp - 1) { r - m } else { r };
        ResultCode::V_EQ
    }

    fn umod_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, _dir: RoundingDir) -> ResultCode {
        if !x.is_negative() && x.bits() <= u64::from(exp) {
            to.clone_from(x);
            return ResultCode::V_EQ;
        }
        *to = x.mod_floor(&pow2(exp));
        ResultCode::V_EQ
    }

    fn gcd<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        *to = x.gcd(y);
        ResultCode::V_EQ
    }

    fn lcm<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
        *to = x.lcm(y);
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
        (*g, *s, *t) = extended_gcd(x, y);
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
        Some(BigRational::from_integer(x.clone()))
    }

    fn from_rational<P: Policy>(to: &mut Self, q: &BigRational, dir: RoundingDir) -> ResultCode {
        no_specials::<P>();
        let (quotient, r) = div_rounded(q.numer(), q.denom(), dir);
        *to = quotient;
        r
    }

    fn write_literal<W: fmt::Write>(
        x: &Self,
        format: &NumericFormat,
        out: &mut W,
    ) -> Result<Relation, fmt::Error> {
        write_big_radix(out, x, format)?;
        Ok(Relation::EQ)
    }
}
