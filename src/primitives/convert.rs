// ============================================================================
// Conversion Matrix
// Finite-value conversions between every pair of representation families
// ============================================================================
//
//            to Int       to Float        to BigInt      to Rational
// from Int   wide cast    nearest+nudge   exact          exact
// from Float nearest+nudge widen+nudge    rational       exact
// from Big   single limb  limb / rational exact          exact
// from Q     rounded div  exact rounding  rounded div    exact

use super::{float, int};
use crate::policy::Policy;
use crate::repr::{
    BigIntFamily, Conversion, FloatFamily, IntFamily, NativeFloat, NativeInt, RationalFamily, Repr,
};
use crate::result::{ResultCode, RoundingDir};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::cmp::Ordering;

// ============================================================================
// Into Machine Integers
// ============================================================================

impl<T, S> Conversion<T, S> for (IntFamily, IntFamily)
where
    T: NativeInt + Repr,
    S: NativeInt + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut T, from: &S, dir: RoundingDir) -> ResultCode {
        int::assign_wide::<P, T>(to, from.to_wide(), dir)
    }
}

/// Hardware nearest (ties to even), nudged by one when the requested
/// direction disagrees with the side the hardware picked.
fn int_from_float<P: Policy, T: NativeInt, S: NativeFloat>(to: &mut T, x: S, dir: RoundingDir) -> ResultCode {
    let nearest = NativeFloat::round_ties_even(x);
    let (r, code) = match x.partial_cmp(&nearest) {
        Some(Ordering::Greater) if dir.round_up() => (nearest + S::one(), ResultCode::V_LT),
        Some(Ordering::Greater) => (nearest, ResultCode::V_GT),
        Some(Ordering::Less) if dir.round_down() => (nearest - S::one(), ResultCode::V_GT),
        Some(Ordering::Less) => (nearest, ResultCode::V_LT),
        _ => (nearest, ResultCode::V_EQ),
    };
    match r.to_i128() {
        Some(v) => int::assign_wide_inexact::<P, T>(to, v, code, dir),
        None if r > S::zero() => int::set_pos_overflow::<P, T>(to, dir),
        None => int::set_neg_overflow::<P, T>(to, dir),
    }
}

impl<T, S> Conversion<T, S> for (IntFamily, FloatFamily)
where
    T: NativeInt + Repr,
    S: NativeFloat + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut T, from: &S, dir: RoundingDir) -> ResultCode {
        int_from_float::<P, T, S>(to, *from, dir)
    }
}

impl<T> Conversion<T, BigInt> for (IntFamily, BigIntFamily)
where
    T: NativeInt + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut T, from: &BigInt, dir: RoundingDir) -> ResultCode {
        int::assign_big_inexact::<P, T>(to, from, ResultCode::V_EQ, dir)
    }
}

impl<T> Conversion<T, BigRational> for (IntFamily, RationalFamily)
where
    T: NativeInt + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut T, from: &BigRational, dir: RoundingDir) -> ResultCode {
        int::from_rational::<P, T>(to, from, dir)
    }
}

// ============================================================================
// Into Machine Floats
// ============================================================================

fn float_from_wide<P: Policy, T: NativeFloat>(to: &mut T, v: i128, dir: RoundingDir) -> ResultCode {
    let r = T::from_i128_nearest(v);
    float::finish::<P, T>(to, r, true, dir, || match r.to_i128() {
        Some(back) => v.cmp(&back),
        None => Ordering::Less,
    })
}

impl<T, S> Conversion<T, S> for (FloatFamily, IntFamily)
where
    T: NativeFloat + Repr,
    S: NativeInt + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut T, from: &S, dir: RoundingDir) -> ResultCode {
        float_from_wide::<P, T>(to, from.to_wide(), dir)
    }
}

impl<T, S> Conversion<T, S> for (FloatFamily, FloatFamily)
where
    T: NativeFloat + Repr,
    S: NativeFloat + Repr,
{
    fn convert<P: Policy>(to: &mut T, from: &S, dir: RoundingDir) -> ResultCode {
        // f64 holds every supported float exactly
        let wide = from.to_f64_exact();
        let r = T::from_f64_nearest(wide);
        float::finish::<P, T>(to, r, wide.is_finite(), dir, || {
            wide.partial_cmp(&r.to_f64_exact()).unwrap_or(Ordering::Equal)
        })
    }
}

impl<T> Conversion<T, BigInt> for (FloatFamily, BigIntFamily)
where
    T: NativeFloat + Repr,
{
    fn convert<P: Policy>(to: &mut T, from: &BigInt, dir: RoundingDir) -> ResultCode {
        match int::bigint_to_wide(from) {
            Some(v) => float_from_wide::<P, T>(to, v, dir),
            None => float::from_rational::<P, T>(to, &BigRational::from_integer(from.clone()), dir),
        }
    }
}

impl<T> Conversion<T, BigRational> for (FloatFamily, RationalFamily)
where
    T: NativeFloat + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut T, from: &BigRational, dir: RoundingDir) -> ResultCode {
        float::from_rational::<P, T>(to, from, dir)
    }
}

// ============================================================================
// Into Arbitrary Precision
// ============================================================================

impl<S> Conversion<BigInt, S> for (BigIntFamily, IntFamily)
where
    S: NativeInt + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut BigInt, from: &S, _dir: RoundingDir) -> ResultCode {
        *to = BigInt::from(from.to_wide());
        ResultCode::V_EQ
    }
}

impl<S> Conversion<BigInt, S> for (BigIntFamily, FloatFamily)
where
    S: NativeFloat + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut BigInt, from: &S, dir: RoundingDir) -> ResultCode {
        <BigInt as Repr>::from_rational::<P>(to, &float::exact(*from), dir)
    }
}

impl Conversion<BigInt, BigInt> for (BigIntFamily, BigIntFamily) {
    #[inline]
    fn convert<P: Policy>(to: &mut BigInt, from: &BigInt, dir: RoundingDir) -> ResultCode {
        <BigInt as Repr>::assign::<P>(to, from, dir)
    }
}

impl Conversion<BigInt, BigRational> for (BigIntFamily, RationalFamily) {
    #[inline]
    fn convert<P: Policy>(to: &mut BigInt, from: &BigRational, dir: RoundingDir) -> ResultCode {
        <BigInt as Repr>::from_rational::<P>(to, from, dir)
    }
}

impl<S> Conversion<BigRational, S> for (RationalFamily, IntFamily)
where
    S: NativeInt + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut BigRational, from: &S, _dir: RoundingDir) -> ResultCode {
        *to = int::to_rational(*from);
        ResultCode::V_EQ
    }
}

impl<S> Conversion<BigRational, S> for (RationalFamily, FloatFamily)
where
    S: NativeFloat + Repr,
{
    #[inline]
    fn convert<P: Policy>(to: &mut BigRational, from: &S, _dir: RoundingDir) -> ResultCode {
        *to = float::exact(*from);
        ResultCode::V_EQ
    }
}

impl Conversion<BigRational, BigInt> for (RationalFamily, BigIntFamily) {
    #[inline]
    fn convert<P: Policy>(to: &mut BigRational, from: &BigInt, _dir: RoundingDir) -> ResultCode {
        *to = BigRational::from_integer(from.clone());
        ResultCode::V_EQ
    }
}

impl Conversion<BigRational, BigRational> for (RationalFamily, RationalFamily) {
    #[inline]
    fn convert<P: Policy>(to: &mut BigRational, from: &BigRational, dir: RoundingDir) -> ResultCode {
        <BigRational as Repr>::assign::<P>(to, from, dir)
    }
}
