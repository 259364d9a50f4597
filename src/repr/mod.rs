// ============================================================================
// Representation Module
// The contract every underlying number type fulfils
// ============================================================================
//
// This module provides:
// - Repr: the arithmetic primitives of one representation, parameterized by
//   the policy of the value being written
// - NativeInt / NativeFloat: width and signedness of machine types
// - ExtendedRange: sentinel placement for machine integers
// - Operand: anything that can stand on either side of an operator
// - ConvertFrom: the conversion matrix between representations
//
// Design principles:
// - Primitives never panic; they return a ResultCode and leave the output in
//   a legal state
// - Primitives only see finite operands: specials are resolved one layer up
// - Everything is resolved at compile time, no runtime type switch

mod extended;
mod native;

pub use extended::ExtendedRange;
pub use native::{NativeFloat, NativeInt};

use crate::checked::Checked;
use crate::io::NumericFormat;
use crate::policy::{Policy, Transparent};
use crate::result::{Relation, ResultClass, ResultCode, RoundingDir};
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Families
// ============================================================================

/// Marker naming the family a representation belongs to. Conversions are
/// keyed on pairs of families.
pub trait Family: 'static {}

/// Machine integers.
pub struct IntFamily;
/// Machine floats.
pub struct FloatFamily;
/// Arbitrary-precision integers.
pub struct BigIntFamily;
/// Arbitrary-precision rationals.
pub struct RationalFamily;

impl Family for IntFamily {}
impl Family for FloatFamily {}
impl Family for BigIntFamily {}
impl Family for RationalFamily {}

// ============================================================================
// Repr
// ============================================================================

/// An underlying representation and its arithmetic primitives.
///
/// Every primitive writes through its first argument and returns the relation
/// of the exact result to the written one. The policy parameter `P` is the
/// policy of the destination: it decides the safe range, whether sentinels
/// exist and which checks run. Operands are always finite values; NaN and
/// infinity operands are handled by [`crate::dispatch`] before a primitive is
/// reached.
pub trait Repr: Clone + PartialEq + PartialOrd + Zero + One + fmt::Debug + Send + Sync + 'static {
    type Family: Family;

    /// Human readable name, used in log records.
    const NAME: &'static str;

    /// Values are always integral.
    const IS_INTEGER: bool;

    // ------------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------------

    fn is_nan<P: Policy>(x: &Self) -> bool;

    /// -1 for the minus-infinity sentinel, 1 for plus-infinity, 0 otherwise.
    fn is_inf<P: Policy>(x: &Self) -> i32;

    /// Class of `x` as the hardware sees it, ignoring any policy.
    fn native_class(x: &Self) -> ResultClass;

    /// Sign of a finite value.
    fn sgn(x: &Self) -> i32;

    fn is_integer(x: &Self) -> bool;

    /// Store a special, or its closest finite stand-in when `P` lacks it.
    fn assign_special<P: Policy>(to: &mut Self, class: ResultClass, dir: RoundingDir) -> ResultCode;

    // ------------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------------

    /// Copy, range-checked against the destination policy.
    fn assign<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode;
    fn neg<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode;
    fn abs<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode;
    fn add<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;
    fn sub<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;
    fn mul<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;
    fn div<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;
    /// Quotient truncated toward zero.
    fn idiv<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;
    /// Remainder with the sign of the dividend.
    fn rem<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;
    fn floor<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode;
    fn ceil<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode;
    fn trunc<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode;
    fn sqrt<P: Policy>(to: &mut Self, x: &Self, dir: RoundingDir) -> ResultCode;

    fn add_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode;
    fn sub_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode;
    fn mul_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode;
    fn div_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode;
    /// Representative of `x` modulo `2^exp` in `[-2^(exp-1), 2^(exp-1))`.
    fn smod_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode;
    /// Representative of `x` modulo `2^exp` in `[0, 2^exp)`.
    fn umod_2exp<P: Policy>(to: &mut Self, x: &Self, exp: u32, dir: RoundingDir) -> ResultCode;

    fn gcd<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;
    fn lcm<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;
    /// `g = gcd(x, y)` together with Bezout coefficients `s * x + t * y == g`.
    fn gcdext<P: Policy>(
        g: &mut Self,
        s: &mut Self,
        t: &mut Self,
        x: &Self,
        y: &Self,
        dir: RoundingDir,
    ) -> ResultCode;

    /// `to += x * y`
    fn add_mul<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;
    /// `to -= x * y`
    fn sub_mul<P: Policy>(to: &mut Self, x: &Self, y: &Self, dir: RoundingDir) -> ResultCode;

    /// Ordering of two finite values; `None` only for hardware NaN.
    fn cmp(x: &Self, y: &Self) -> Option<Ordering>;

    // ------------------------------------------------------------------------
    // Exact bridge
    // ------------------------------------------------------------------------

    /// Exact value of a finite `x`; `None` for hardware specials.
    fn to_rational(x: &Self) -> Option<BigRational>;

    /// Store `q` rounded per `dir`.
    fn from_rational<P: Policy>(to: &mut Self, q: &BigRational, dir: RoundingDir) -> ResultCode;

    /// Write a finite `x` in `format`; the returned relation is that of `x`
    /// to the value of the text.
    fn write_literal<W: fmt::Write>(
        x: &Self,
        format: &NumericFormat,
        out: &mut W,
    ) -> Result<Relation, fmt::Error>;
}

// ============================================================================
// Operand
// ============================================================================

/// Anything usable as an operand: a bare representation value (treated as if
/// wrapped under [`Transparent`]) or a [`Checked`] value under any policy.
pub trait Operand {
    type Repr: Repr;
    type Policy: Policy;

    fn raw(&self) -> &Self::Repr;
}

impl<T: Repr> Operand for T {
    type Repr = T;
    type Policy = Transparent;

    #[inline]
    fn raw(&self) -> &T {
        self
    }
}

impl<T: Repr, P: Policy> Operand for Checked<T, P> {
    type Repr = T;
    type Policy = P;

    #[inline]
    fn raw(&self) -> &T {
        self.raw_value()
    }
}

// ============================================================================
// Conversion Matrix
// ============================================================================

/// Conversion of finite values from `S` to `T`, implemented once per pair of
/// families so that impls never overlap.
pub trait Conversion<T, S> {
    fn convert<P: Policy>(to: &mut T, from: &S, dir: RoundingDir) -> ResultCode;
}

/// `Self` can be assigned from a finite `S`.
pub trait ConvertFrom<S: Repr>: Repr {
    fn convert_from<P: Policy>(to: &mut Self, from: &S, dir: RoundingDir) -> ResultCode;
}

impl<T: Repr, S: Repr> ConvertFrom<S> for T
where
    (T::Family, S::Family): Conversion<T, S>,
{
    #[inline]
    fn convert_from<P: Policy>(to: &mut T, from: &S, dir: RoundingDir) -> ResultCode {
        <(T::Family, S::Family) as Conversion<T, S>>::convert::<P>(to, from, dir)
    }
}
