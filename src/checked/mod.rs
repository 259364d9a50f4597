// ============================================================================
// Checked Module
// The public wrapper: a raw value under a compile-time policy
// ============================================================================
//
// This module provides:
// - Checked<T, P>: constructors, accessors, predicates and checked_* methods
// - operators and comparisons against native values and other policies
// - free *_assign_r functions returning the raw ResultCode
// - text (Display / FromStr / serde) and the rust_decimal bridge
//
// Design principles:
// - Zero-cost: #[repr(transparent)] over the raw value, the policy is a type
// - Named methods propagate errors, std operators panic with the error message
// - A failed operation never leaves a half-written value behind

mod decimal;
mod functions;
mod ops;
mod text;

pub use functions::*;

use crate::dispatch;
use crate::policy::{check_result, CheckOverflow, Policy, Transparent};
use crate::repr::{ConvertFrom, Operand, Repr};
use crate::result::{CheckedResult, ResultClass, ResultCode, RoundingDir};
use std::marker::PhantomData;

/// A value of representation `T` whose every operation is checked under
/// policy `P`.
///
/// # Example
/// ```
/// use checked_number::prelude::*;
///
/// let a = Checked::<i8>::new(100);
/// assert!(a.checked_add(&a).is_err());
///
/// let b = Checked::<i8, Saturating>::new(100);
/// assert_eq!(b.checked_add(&b).unwrap(), 127i8);
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Checked<T, P = CheckOverflow> {
    v: T,
    policy: PhantomData<P>,
}

impl<T: Repr, P: Policy> Checked<T, P> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a raw value without any check.
    ///
    /// The caller guarantees `v` is a legal encoding under `P`.
    #[inline]
    pub const fn from_raw(v: T) -> Self {
        Self {
            v,
            policy: PhantomData,
        }
    }

    /// Wrap a native value, range-checked under `P`.
    ///
    /// # Panics
    /// When `P` rejects the value.
    pub fn new(value: T) -> Self {
        Self::try_new(value).unwrap_or_else(|err| panic!("checked construction failed: {err}"))
    }

    pub fn try_new(value: T) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_CONSTRUCTOR, |to, dir| {
            dispatch::assign::<T, P, Transparent>(to, &value, dir)
        })
    }

    /// Convert from any operand, rounding per the policy default.
    pub fn try_convert<S>(from: &S) -> CheckedResult<Self>
    where
        S: Operand,
        T: ConvertFrom<S::Repr>,
    {
        Self::convert_with(from, P::ROUND_DEFAULT_CONSTRUCTOR)
    }

    pub fn convert_with<S>(from: &S, dir: RoundingDir) -> CheckedResult<Self>
    where
        S: Operand,
        T: ConvertFrom<S::Repr>,
    {
        Self::compute(dir, |to, dir| {
            dispatch::convert::<T, S::Repr, P, S::Policy>(to, from.raw(), dir)
        })
    }

    /// # Panics
    /// When `P` rejects the converted value.
    pub fn convert<S>(from: &S) -> Self
    where
        S: Operand,
        T: ConvertFrom<S::Repr>,
    {
        Self::try_convert(from).unwrap_or_else(|err| panic!("checked conversion failed: {err}"))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_raw(T::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_raw(T::one())
    }

    /// Only available when `P` has a NaN.
    pub fn nan() -> Self {
        const { assert!(P::HAS_NAN, "policy has no NaN") };
        Self::special(ResultClass::NotANumber)
    }

    /// Only available when `P` has infinities.
    pub fn plus_infinity() -> Self {
        const { assert!(P::HAS_INFINITY, "policy has no infinities") };
        Self::special(ResultClass::PlusInfinity)
    }

    /// Only available when `P` has infinities.
    pub fn minus_infinity() -> Self {
        const { assert!(P::HAS_INFINITY, "policy has no infinities") };
        Self::special(ResultClass::MinusInfinity)
    }

    fn special(class: ResultClass) -> Self {
        let mut v = T::zero();
        T::assign_special::<P>(&mut v, class, RoundingDir::IGNORE);
        Self::from_raw(v)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn raw_value(&self) -> &T {
        &self.v
    }

    /// Mutable access to the raw value; the caller must not store a value
    /// that collides with a sentinel of `P`.
    #[inline]
    pub fn raw_value_mut(&mut self) -> &mut T {
        &mut self.v
    }

    #[inline]
    pub fn into_raw(self) -> T {
        self.v
    }

    /// The value as a plain number. Only available when `P` is convertible,
    /// that is when the raw value never holds a sentinel.
    #[inline]
    pub fn value(&self) -> &T {
        const { assert!(P::CONVERTIBLE, "policy values may hold sentinels, use raw_value") };
        &self.v
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// Describe the requested aspects of the value: `V_NAN`, an exact
    /// infinity, or the relation of the value to zero (`V_LT` for a negative
    /// value). Aspects not requested are reported as `V_LGE`.
    pub fn classify(&self, nan: bool, inf: bool, sign: bool) -> ResultCode {
        match dispatch::classify::<T, P>(&self.v) {
            ResultClass::NotANumber if nan => ResultCode::V_NAN,
            ResultClass::MinusInfinity if inf => ResultCode::V_EQ_MINUS_INFINITY,
            ResultClass::PlusInfinity if inf => ResultCode::V_EQ_PLUS_INFINITY,
            _ if sign => match self.sgn() {
                -1 => ResultCode::V_LT,
                0 => ResultCode::V_EQ,
                _ => ResultCode::V_GT,
            },
            _ => ResultCode::V_LGE,
        }
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        dispatch::classify::<T, P>(&self.v) == ResultClass::NotANumber
    }

    #[inline]
    pub fn is_plus_infinity(&self) -> bool {
        dispatch::classify::<T, P>(&self.v) == ResultClass::PlusInfinity
    }

    #[inline]
    pub fn is_minus_infinity(&self) -> bool {
        dispatch::classify::<T, P>(&self.v) == ResultClass::MinusInfinity
    }

    /// -1 for minus infinity, 1 for plus infinity, 0 otherwise.
    #[inline]
    pub fn is_infinity(&self) -> i32 {
        match dispatch::classify::<T, P>(&self.v) {
            ResultClass::MinusInfinity => -1,
            ResultClass::PlusInfinity => 1,
            _ => 0,
        }
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        dispatch::is_integer::<T, P>(&self.v)
    }

    /// -1, 0 or 1; NaN counts as 0.
    #[inline]
    pub fn sgn(&self) -> i32 {
        dispatch::sgn::<T, P>(&self.v)
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Run one primitive into a fresh value and let `P` judge the outcome.
    #[inline]
    fn compute(dir: RoundingDir, f: impl FnOnce(&mut T, RoundingDir) -> ResultCode) -> CheckedResult<Self> {
        let mut to = T::zero();
        let r = f(&mut to, dir);
        check_result::<P>(r, dir)?;
        Ok(Self::from_raw(to))
    }

    pub fn checked_add<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_OPERATOR, |to, dir| {
            dispatch::add::<T, P, P, R::Policy>(to, &self.v, rhs.raw(), dir)
        })
    }

    pub fn checked_sub<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_OPERATOR, |to, dir| {
            dispatch::sub::<T, P, P, R::Policy>(to, &self.v, rhs.raw(), dir)
        })
    }

    pub fn checked_mul<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_OPERATOR, |to, dir| {
            dispatch::mul::<T, P, P, R::Policy>(to, &self.v, rhs.raw(), dir)
        })
    }

    /// Division; integers truncate unless the policy rounds otherwise.
    pub fn checked_div<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_OPERATOR, |to, dir| {
            dispatch::div::<T, P, P, R::Policy>(to, &self.v, rhs.raw(), dir)
        })
    }

    /// Division asserted to be exact; fails with `RoundingNotNeeded` when it
    /// is not.
    pub fn exact_div<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<Self> {
        Self::compute(RoundingDir::NOT_NEEDED, |to, dir| {
            dispatch::div::<T, P, P, R::Policy>(to, &self.v, rhs.raw(), dir)
        })
    }

    /// Quotient truncated toward zero.
    pub fn checked_idiv<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| {
            dispatch::idiv::<T, P, P, R::Policy>(to, &self.v, rhs.raw(), dir)
        })
    }

    /// Remainder with the sign of `self`.
    pub fn checked_rem<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_OPERATOR, |to, dir| {
            dispatch::rem::<T, P, P, R::Policy>(to, &self.v, rhs.raw(), dir)
        })
    }

    pub fn checked_neg(&self) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_OPERATOR, |to, dir| dispatch::neg::<T, P, P>(to, &self.v, dir))
    }

    pub fn checked_abs(&self) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| dispatch::abs::<T, P, P>(to, &self.v, dir))
    }

    pub fn checked_floor(&self) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| dispatch::floor::<T, P, P>(to, &self.v, dir))
    }

    pub fn checked_ceil(&self) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| dispatch::ceil::<T, P, P>(to, &self.v, dir))
    }

    pub fn checked_trunc(&self) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| dispatch::trunc::<T, P, P>(to, &self.v, dir))
    }

    pub fn checked_sqrt(&self) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| dispatch::sqrt::<T, P, P>(to, &self.v, dir))
    }

    pub fn checked_mul_2exp(&self, exp: u32) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| {
            dispatch::mul_2exp::<T, P, P>(to, &self.v, exp, dir)
        })
    }

    pub fn checked_div_2exp(&self, exp: u32) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| {
            dispatch::div_2exp::<T, P, P>(to, &self.v, exp, dir)
        })
    }

    pub fn checked_add_2exp(&self, exp: u32) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| {
            dispatch::add_2exp::<T, P, P>(to, &self.v, exp, dir)
        })
    }

    pub fn checked_sub_2exp(&self, exp: u32) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| {
            dispatch::sub_2exp::<T, P, P>(to, &self.v, exp, dir)
        })
    }

    /// Representative modulo `2^exp` in `[-2^(exp-1), 2^(exp-1))`.
    pub fn checked_smod_2exp(&self, exp: u32) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| {
            dispatch::smod_2exp::<T, P, P>(to, &self.v, exp, dir)
        })
    }

    /// Representative modulo `2^exp` in `[0, 2^exp)`.
    pub fn checked_umod_2exp(&self, exp: u32) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| {
            dispatch::umod_2exp::<T, P, P>(to, &self.v, exp, dir)
        })
    }

    pub fn checked_gcd<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| {
            dispatch::gcd::<T, P, P, R::Policy>(to, &self.v, rhs.raw(), dir)
        })
    }

    pub fn checked_lcm<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<Self> {
        Self::compute(P::ROUND_DEFAULT_FUNCTION, |to, dir| {
            dispatch::lcm::<T, P, P, R::Policy>(to, &self.v, rhs.raw(), dir)
        })
    }

    /// `(g, s, t)` with `g = gcd(self, rhs)` and `s * self + t * rhs == g`.
    pub fn checked_gcdext<R: Operand<Repr = T>>(&self, rhs: &R) -> CheckedResult<(Self, Self, Self)> {
        let dir = P::ROUND_DEFAULT_FUNCTION;
        let (mut g, mut s, mut t) = (T::zero(), T::zero(), T::zero());
        let r = dispatch::gcdext::<T, P, P, R::Policy>(&mut g, &mut s, &mut t, &self.v, rhs.raw(), dir);
        check_result::<P>(r, dir)?;
        Ok((Self::from_raw(g), Self::from_raw(s), Self::from_raw(t)))
    }

    /// `self += x * y`; `self` is unchanged on error.
    pub fn add_mul<X, Y>(&mut self, x: &X, y: &Y) -> CheckedResult<()>
    where
        X: Operand<Repr = T>,
        Y: Operand<Repr = T>,
    {
        self.accumulate(|acc, dir| dispatch::add_mul::<T, P, X::Policy, Y::Policy>(acc, x.raw(), y.raw(), dir))
    }

    /// `self -= x * y`; `self` is unchanged on error.
    pub fn sub_mul<X, Y>(&mut self, x: &X, y: &Y) -> CheckedResult<()>
    where
        X: Operand<Repr = T>,
        Y: Operand<Repr = T>,
    {
        self.accumulate(|acc, dir| dispatch::sub_mul::<T, P, X::Policy, Y::Policy>(acc, x.raw(), y.raw(), dir))
    }

    fn accumulate(&mut self, f: impl FnOnce(&mut T, RoundingDir) -> ResultCode) -> CheckedResult<()> {
        let dir = P::ROUND_DEFAULT_FUNCTION;
        let mut acc = self.v.clone();
        let r = f(&mut acc, dir);
        check_result::<P>(r, dir)?;
        self.v = acc;
        Ok(())
    }

    /// `self += 1`
    pub fn inc(&mut self) -> CheckedResult<()> {
        *self = self.checked_add(&T::one())?;
        Ok(())
    }

    /// `self -= 1`
    pub fn dec(&mut self) -> CheckedResult<()> {
        *self = self.checked_sub(&T::one())?;
        Ok(())
    }
}

impl<T: Repr, P: Policy> Default for Checked<T, P> {
    /// Zero, always exact.
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Repr, P: Policy> From<T> for Checked<T, P> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
