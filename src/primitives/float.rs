// ============================================================================
// Floating Primitives
// Native floating arithmetic with exact relations
// ============================================================================
//
// The hardware result is always the round-to-nearest one. Its relation to the
// exact value is recovered with error-free transformations (TwoSum and fused
// multiply-add residuals), or with exact rational arithmetic when the
// residual itself could underflow. A directed rounding then nudges the result
// one ulp.

use super::rational::{gcd_q, gcdext_q, lcm_q};
use crate::fpu::FloatContext;
use crate::io::{output::write_rational, NumericFormat};
use crate::policy::Policy;
use crate::repr::{FloatFamily, NativeFloat, Repr};
use crate::result::{Relation, ResultClass, ResultCode, RoundingDir};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Exponents beyond this leave every float range behind; larger ones are
/// clamped before building `2^exp` exactly.
const RATIONAL_EXP_LIMIT: u32 = 2200;

// ============================================================================
// Relation Bookkeeping
// ============================================================================

#[inline]
fn wants_relation<P: Policy>(dir: RoundingDir) -> bool {
    P::FPU_CHECK_INEXACT || dir.fpu_check_inexact() || !dir.round_ignore()
}

#[inline]
fn nan_result<P: Policy>() -> ResultCode {
    if P::FPU_CHECK_NAN_RESULT {
        ResultCode::V_NAN
    } else {
        ResultCode::V_LGE
    }
}

#[inline]
fn code_of(exact: Ordering) -> ResultCode {
    match exact {
        Ordering::Less => ResultCode::V_LT,
        Ordering::Equal => ResultCode::V_EQ,
        Ordering::Greater => ResultCode::V_GT,
    }
}

/// Ordering of `exact - r` given that difference as a float.
#[inline]
fn order_of<T: NativeFloat>(err: T) -> Ordering {
    if err > T::zero() {
        Ordering::Greater
    } else if err < T::zero() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Exact value of a finite float.
#[inline]
pub(crate) fn exact<T: NativeFloat>(x: T) -> BigRational {
    BigRational::from_float(x.to_f64_exact()).unwrap_or_else(BigRational::zero)
}

#[inline]
fn exact_order<T: NativeFloat>(exact_value: &BigRational, r: T) -> Ordering {
    exact_value.cmp(&exact(r))
}

/// Large enough that fused residuals computed from it cannot underflow.
#[inline]
fn residual_safe<T: NativeFloat>(v: T) -> bool {
    v.abs() >= T::min_positive_value() * T::pow2(T::MANTISSA_DIGITS as i32 + 1)
}

fn pow2_rational(exp: u32) -> BigRational {
    BigRational::from_integer(BigInt::one() << exp.min(RATIONAL_EXP_LIMIT))
}

// ============================================================================
// Range Handling
// ============================================================================

pub(crate) fn set_pos_overflow<P: Policy, T: NativeFloat>(to: &mut T, dir: RoundingDir) -> ResultCode {
    FloatContext::raise_inexact();
    if !P::CHECK_OVERFLOW {
        *to = T::infinity();
        ResultCode::V_LT_PLUS_INFINITY
    } else if dir.round_down() {
        *to = T::max_value();
        ResultCode::V_GT_SUP
    } else if P::HAS_INFINITY {
        *to = T::infinity();
        ResultCode::V_LT_PLUS_INFINITY
    } else {
        *to = T::max_value();
        ResultCode::V_GT_SUP.unrepresentable()
    }
}

pub(crate) fn set_neg_overflow<P: Policy, T: NativeFloat>(to: &mut T, dir: RoundingDir) -> ResultCode {
    FloatContext::raise_inexact();
    if !P::CHECK_OVERFLOW {
        *to = T::neg_infinity();
        ResultCode::V_GT_MINUS_INFINITY
    } else if dir.round_up() {
        *to = T::min_value();
        ResultCode::V_LT_INF
    } else if P::HAS_INFINITY {
        *to = T::neg_infinity();
        ResultCode::V_GT_MINUS_INFINITY
    } else {
        *to = T::min_value();
        ResultCode::V_LT_INF.unrepresentable()
    }
}

fn overflow_by_sign<P: Policy, T: NativeFloat>(to: &mut T, v: T, dir: RoundingDir) -> ResultCode {
    if v > T::zero() {
        set_pos_overflow::<P, T>(to, dir)
    } else {
        set_neg_overflow::<P, T>(to, dir)
    }
}

/// Store a value computed from operands that were not all finite.
fn pass_through<P: Policy, T: NativeFloat>(to: &mut T, v: T) -> ResultCode {
    *to = v;
    if v.is_nan() {
        nan_result::<P>()
    } else if v.is_infinite() {
        if v > T::zero() {
            ResultCode::V_EQ_PLUS_INFINITY
        } else {
            ResultCode::V_EQ_MINUS_INFINITY
        }
    } else {
        ResultCode::V_EQ
    }
}

/// Apply the rounding direction to the nearest result `r`.
fn resolve<P: Policy, T: NativeFloat>(to: &mut T, r: T, exact: Ordering, dir: RoundingDir) -> ResultCode {
    let (nudged, code) = match exact {
        Ordering::Equal => {
            *to = r;
            return ResultCode::V_EQ;
        }
        Ordering::Less if dir.round_down() => (NativeFloat::next_down(r), ResultCode::V_GT),
        Ordering::Greater if dir.round_up() => (NativeFloat::next_up(r), ResultCode::V_LT),
        inexact => (r, code_of(inexact)),
    };
    FloatContext::raise_inexact();
    if nudged.is_infinite() {
        return overflow_by_sign::<P, T>(to, nudged, dir);
    }
    *to = nudged;
    code
}

/// Common tail of every natively computed operation.
pub(crate) fn finish<P: Policy, T: NativeFloat>(
    to: &mut T,
    r: T,
    finite_inputs: bool,
    dir: RoundingDir,
    exact: impl FnOnce() -> Ordering,
) -> ResultCode {
    if !finite_inputs {
        return pass_through::<P, T>(to, r);
    }
    if r.is_nan() {
        *to = r;
        return nan_result::<P>();
    }
    if r.is_infinite() {
        return overflow_by_sign::<P, T>(to, r, dir);
    }
    if !wants_relation::<P>(dir) {
        *to = r;
        return ResultCode::V_LGE;
    }
    resolve::<P, T>(to, r, exact(), dir)
}

// ============================================================================
// Exact Rational to Float
// ============================================================================

enum Rounded<T> {
    Value(T, Ordering),
    PosOverflow,
    NegOverflow,
}

/// Round `q` to the nearest float in `dir`, exactly.
///
/// With `2^e <= |q| < 2^(e+1)` the significand is `floor(|q| * 2^s)` where
/// `s = min(p - 1 - e, SUBNORMAL_SHIFT)`; the remainder decides the rounding.
fn round_rational<T: NativeFloat>(q: &BigRational, dir: RoundingDir) -> Rounded<T> {
    if q.is_zero() {
        return Rounded::Value(T::zero(), Ordering::Equal);
    }
    let negative = q.is_negative();
    let n = q.numer().abs();
    let d = q.denom().clone();

    let mut e = n.bits() as i64 - d.bits() as i64;
    let below = if e >= 0 { n < (&d << e as usize) } else { (&n << (-e) as usize) < d };
    if below {
        e -= 1;
    }
    if e > T::MAX_EXP as i64 - 1 {
        return if negative { Rounded::NegOverflow } else { Rounded::PosOverflow };
    }

    let s = (T::MANTISSA_DIGITS as i64 - 1 - e).min(T::SUBNORMAL_SHIFT as i64);
    let (scaled_n, scaled_d) = if s >= 0 {
        (n << s as usize, d)
    } else {
        (n, d << (-s) as usize)
    };
    let (mut m, rem) = scaled_n.div_rem(&scaled_d);

    let increment = if rem.is_zero() {
        false
    } else if dir.round_up() {
        !negative
    } else if dir.round_down() {
        negative
    } else {
        match (&rem << 1usize).cmp(&scaled_d) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => m.is_odd(),
        }
    };
    let exact = if rem.is_zero() {
        Ordering::Equal
    } else if increment != negative {
        Ordering::Less
    } else {
        Ordering::Greater
    };
    if increment {
        m += 1u32;
    }

    // m has at most p + 1 bits: exact in the target type
    let Some(m) = m.to_i128() else {
        return if negative { Rounded::NegOverflow } else { Rounded::PosOverflow };
    };
    let half = (s / 2) as i32;
    let rest = (s - s / 2) as i32;
    let magnitude = T::from_i128_nearest(m) * T::pow2(-half) * T::pow2(-rest);
    if magnitude.is_infinite() {
        return if negative { Rounded::NegOverflow } else { Rounded::PosOverflow };
    }
    Rounded::Value(if negative { -magnitude } else { magnitude }, exact)
}

pub(crate) fn from_rational<P: Policy, T: NativeFloat>(
    to: &mut T,
    q: &BigRational,
    dir: RoundingDir,
) -> ResultCode {
    match round_rational::<T>(q, dir) {
        Rounded::Value(v, exact) => {
            if exact != Ordering::Equal {
                FloatContext::raise_inexact();
            }
            *to = v;
            code_of(exact)
        }
        Rounded::PosOverflow => set_pos_overflow::<P, T>(to, dir),
        Rounded::NegOverflow => set_neg_overflow::<P, T>(to, dir),
    }
}

// ============================================================================
// Classification
// ============================================================================

#[inline]
pub(crate) fn is_nan<P: Policy, T: NativeFloat>(x: T) -> bool {
    P::HAS_NAN && x.is_nan()
}

#[inline]
pub(crate) fn is_inf<P: Policy, T: NativeFloat>(x: T) -> i32 {
    if !P::HAS_INFINITY || !x.is_infinite() {
        0
    } else if x > T::zero() {
        1
    } else {
        -1
    }
}

pub(crate) fn native_class<T: NativeFloat>(x: T) -> ResultClass {
    if x.is_nan() {
        ResultClass::NotANumber
    } else if x == T::infinity() {
        ResultClass::PlusInfinity
    } else if x == T::neg_infinity() {
        ResultClass::MinusInfinity
    } else {
        ResultClass::Normal
    }
}

#[inline]
pub(crate) fn sgn<T: NativeFloat>(x: T) -> i32 {
    if x > T::zero() {
        1
    } else if x < T::zero() {
        -1
    } else {
        0
    }
}

pub(crate) fn assign_special<P: Policy, T: NativeFloat>(
    to: &mut T,
    class: ResultClass,
    dir: RoundingDir,
) -> ResultCode {
    let native_infinity = P::HAS_INFINITY || !P::CHECK_OVERFLOW;
    match class {
        ResultClass::Normal => ResultCode::V_EQ,
        ResultClass::NotANumber => {
            *to = T::nan();
            ResultCode::V_NAN
        }
        ResultClass::MinusInfinity if native_infinity => {
            *to = T::neg_infinity();
            ResultCode::V_EQ_MINUS_INFINITY
        }
        ResultClass::PlusInfinity if native_infinity => {
            *to = T::infinity();
            ResultCode::V_EQ_PLUS_INFINITY
        }
        ResultClass::MinusInfinity => {
            *to = T::min_value();
            if dir.round_up() {
                ResultCode::V_LT_INF
            } else {
                ResultCode::V_EQ_MINUS_INFINITY.unrepresentable()
            }
        }
        ResultClass::PlusInfinity => {
            *to = T::max_value();
            if dir.round_down() {
                ResultCode::V_GT_SUP
            } else {
                ResultCode::V_EQ_PLUS_INFINITY.unrepresentable()
            }
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

pub(crate) fn assign<P: Policy, T: NativeFloat>(to: &mut T, x: T) -> ResultCode {
    if x.is_finite() {
        *to = x;
        ResultCode::V_EQ
    } else {
        pass_through::<P, T>(to, x)
    }
}

/// TwoSum: the exact rounding error `(x + y) - s` of `s = x + y`.
#[inline]
fn two_sum_error<T: NativeFloat>(x: T, y: T, s: T) -> T {
    let yy = s - x;
    let xx = s - yy;
    (x - xx) + (y - yy)
}

pub(crate) fn add<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    let r = x + y;
    let finite = x.is_finite() && y.is_finite();
    finish::<P, T>(to, r, finite, dir, || order_of(two_sum_error(x, y, r)))
}

pub(crate) fn sub<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    let r = x - y;
    let finite = x.is_finite() && y.is_finite();
    finish::<P, T>(to, r, finite, dir, || order_of(two_sum_error(x, -y, r)))
}

pub(crate) fn mul<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    let r = x * y;
    let finite = x.is_finite() && y.is_finite();
    finish::<P, T>(to, r, finite, dir, || {
        if x.is_zero() || y.is_zero() {
            Ordering::Equal
        } else if residual_safe(r) {
            order_of(x.mul_add(y, -r))
        } else {
            exact_order(&(exact(x) * exact(y)), r)
        }
    })
}

pub(crate) fn div<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if y.is_zero() && x.is_finite() {
        if P::CHECK_DIV_ZERO {
            return ResultCode::V_DIV_ZERO;
        }
        return pass_through::<P, T>(to, x / y);
    }
    let r = x / y;
    let finite = x.is_finite() && y.is_finite();
    finish::<P, T>(to, r, finite, dir, || {
        if x.is_zero() {
            Ordering::Equal
        } else if residual_safe(x) && residual_safe(r) {
            // exact - r == (x - r * y) / y
            let residual = order_of((-r).mul_add(y, x));
            if y < T::zero() {
                residual.reverse()
            } else {
                residual
            }
        } else {
            exact_order(&(exact(x) / exact(y)), r)
        }
    })
}

pub(crate) fn idiv<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    if y.is_zero() {
        if P::CHECK_DIV_ZERO {
            return ResultCode::V_DIV_ZERO;
        }
        return pass_through::<P, T>(to, (x / y).trunc());
    }
    if !x.is_finite() || !y.is_finite() {
        return pass_through::<P, T>(to, (x / y).trunc());
    }
    from_rational::<P, T>(to, &(exact(x) / exact(y)).trunc(), dir)
}

pub(crate) fn rem<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T) -> ResultCode {
    if y.is_zero() {
        if P::CHECK_DIV_ZERO {
            return ResultCode::V_MOD_ZERO;
        }
        return pass_through::<P, T>(to, x % y);
    }
    // fmod is always exact
    let r = x % y;
    if x.is_finite() && y.is_finite() {
        *to = r;
        ResultCode::V_EQ
    } else {
        pass_through::<P, T>(to, r)
    }
}

pub(crate) fn sqrt<P: Policy, T: NativeFloat>(to: &mut T, x: T, dir: RoundingDir) -> ResultCode {
    if x < T::zero() {
        return ResultCode::V_SQRT_NEG;
    }
    let r = x.sqrt();
    finish::<P, T>(to, r, x.is_finite(), dir, || {
        if x.is_zero() {
            Ordering::Equal
        } else if residual_safe(x) {
            order_of((-r).mul_add(r, x))
        } else {
            let root = exact(r);
            exact(x).cmp(&(&root * &root))
        }
    })
}

// ============================================================================
// Rational-Path Operations
// ============================================================================

fn via_rational<P: Policy, T: NativeFloat>(
    to: &mut T,
    finite_inputs: bool,
    native: impl FnOnce() -> T,
    exact_value: impl FnOnce() -> BigRational,
    dir: RoundingDir,
) -> ResultCode {
    if !finite_inputs {
        return pass_through::<P, T>(to, native());
    }
    from_rational::<P, T>(to, &exact_value(), dir)
}

pub(crate) fn mul_2exp<P: Policy, T: NativeFloat>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    via_rational::<P, T>(to, x.is_finite(), || x, || exact(x) * pow2_rational(exp), dir)
}

pub(crate) fn div_2exp<P: Policy, T: NativeFloat>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    via_rational::<P, T>(to, x.is_finite(), || x, || exact(x) / pow2_rational(exp), dir)
}

pub(crate) fn add_2exp<P: Policy, T: NativeFloat>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    via_rational::<P, T>(to, x.is_finite(), || x, || exact(x) + pow2_rational(exp), dir)
}

pub(crate) fn sub_2exp<P: Policy, T: NativeFloat>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    via_rational::<P, T>(to, x.is_finite(), || x, || exact(x) - pow2_rational(exp), dir)
}

/// `x mod 2^exp` in `[0, 2^exp)`.
fn umod_q(x: &BigRational, exp: u32) -> BigRational {
    let m = pow2_rational(exp);
    x - (x / &m).floor() * &m
}

pub(crate) fn smod_2exp<P: Policy, T: NativeFloat>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    if exp > RATIONAL_EXP_LIMIT {
        return assign::<P, T>(to, x);
    }
    via_rational::<P, T>(
        to,
        x.is_finite(),
        || x,
        || {
            let r = umod_q(&exact(x), exp);
            let m = pow2_rational(exp);
            if r.clone() * BigRational::from_integer(BigInt::from(2)) >= m {
                r - m
            } else {
                r
            }
        },
        dir,
    )
}

pub(crate) fn umod_2exp<P: Policy, T: NativeFloat>(to: &mut T, x: T, exp: u32, dir: RoundingDir) -> ResultCode {
    if exp > RATIONAL_EXP_LIMIT {
        if x < T::zero() {
            return set_pos_overflow::<P, T>(to, dir);
        }
        return assign::<P, T>(to, x);
    }
    via_rational::<P, T>(to, x.is_finite(), || x, || umod_q(&exact(x), exp), dir)
}

pub(crate) fn add_mul<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    let acc = *to;
    let finite = acc.is_finite() && x.is_finite() && y.is_finite();
    via_rational::<P, T>(to, finite, || x.mul_add(y, acc), || exact(acc) + exact(x) * exact(y), dir)
}

pub(crate) fn sub_mul<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    let acc = *to;
    let finite = acc.is_finite() && x.is_finite() && y.is_finite();
    via_rational::<P, T>(to, finite, || (-x).mul_add(y, acc), || exact(acc) - exact(x) * exact(y), dir)
}

pub(crate) fn gcd<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    let finite = x.is_finite() && y.is_finite();
    via_rational::<P, T>(to, finite, T::nan, || gcd_q(&exact(x), &exact(y)), dir)
}

pub(crate) fn lcm<P: Policy, T: NativeFloat>(to: &mut T, x: T, y: T, dir: RoundingDir) -> ResultCode {
    let finite = x.is_finite() && y.is_finite();
    via_rational::<P, T>(to, finite, T::nan, || lcm_q(&exact(x), &exact(y)), dir)
}

pub(crate) fn gcdext<P: Policy, T: NativeFloat>(
    g: &mut T,
    s: &mut T,
    t: &mut T,
    x: T,
    y: T,
    dir: RoundingDir,
) -> ResultCode {
    if !x.is_finite() || !y.is_finite() {
        *s = T::nan();
        *t = T::nan();
        return pass_through::<P, T>(g, T::nan());
    }
    let (qg, qs, qt) = gcdext_q(&exact(x), &exact(y));
    let r = from_rational::<P, T>(g, &qg, dir);
    if !r.is_exact() {
        return r;
    }
    let r = from_rational::<P, T>(s, &qs, dir);
    if !r.is_exact() {
        return r;
    }
    from_rational::<P, T>(t, &qt, dir)
}

// ============================================================================
// Literals
// ============================================================================

pub(crate) fn write_literal<T: NativeFloat, W: fmt::Write>(
    x: T,
    format: &NumericFormat,
    out: &mut W,
) -> Result<Relation, fmt::Error> {
    if format.base() != 10 {
        write_rational(out, &exact(x), format)?;
        return Ok(Relation::EQ);
    }
    // shortest text that reads back as `x`; it need not equal `x` exactly
    let text = x.to_string();
    if format.show_plus() && x.is_sign_positive() {
        out.write_char('+')?;
    }
    out.write_str(&text)?;
    let relation = match crate::io::input::parse_rational(&text) {
        Some(value) => match exact(x).cmp(&value) {
            Ordering::Less => Relation::LT,
            Ordering::Equal => Relation::EQ,
            Ordering::Greater => Relation::GT,
        },
        None => Relation::LGE,
    };
    Ok(relation)
}

// ============================================================================
// Repr Implementations
// ============================================================================

macro_rules! float_repr {
    ($($t:ty),*) => {$(
        impl Repr for $t {
            type Family = FloatFamily;
            const NAME: &'static str = stringify!($t);
            const IS_INTEGER: bool = false;

            #[inline]
            fn is_nan<P: Policy>(x: &Self) -> bool {
                is_nan::<P, Self>(*x)
            }

            #[inline]
            fn is_inf<P: Policy>(x: &Self) -> i32 {
                is_inf::<P, Self>(*x)
            }

            #[inline]
            fn native_class(x: &Self) -> ResultClass {
                native_class(*x)
            }

            #[inline]
            fn sgn(x: &Self) -> i32 {
                sgn(*x)
            }

            #[inline]
            fn is_integer(x: &Self) -> bool {
                x.is_finite() && x.fract() == 0.0
            }

            fn assign_special<P: Policy>(to: &mut Self, class: ResultClass, dir: RoundingDir) -> ResultCode {
                assign_special::<P, Self>(to, class, dir)
            }

            fn assign<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
                assign::<P, Self>(to, *x)
            }

            fn neg<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
                assign::<P, Self>(to, -*x)
            }

            fn abs<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
                assign::<P, Self>(to, x.abs())
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

            fn rem<P: Policy>(to: &mut Self, x: &Self, y: &Self, _dir: RoundingDir) -> ResultCode {
                rem::<P, Self>(to, *x, *y)
            }

            fn floor<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
                assign::<P, Self>(to, x.floor())
            }

            fn ceil<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
                assign::<P, Self>(to, x.ceil())
            }

            fn trunc<P: Policy>(to: &mut Self, x: &Self, _dir: RoundingDir) -> ResultCode {
                assign::<P, Self>(to, x.trunc())
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
                x.partial_cmp(y)
            }

            fn to_rational(x: &Self) -> Option<BigRational> {
                BigRational::from_float(*x as f64)
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

float_repr!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CheckOverflow, Extended, Transparent};

    #[test]
    fn test_exact_add() {
        let mut to = 0.0f64;
        assert_eq!(add::<Extended, f64>(&mut to, 1.5, 2.25, RoundingDir::UP), ResultCode::V_EQ);
        assert_eq!(to, 3.75);
    }

    #[test]
    fn test_directed_add() {
        let mut up = 0.0f64;
        let mut down = 0.0f64;
        assert_eq!(add::<Extended, f64>(&mut up, 1.0, 1e-30, RoundingDir::UP), ResultCode::V_LT);
        assert_eq!(add::<Extended, f64>(&mut down, 1.0, 1e-30, RoundingDir::DOWN), ResultCode::V_GT);
        assert_eq!(down, 1.0);
        assert_eq!(up, NativeFloat::next_up(1.0f64));
    }

    #[test]
    fn test_directed_division_brackets_exact() {
        let mut lo = 0.0f64;
        let mut hi = 0.0f64;
        div::<Extended, f64>(&mut lo, 1.0, 3.0, RoundingDir::DOWN);
        div::<Extended, f64>(&mut hi, 1.0, 3.0, RoundingDir::UP);
        let third = BigRational::new(BigInt::from(1), BigInt::from(3));
        assert!(exact(lo) < third);
        assert!(exact(hi) > third);
        assert_eq!(NativeFloat::next_up(lo), hi);
    }

    #[test]
    fn test_mul_relation_with_negative_divisor() {
        let mut to = 0.0f64;
        let r = div::<Extended, f64>(&mut to, 1.0, -3.0, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT);
        assert!(exact(to) > BigRational::new(BigInt::from(-1), BigInt::from(3)));
    }

    #[test]
    fn test_subnormal_product_uses_exact_path() {
        let mut to = 0.0f64;
        let tiny = f64::MIN_POSITIVE;
        let r = mul::<Extended, f64>(&mut to, tiny, 0.3, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT);
        assert!(exact(to) > exact(tiny) * exact(0.3));
    }

    #[test]
    fn test_overflow() {
        let mut to = 0.0f64;
        let r = mul::<Extended, f64>(&mut to, f64::MAX, 2.0, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT_PLUS_INFINITY);
        assert_eq!(to, f64::INFINITY);

        let r = mul::<Extended, f64>(&mut to, f64::MAX, 2.0, RoundingDir::DOWN);
        assert_eq!(r, ResultCode::V_GT_SUP);
        assert_eq!(to, f64::MAX);

        let r = add::<CheckOverflow, f64>(&mut to, f64::MAX, f64::MAX, RoundingDir::IGNORE);
        assert!(r.is_overflow());
        assert_eq!(to, f64::MAX);
    }

    #[test]
    fn test_directed_rounding_past_max_overflows() {
        let mut to = 0.0f64;
        let r = add::<Extended, f64>(&mut to, f64::MAX, 1.0, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT_PLUS_INFINITY);
    }

    #[test]
    fn test_ignore_skips_relation() {
        let mut to = 0.0f64;
        assert_eq!(div::<CheckOverflow, f64>(&mut to, 1.0, 3.0, RoundingDir::IGNORE), ResultCode::V_LGE);
        assert_eq!(div::<Extended, f64>(&mut to, 1.0, 3.0, RoundingDir::IGNORE), ResultCode::V_GT);
    }

    #[test]
    fn test_division_by_zero() {
        let mut to = 1.0f64;
        assert_eq!(div::<CheckOverflow, f64>(&mut to, 1.0, 0.0, RoundingDir::IGNORE), ResultCode::V_DIV_ZERO);
        assert_eq!(to, 1.0);
        let r = div::<Transparent, f64>(&mut to, 1.0, 0.0, RoundingDir::IGNORE);
        assert_eq!(r, ResultCode::V_EQ_PLUS_INFINITY);
        assert_eq!(to, f64::INFINITY);
    }

    #[test]
    fn test_idiv_and_rem_by_zero() {
        let mut to = 1.0f64;
        assert_eq!(idiv::<CheckOverflow, f64>(&mut to, 1.0, 0.0, RoundingDir::IGNORE), ResultCode::V_DIV_ZERO);
        assert_eq!(rem::<CheckOverflow, f64>(&mut to, 1.0, 0.0), ResultCode::V_MOD_ZERO);
        assert_eq!(to, 1.0);

        // unchecked: the native quotient and remainder come through
        let r = idiv::<Transparent, f64>(&mut to, -3.0, 0.0, RoundingDir::IGNORE);
        assert_eq!(r, ResultCode::V_EQ_MINUS_INFINITY);
        assert_eq!(to, f64::NEG_INFINITY);
        rem::<Transparent, f64>(&mut to, 1.0, 0.0);
        assert!(to.is_nan());
    }

    #[test]
    fn test_sqrt_relation() {
        let mut to = 0.0f64;
        assert_eq!(sqrt::<Extended, f64>(&mut to, 16.0, RoundingDir::UP), ResultCode::V_EQ);
        assert_eq!(to, 4.0);
        let mut lo = 0.0f64;
        let mut hi = 0.0f64;
        sqrt::<Extended, f64>(&mut lo, 2.0, RoundingDir::DOWN);
        sqrt::<Extended, f64>(&mut hi, 2.0, RoundingDir::UP);
        assert!(lo < hi);
        assert!(exact(lo) * exact(lo) < exact(2.0));
        assert!(exact(hi) * exact(hi) > exact(2.0));
        assert_eq!(sqrt::<Extended, f64>(&mut to, -1.0, RoundingDir::UP), ResultCode::V_SQRT_NEG);
    }

    #[test]
    fn test_from_rational_nearest_even() {
        let mut to = 0.0f64;
        // 2^53 + 1 is a tie between 2^53 and 2^53 + 2
        let q = BigRational::from_integer((BigInt::one() << 53usize) + 1);
        let r = from_rational::<Extended, f64>(&mut to, &q, RoundingDir::IGNORE);
        assert_eq!(to, 9007199254740992.0);
        assert_eq!(r, ResultCode::V_GT);
        from_rational::<Extended, f64>(&mut to, &q, RoundingDir::UP);
        assert_eq!(to, 9007199254740994.0);
    }

    #[test]
    fn test_from_rational_subnormal() {
        let mut to = 0.0f64;
        let q = exact(f64::from_bits(1)) * BigRational::new(BigInt::from(3), BigInt::from(2));
        from_rational::<Extended, f64>(&mut to, &q, RoundingDir::DOWN);
        assert_eq!(to, f64::from_bits(1));
        from_rational::<Extended, f64>(&mut to, &q, RoundingDir::UP);
        assert_eq!(to, f64::from_bits(2));
        let tiny = BigRational::new(BigInt::one(), BigInt::one() << 1100usize);
        let r = from_rational::<Extended, f64>(&mut to, &tiny, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT);
        assert_eq!(to, f64::from_bits(1));
    }

    #[test]
    fn test_from_rational_f32() {
        let mut to = 0.0f32;
        let q = BigRational::new(BigInt::from(1), BigInt::from(10));
        from_rational::<Extended, f32>(&mut to, &q, RoundingDir::IGNORE);
        assert_eq!(to, 0.1f32);
        let huge = BigRational::from_integer(BigInt::one() << 200usize);
        let r = from_rational::<Extended, f32>(&mut to, &huge, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT_PLUS_INFINITY);
    }

    #[test]
    fn test_2exp_family() {
        let mut to = 0.0f64;
        mul_2exp::<Extended, f64>(&mut to, 3.0, 4, RoundingDir::UP);
        assert_eq!(to, 48.0);
        div_2exp::<Extended, f64>(&mut to, 3.0, 1, RoundingDir::UP);
        assert_eq!(to, 1.5);
        let r = mul_2exp::<Extended, f64>(&mut to, 1.0, 5000, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT_PLUS_INFINITY);
        umod_2exp::<Extended, f64>(&mut to, -1.5, 2, RoundingDir::UP);
        assert_eq!(to, 2.5);
        smod_2exp::<Extended, f64>(&mut to, 3.5, 2, RoundingDir::UP);
        assert_eq!(to, -0.5);
    }

    #[test]
    fn test_add_mul_is_fused() {
        let mut to = 1.0f64;
        let r = add_mul::<Extended, f64>(&mut to, 0.1, 10.0, RoundingDir::UP);
        assert_eq!(r, ResultCode::V_LT);
        assert!(exact(to) > exact(1.0) + exact(0.1) * exact(10.0));
    }

    #[test]
    fn test_rational_gcd_on_floats() {
        let mut to = 0.0f64;
        gcd::<Extended, f64>(&mut to, 1.5, 2.25, RoundingDir::UP);
        assert_eq!(to, 0.75);
        lcm::<Extended, f64>(&mut to, 1.5, 2.25, RoundingDir::UP);
        assert_eq!(to, 4.5);
    }

    #[test]
    fn test_inexact_flag() {
        let mut to = 0.0f64;
        let ((), inexact) = FloatContext::scoped(|| {
            add::<Extended, f64>(&mut to, 0.1, 0.2, RoundingDir::UP);
        });
        assert!(inexact);
        let ((), inexact) = FloatContext::scoped(|| {
            add::<Extended, f64>(&mut to, 0.5, 0.25, RoundingDir::UP);
        });
        assert!(!inexact);
    }

    #[test]
    fn test_literal_relation() {
        let mut out = String::new();
        let rel = write_literal(0.1f64, &NumericFormat::default(), &mut out).unwrap();
        assert_eq!(out, "0.1");
        assert_eq!(rel, Relation::GT);

        let mut out = String::new();
        let rel = write_literal(0.5f64, &NumericFormat::default(), &mut out).unwrap();
        assert_eq!(out, "0.5");
        assert_eq!(rel, Relation::EQ);
    }

    #[test]
    fn test_classification() {
        assert!(is_nan::<Extended, f64>(f64::NAN));
        assert!(!is_nan::<CheckOverflow, f64>(f64::NAN));
        assert_eq!(is_inf::<Extended, f64>(f64::NEG_INFINITY), -1);
        assert_eq!(is_inf::<CheckOverflow, f64>(f64::INFINITY), 0);
        assert_eq!(native_class(f32::INFINITY), ResultClass::PlusInfinity);
    }
}
