// ============================================================================
// Free Functions
// Result-returning and checked entry points over Checked destinations
// ============================================================================
//
// Every operation comes in two shapes:
// - `op_assign_r(to, .., dir) -> ResultCode` writes whatever the primitive
//   produced and returns the raw result, no policy involved
// - `op_assign(to, ..) -> CheckedResult<()>` rounds per the policy default,
//   lets the policy judge, and leaves `to` untouched on error

use super::Checked;
use crate::dispatch;
use crate::policy::{check_result, Policy};
use crate::repr::{ConvertFrom, Operand, Repr};
use crate::result::{CheckedResult, ResultCode, RoundingDir};
use std::cmp::Ordering;

/// Compute into a copy of `to` and store it only once `P` accepts the result.
fn commit<T: Repr, P: Policy>(
    to: &mut Checked<T, P>,
    dir: RoundingDir,
    f: impl FnOnce(&mut T, RoundingDir) -> ResultCode,
) -> CheckedResult<()> {
    let mut v = to.raw_value().clone();
    let r = f(&mut v, dir);
    check_result::<P>(r, dir)?;
    *to.raw_value_mut() = v;
    Ok(())
}

// ============================================================================
// Assignment
// ============================================================================

/// Convert any operand into `to`.
pub fn assign_r<T, P, X>(to: &mut Checked<T, P>, x: &X, dir: RoundingDir) -> ResultCode
where
    T: ConvertFrom<X::Repr>,
    P: Policy,
    X: Operand,
{
    dispatch::convert::<T, X::Repr, P, X::Policy>(to.raw_value_mut(), x.raw(), dir)
}

pub fn assign<T, P, X>(to: &mut Checked<T, P>, x: &X) -> CheckedResult<()>
where
    T: ConvertFrom<X::Repr>,
    P: Policy,
    X: Operand,
{
    commit(to, P::ROUND_DEFAULT_CONSTRUCTOR, |v, dir| {
        dispatch::convert::<T, X::Repr, P, X::Policy>(v, x.raw(), dir)
    })
}

// ============================================================================
// Generated Entry Points
// ============================================================================

macro_rules! unary_functions {
    ($($op:ident: $op_r:ident, $op_assign:ident;)*) => {$(
        pub fn $op_r<T, P, X>(to: &mut Checked<T, P>, x: &X, dir: RoundingDir) -> ResultCode
        where
            T: Repr,
            P: Policy,
            X: Operand<Repr = T>,
        {
            dispatch::$op::<T, P, X::Policy>(to.raw_value_mut(), x.raw(), dir)
        }

        pub fn $op_assign<T, P, X>(to: &mut Checked<T, P>, x: &X) -> CheckedResult<()>
        where
            T: Repr,
            P: Policy,
            X: Operand<Repr = T>,
        {
            commit(to, P::ROUND_DEFAULT_FUNCTION, |v, dir| {
                dispatch::$op::<T, P, X::Policy>(v, x.raw(), dir)
            })
        }
    )*};
}

macro_rules! exp_functions {
    ($($op:ident: $op_r:ident, $op_assign:ident;)*) => {$(
        pub fn $op_r<T, P, X>(to: &mut Checked<T, P>, x: &X, exp: u32, dir: RoundingDir) -> ResultCode
        where
            T: Repr,
            P: Policy,
            X: Operand<Repr = T>,
        {
            dispatch::$op::<T, P, X::Policy>(to.raw_value_mut(), x.raw(), exp, dir)
        }

        pub fn $op_assign<T, P, X>(to: &mut Checked<T, P>, x: &X, exp: u32) -> CheckedResult<()>
        where
            T: Repr,
            P: Policy,
            X: Operand<Repr = T>,
        {
            commit(to, P::ROUND_DEFAULT_FUNCTION, |v, dir| {
                dispatch::$op::<T, P, X::Policy>(v, x.raw(), exp, dir)
            })
        }
    )*};
}

macro_rules! binary_functions {
    ($($op:ident: $op_r:ident, $op_assign:ident, $round:ident;)*) => {$(
        pub fn $op_r<T, P, X, Y>(to: &mut Checked<T, P>, x: &X, y: &Y, dir: RoundingDir) -> ResultCode
        where
            T: Repr,
            P: Policy,
            X: Operand<Repr = T>,
            Y: Operand<Repr = T>,
        {
            dispatch::$op::<T, P, X::Policy, Y::Policy>(to.raw_value_mut(), x.raw(), y.raw(), dir)
        }

        pub fn $op_assign<T, P, X, Y>(to: &mut Checked<T, P>, x: &X, y: &Y) -> CheckedResult<()>
        where
            T: Repr,
            P: Policy,
            X: Operand<Repr = T>,
            Y: Operand<Repr = T>,
        {
            commit(to, P::$round, |v, dir| {
                dispatch::$op::<T, P, X::Policy, Y::Policy>(v, x.raw(), y.raw(), dir)
            })
        }
    )*};
}

unary_functions! {
    neg: neg_assign_r, neg_assign;
    abs: abs_assign_r, abs_assign;
    floor: floor_assign_r, floor_assign;
    ceil: ceil_assign_r, ceil_assign;
    trunc: trunc_assign_r, trunc_assign;
    sqrt: sqrt_assign_r, sqrt_assign;
}

exp_functions! {
    mul_2exp: mul_2exp_assign_r, mul_2exp_assign;
    div_2exp: div_2exp_assign_r, div_2exp_assign;
    add_2exp: add_2exp_assign_r, add_2exp_assign;
    sub_2exp: sub_2exp_assign_r, sub_2exp_assign;
    smod_2exp: smod_2exp_assign_r, smod_2exp_assign;
    umod_2exp: umod_2exp_assign_r, umod_2exp_assign;
}

// add_mul / sub_mul accumulate into `to`
binary_functions! {
    add: add_assign_r, add_assign, ROUND_DEFAULT_OPERATOR;
    sub: sub_assign_r, sub_assign, ROUND_DEFAULT_OPERATOR;
    mul: mul_assign_r, mul_assign, ROUND_DEFAULT_OPERATOR;
    div: div_assign_r, div_assign, ROUND_DEFAULT_OPERATOR;
    rem: rem_assign_r, rem_assign, ROUND_DEFAULT_OPERATOR;
    idiv: idiv_assign_r, idiv_assign, ROUND_DEFAULT_FUNCTION;
    gcd: gcd_assign_r, gcd_assign, ROUND_DEFAULT_FUNCTION;
    lcm: lcm_assign_r, lcm_assign, ROUND_DEFAULT_FUNCTION;
    add_mul: add_mul_assign_r, add_mul_assign, ROUND_DEFAULT_FUNCTION;
    sub_mul: sub_mul_assign_r, sub_mul_assign, ROUND_DEFAULT_FUNCTION;
}

/// `g = gcd(x, y)` and Bezout coefficients with `s * x + t * y == g`.
pub fn gcdext_assign_r<T, P, X, Y>(
    g: &mut Checked<T, P>,
    s: &mut Checked<T, P>,
    t: &mut Checked<T, P>,
    x: &X,
    y: &Y,
    dir: RoundingDir,
) -> ResultCode
where
    T: Repr,
    P: Policy,
    X: Operand<Repr = T>,
    Y: Operand<Repr = T>,
{
    dispatch::gcdext::<T, P, X::Policy, Y::Policy>(
        g.raw_value_mut(),
        s.raw_value_mut(),
        t.raw_value_mut(),
        x.raw(),
        y.raw(),
        dir,
    )
}

// ============================================================================
// Fresh Results
// ============================================================================

pub fn neg<T: Repr, P: Policy>(x: &Checked<T, P>) -> CheckedResult<Checked<T, P>> {
    x.checked_neg()
}

pub fn abs<T: Repr, P: Policy>(x: &Checked<T, P>) -> CheckedResult<Checked<T, P>> {
    x.checked_abs()
}

pub fn floor<T: Repr, P: Policy>(x: &Checked<T, P>) -> CheckedResult<Checked<T, P>> {
    x.checked_floor()
}

pub fn ceil<T: Repr, P: Policy>(x: &Checked<T, P>) -> CheckedResult<Checked<T, P>> {
    x.checked_ceil()
}

pub fn trunc<T: Repr, P: Policy>(x: &Checked<T, P>) -> CheckedResult<Checked<T, P>> {
    x.checked_trunc()
}

pub fn sqrt<T: Repr, P: Policy>(x: &Checked<T, P>) -> CheckedResult<Checked<T, P>> {
    x.checked_sqrt()
}

pub fn mul_2exp<T: Repr, P: Policy>(x: &Checked<T, P>, exp: u32) -> CheckedResult<Checked<T, P>> {
    x.checked_mul_2exp(exp)
}

pub fn div_2exp<T: Repr, P: Policy>(x: &Checked<T, P>, exp: u32) -> CheckedResult<Checked<T, P>> {
    x.checked_div_2exp(exp)
}

pub fn gcd<T: Repr, P: Policy, R: Operand<Repr = T>>(x: &Checked<T, P>, y: &R) -> CheckedResult<Checked<T, P>> {
    x.checked_gcd(y)
}

pub fn lcm<T: Repr, P: Policy, R: Operand<Repr = T>>(x: &Checked<T, P>, y: &R) -> CheckedResult<Checked<T, P>> {
    x.checked_lcm(y)
}

#[allow(clippy::type_complexity)]
pub fn gcdext<T: Repr, P: Policy, R: Operand<Repr = T>>(
    x: &Checked<T, P>,
    y: &R,
) -> CheckedResult<(Checked<T, P>, Checked<T, P>, Checked<T, P>)> {
    x.checked_gcdext(y)
}

pub fn exact_div<T: Repr, P: Policy, R: Operand<Repr = T>>(x: &Checked<T, P>, y: &R) -> CheckedResult<Checked<T, P>> {
    x.exact_div(y)
}

/// `acc + x * y`
pub fn add_mul<T, P, X, Y>(acc: &Checked<T, P>, x: &X, y: &Y) -> CheckedResult<Checked<T, P>>
where
    T: Repr,
    P: Policy,
    X: Operand<Repr = T>,
    Y: Operand<Repr = T>,
{
    let mut out = acc.clone();
    out.add_mul(x, y)?;
    Ok(out)
}

/// `acc - x * y`
pub fn sub_mul<T, P, X, Y>(acc: &Checked<T, P>, x: &X, y: &Y) -> CheckedResult<Checked<T, P>>
where
    T: Repr,
    P: Policy,
    X: Operand<Repr = T>,
    Y: Operand<Repr = T>,
{
    let mut out = acc.clone();
    out.sub_mul(x, y)?;
    Ok(out)
}

// ============================================================================
// Comparison
// ============================================================================

/// Three-way comparison as -1, 0 or 1; an unordered pair (NaN) gives 0.
pub fn cmp<T: Repr, P: Policy, R: Operand<Repr = T>>(x: &Checked<T, P>, y: &R) -> i32 {
    match dispatch::cmp::<T, P, R::Policy>(x.raw_value(), y.raw()) {
        Some(Ordering::Less) => -1,
        Some(Ordering::Greater) => 1,
        Some(Ordering::Equal) | None => 0,
    }
}

pub fn sgn<T: Repr, P: Policy>(x: &Checked<T, P>) -> i32 {
    x.sgn()
}
