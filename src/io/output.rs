// ============================================================================
// Literal Output
// Writers producing text the input grammar reads back
// ============================================================================

use super::NumericFormat;
use crate::dispatch;
use crate::policy::Policy;
use crate::repr::Repr;
use crate::result::{Relation, ResultClass, ResultCode, RoundingDir};
use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::One;
use smallvec::SmallVec;
use std::fmt;

fn write_sign<W: fmt::Write>(out: &mut W, negative: bool, format: &NumericFormat) -> fmt::Result {
    if negative {
        out.write_char('-')?;
    } else if format.show_plus() {
        out.write_char('+')?;
    }
    if format.base_prefix() && format.base() != 10 {
        write!(out, "{}^^", format.base())?;
    }
    Ok(())
}

fn write_digits<W: fmt::Write>(out: &mut W, magnitude: &BigUint, format: &NumericFormat) -> fmt::Result {
    let digits = magnitude.to_str_radix(format.base());
    if format.uppercase() {
        out.write_str(&digits.to_ascii_uppercase())
    } else {
        out.write_str(&digits)
    }
}

/// Write a machine integer given as sign and magnitude.
pub fn write_radix<W: fmt::Write>(
    out: &mut W,
    negative: bool,
    mut magnitude: u128,
    format: &NumericFormat,
) -> fmt::Result {
    format.validate().map_err(|_| fmt::Error)?;
    write_sign(out, negative && magnitude != 0, format)?;

    let base = format.base() as u128;
    let mut digits: SmallVec<[u8; 128]> = SmallVec::new();
    loop {
        let d = (magnitude % base) as u8;
        digits.push(if d < 10 {
            b'0' + d
        } else if format.uppercase() {
            b'A' + d - 10
        } else {
            b'a' + d - 10
        });
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    for &c in digits.iter().rev() {
        out.write_char(c as char)?;
    }
    Ok(())
}

pub fn write_big_radix<W: fmt::Write>(out: &mut W, x: &BigInt, format: &NumericFormat) -> fmt::Result {
    format.validate().map_err(|_| fmt::Error)?;
    write_sign(out, x.sign() == Sign::Minus, format)?;
    write_digits(out, x.magnitude(), format)
}

/// `numerator[/denominator]`; the denominator shares the numerator's base.
pub fn write_rational<W: fmt::Write>(out: &mut W, x: &BigRational, format: &NumericFormat) -> fmt::Result {
    write_big_radix(out, x.numer(), format)?;
    if !x.denom().is_one() {
        out.write_char('/')?;
        write_digits(out, x.denom().magnitude(), format)?;
    }
    Ok(())
}

/// Write `x`, held under policy `P`.
///
/// Sentinels are written as `+inf`, `-inf` and `nan`. When the shortest text
/// for a float does not denote it exactly and `dir` asks for a rounding, the
/// exact value is written instead, as a fraction when needed. The returned
/// code relates `x` to the value of the text.
pub fn output<T: Repr, P: Policy, W: fmt::Write>(
    out: &mut W,
    x: &T,
    format: &NumericFormat,
    dir: RoundingDir,
) -> Result<ResultCode, fmt::Error> {
    match dispatch::classify::<T, P>(x) {
        ResultClass::NotANumber => {
            out.write_str("nan")?;
            return Ok(ResultCode::V_NAN);
        }
        ResultClass::MinusInfinity => {
            out.write_str("-inf")?;
            return Ok(ResultCode::V_EQ_MINUS_INFINITY);
        }
        ResultClass::PlusInfinity => {
            out.write_str("+inf")?;
            return Ok(ResultCode::V_EQ_PLUS_INFINITY);
        }
        ResultClass::Normal => {}
    }

    let mut text = String::new();
    let mut relation = T::write_literal(x, format, &mut text)?;
    if relation != Relation::EQ && !dir.round_ignore() {
        if let Some(exact) = T::to_rational(x) {
            text.clear();
            write_rational(&mut text, &exact, format)?;
            relation = Relation::EQ;
        }
    }
    out.write_str(&text)?;
    Ok(ResultCode::compose(relation, ResultClass::Normal))
}
