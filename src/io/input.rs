// ============================================================================
// Literal Input
// Recursive-descent scanner for the numeric literal grammar
// ============================================================================
//
//   number   ::= ['+'|'-'] ( 'inf' | 'nan' | num )
//   num      ::= unum | unum '/' unum
//   unum     ::= mantissa [ ('e'|'*^') ['+'|'-'] digits ]
//              | '0x' hexmantissa ['p' ['+'|'-'] digits]
//              | base '^^' mantissa [ ('e'|'*^') ['+'|'-'] digits ]
//   mantissa ::= bdigits | '.' bdigits | bdigits '.' [bdigits]
//
// Keywords and markers are case-insensitive. An exponent after `e` or `*^`
// scales by the base of the mantissa, one after `p` scales by two. A
// denominator without its own prefix is read in the base of the numerator.

use crate::policy::Policy;
use crate::repr::Repr;
use crate::result::{CheckedError, CheckedResult, ResultClass, ResultCode, RoundingDir};
use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::Zero;
use smallvec::SmallVec;

/// Largest accepted exponent magnitude.
pub const EXPONENT_LIMIT: i64 = 1_000_000;

/// A parsed literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Number(BigRational),
    PlusInfinity,
    MinusInfinity,
    NotANumber,
}

type Digits = SmallVec<[u8; 32]>;

struct Mantissa {
    digits: Digits,
    fraction_digits: usize,
}

impl Mantissa {
    /// `digits * base^-fraction_digits * scale^exponent`
    fn value(&self, base: u32, scale: u32, exponent: i64) -> Option<BigRational> {
        let numer = BigInt::from_radix_be(Sign::Plus, &self.digits, base)?;
        let mut denom = num_traits::pow(BigInt::from(base), self.fraction_digits);
        let power = num_traits::pow(BigInt::from(scale), exponent.unsigned_abs() as usize);
        let numer = if exponent >= 0 {
            numer * power
        } else {
            denom *= power;
            numer
        };
        Some(BigRational::new(numer, denom))
    }
}

#[inline]
fn digit_value(c: u8) -> Option<u32> {
    (c as char).to_digit(36)
}

// ============================================================================
// Scanner
// ============================================================================

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consume `token` (ASCII, case-insensitive) or nothing at all.
    fn eat(&mut self, token: &str) -> bool {
        let end = self.pos + token.len();
        match self.bytes.get(self.pos..end) {
            Some(found) if found.eq_ignore_ascii_case(token.as_bytes()) => {
                self.pos = end;
                true
            }
            _ => false,
        }
    }

    /// True for a leading minus sign.
    fn sign(&mut self) -> bool {
        if self.eat("-") {
            true
        } else {
            self.eat("+");
            false
        }
    }

    fn bdigits(&mut self, base: u32, digits: &mut Digits) -> usize {
        let start = digits.len();
        while let Some(d) = self.peek().and_then(digit_value).filter(|&d| d < base) {
            digits.push(d as u8);
            self.pos += 1;
        }
        digits.len() - start
    }

    fn mantissa(&mut self, base: u32) -> Option<Mantissa> {
        let start = self.pos;
        let mut digits = Digits::new();
        let integral = self.bdigits(base, &mut digits);
        let mut fraction_digits = 0;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            fraction_digits = self.bdigits(base, &mut digits);
            if integral == 0 && fraction_digits == 0 {
                self.pos = start;
                return None;
            }
        }
        if digits.is_empty() {
            self.pos = start;
            return None;
        }
        Some(Mantissa {
            digits,
            fraction_digits,
        })
    }

    /// Decimal digits, saturated above the exponent limit.
    fn decimal(&mut self) -> Option<i64> {
        let start = self.pos;
        let mut value: i64 = 0;
        while let Some(d) = self.peek().and_then(digit_value).filter(|&d| d < 10) {
            value = (value * 10 + d as i64).min(EXPONENT_LIMIT + 1);
            self.pos += 1;
        }
        (self.pos > start).then_some(value)
    }

    /// An optional exponent introduced by one of `markers`. A marker without
    /// digits is not part of the literal.
    fn exponent(&mut self, markers: &[&str]) -> CheckedResult<i64> {
        let start = self.pos;
        if !markers.iter().any(|m| self.eat(m)) {
            return Ok(0);
        }
        let negative = self.sign();
        let Some(magnitude) = self.decimal() else {
            self.pos = start;
            return Ok(0);
        };
        if magnitude > EXPONENT_LIMIT {
            return Err(CheckedError::InvalidNumericString);
        }
        Ok(if negative { -magnitude } else { magnitude })
    }

    /// One unsigned number and the base it was written in.
    fn unum(&mut self, inherited_base: u32) -> CheckedResult<Option<(BigRational, u32)>> {
        let start = self.pos;

        if self.eat("0x") {
            if let Some(m) = self.mantissa(16) {
                let exp = self.exponent(&["p"])?;
                return Ok(m.value(16, 2, exp).map(|q| (q, 16)));
            }
            self.pos = start;
        }

        if let Some(base) = self.decimal() {
            if self.eat("^^") && (2..=36).contains(&base) {
                let base = base as u32;
                if let Some(m) = self.mantissa(base) {
                    let exp = self.exponent(&["e", "*^"])?;
                    return Ok(m.value(base, base, exp).map(|q| (q, base)));
                }
            }
            self.pos = start;
        }

        let Some(m) = self.mantissa(inherited_base) else {
            return Ok(None);
        };
        let exp = self.exponent(&["e", "*^"])?;
        Ok(m.value(inherited_base, inherited_base, exp).map(|q| (q, inherited_base)))
    }

    fn number(&mut self) -> CheckedResult<Option<Literal>> {
        let negative = self.sign();
        if self.eat("inf") {
            return Ok(Some(if negative {
                Literal::MinusInfinity
            } else {
                Literal::PlusInfinity
            }));
        }
        if self.eat("nan") {
            return Ok(Some(Literal::NotANumber));
        }
        let Some((mut value, base)) = self.unum(10)? else {
            return Ok(None);
        };
        let slash = self.pos;
        if self.eat("/") {
            match self.unum(base)? {
                Some((denom, _)) if denom.is_zero() => return Err(CheckedError::InvalidNumericString),
                Some((denom, _)) => value /= denom,
                None => self.pos = slash,
            }
        }
        Ok(Some(Literal::Number(if negative { -value } else { value })))
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Parse the longest literal at the start of `text`, after optional leading
/// whitespace. Returns the literal and the number of bytes consumed.
///
/// # Example
/// ```
/// use checked_number::io::{input_prefix, Literal};
///
/// let (literal, consumed) = input_prefix("  42 apples").unwrap();
/// assert_eq!(consumed, 4);
/// assert!(matches!(literal, Literal::Number(_)));
/// ```
pub fn input_prefix(text: &str) -> CheckedResult<(Literal, usize)> {
    let skipped = text.len() - text.trim_start().len();
    let mut scanner = Scanner::new(&text[skipped..]);
    match scanner.number() {
        Ok(Some(literal)) => Ok((literal, skipped + scanner.pos)),
        Ok(None) | Err(_) => {
            tracing::debug!(input = text, "rejected numeric literal");
            Err(CheckedError::InvalidNumericString)
        }
    }
}

/// Parse `text` as exactly one literal.
pub fn parse_literal(text: &str) -> CheckedResult<Literal> {
    let mut scanner = Scanner::new(text);
    match scanner.number() {
        Ok(Some(literal)) if scanner.pos == text.len() => Ok(literal),
        _ => {
            tracing::debug!(input = text, "rejected numeric literal");
            Err(CheckedError::InvalidNumericString)
        }
    }
}

/// Exact value of a finite literal.
pub(crate) fn parse_rational(text: &str) -> Option<BigRational> {
    match parse_literal(text) {
        Ok(Literal::Number(q)) => Some(q),
        _ => None,
    }
}

/// Store `literal` under policy `P`, rounding per `dir`.
pub fn assign_literal<T: Repr, P: Policy>(to: &mut T, literal: &Literal, dir: RoundingDir) -> ResultCode {
    match literal {
        Literal::Number(q) => T::from_rational::<P>(to, q, dir),
        Literal::PlusInfinity => T::assign_special::<P>(to, ResultClass::PlusInfinity, dir),
        Literal::MinusInfinity => T::assign_special::<P>(to, ResultClass::MinusInfinity, dir),
        Literal::NotANumber => T::assign_special::<P>(to, ResultClass::NotANumber, dir),
    }
}

/// Parse `text` into `to`. A malformed literal yields `V_CVT_STR_UNK` and
/// leaves NaN behind when `P` has it.
pub fn input<T: Repr, P: Policy>(to: &mut T, text: &str, dir: RoundingDir) -> ResultCode {
    match parse_literal(text) {
        Ok(literal) => assign_literal::<T, P>(to, &literal, dir),
        Err(_) => {
            if P::HAS_NAN {
                T::assign_special::<P>(to, ResultClass::NotANumber, dir);
            }
            ResultCode::V_CVT_STR_UNK
        }
    }
}
