// ============================================================================
// Text
// Display, Debug, FromStr and serde for Checked values
// ============================================================================

use super::Checked;
use crate::io::{self, NumericFormat};
use crate::policy::Policy;
use crate::repr::Repr;
use crate::result::{CheckedError, CheckedResult, RoundingDir};
use std::fmt;
use std::str::FromStr;

impl<T: Repr, P: Policy> Checked<T, P> {
    /// Parse a literal, rounding per `dir`.
    ///
    /// # Errors
    /// `InvalidNumericString` for malformed text, otherwise whatever `P`
    /// rejects (a `nan` literal under a policy without NaN, overflow, ...).
    pub fn parse_with(text: &str, dir: RoundingDir) -> CheckedResult<Self> {
        let literal = io::parse_literal(text)?;
        Self::compute(dir, |to, dir| io::assign_literal::<T, P>(to, &literal, dir))
    }

    /// Text of the value in `format`.
    pub fn format_with(&self, format: &NumericFormat) -> CheckedResult<String> {
        format.validate()?;
        let mut out = String::new();
        io::output::<T, P, _>(&mut out, self.raw_value(), format, P::ROUND_DEFAULT_OUTPUT)
            .map_err(|_| CheckedError::InvalidFormat)?;
        Ok(out)
    }
}

impl<T: Repr, P: Policy> fmt::Display for Checked<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        io::output::<T, P, _>(f, self.raw_value(), &NumericFormat::new(), P::ROUND_DEFAULT_OUTPUT)?;
        Ok(())
    }
}

impl<T: Repr, P: Policy> fmt::Debug for Checked<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checked<{}, {}>({})", T::NAME, P::NAME, self)
    }
}

impl<T: Repr, P: Policy> FromStr for Checked<T, P> {
    type Err = CheckedError;

    /// Parse with the input rounding of `P`.
    ///
    /// # Examples
    /// - "42" and "+42" -> 42
    /// - "16^^ff", "0xff" -> 255
    /// - "1/3", "1.5e3", "-inf", "nan"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, P::ROUND_DEFAULT_INPUT)
    }
}

// ============================================================================
// Serde (textual form)
// ============================================================================

#[cfg(feature = "serde")]
impl<T: Repr, P: Policy> serde::Serialize for Checked<T, P> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Repr, P: Policy> serde::Deserialize<'de> for Checked<T, P> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CheckOverflow, Extended, Transparent};
    use num_bigint::BigInt;
    use num_rational::BigRational;

    #[test]
    fn test_display() {
        assert_eq!(Checked::<i32>::new(-42).to_string(), "-42");
        assert_eq!(Checked::<i32, Extended>::plus_infinity().to_string(), "+inf");
        assert_eq!(Checked::<i32, Extended>::nan().to_string(), "nan");
        assert_eq!(Checked::<f64, Transparent>::new(0.5).to_string(), "0.5");
        let q = BigRational::new(BigInt::from(-1), BigInt::from(3));
        assert_eq!(Checked::<BigRational>::new(q).to_string(), "-1/3");
    }

    #[test]
    fn test_debug() {
        let x = Checked::<i16, Extended>::new(7);
        assert_eq!(format!("{x:?}"), "Checked<i16, Extended>(7)");
    }

    #[test]
    fn test_format_with() {
        let x = Checked::<u32>::new(255);
        let hex = NumericFormat::new().with_base(16).with_base_prefix(true);
        assert_eq!(x.format_with(&hex).unwrap(), "16^^ff");
        assert_eq!(
            x.format_with(&NumericFormat::new().with_base(40)),
            Err(CheckedError::InvalidFormat)
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("42".parse::<Checked<i32>>().unwrap(), 42);
        assert_eq!("0xff".parse::<Checked<u8>>().unwrap(), 255u8);
        assert_eq!("2^^101".parse::<Checked<i32>>().unwrap(), 5);
        assert_eq!("1.5e3".parse::<Checked<i64>>().unwrap(), 1500i64);
        assert!("-inf".parse::<Checked<i32, Extended>>().unwrap().is_minus_infinity());
        assert_eq!("NaN".parse::<Checked<f64, Extended>>(), Err(CheckedError::NotANumber));
        assert!("NaN".parse::<Checked<f64, Transparent>>().unwrap().is_nan());
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!("12abc".parse::<Checked<i32>>(), Err(CheckedError::InvalidNumericString));
        assert_eq!("".parse::<Checked<i32, Transparent>>(), Err(CheckedError::InvalidNumericString));
        assert_eq!("300".parse::<Checked<u8>>(), Err(CheckedError::PositiveOverflow));
        assert_eq!("nan".parse::<Checked<i32, CheckOverflow>>(), Err(CheckedError::NotANumber));
        assert_eq!("inf".parse::<Checked<i32, CheckOverflow>>(), Err(CheckedError::PlusInfinity));
    }

    #[test]
    fn test_parse_with_direction() {
        let down = Checked::<i32, Extended>::parse_with("7/2", RoundingDir::DOWN).unwrap();
        assert_eq!(down, 3);
        let up = Checked::<i32, Extended>::parse_with("7/2", RoundingDir::UP).unwrap();
        assert_eq!(up, 4);
        assert_eq!(
            Checked::<i32, Extended>::parse_with("7/2", RoundingDir::NOT_NEEDED),
            Err(CheckedError::RoundingNotNeeded)
        );
    }

    #[test]
    fn test_display_parse_agree() {
        for text in ["0", "-17", "+inf", "-inf"] {
            let x: Checked<i64, Extended> = match text.parse() {
                Ok(x) => x,
                Err(err) => panic!("{text}: {err}"),
            };
            assert_eq!(x.to_string(), text);
        }
        for text in ["1/7", "-22/7", "5"] {
            let x: Checked<BigRational> = text.parse().unwrap();
            let back: Checked<BigRational> = x.to_string().parse().unwrap();
            assert_eq!(back, x);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let x = Checked::<i64, Extended>::new(-5);
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"-5\"");
        let back: Checked<i64, Extended> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
        let inf: Checked<i64, Extended> = serde_json::from_str("\"+inf\"").unwrap();
        assert!(inf.is_plus_infinity());
        assert!(serde_json::from_str::<Checked<i64, Extended>>("\"1x\"").is_err());
    }
}
