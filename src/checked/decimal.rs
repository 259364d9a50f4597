// ============================================================================
// Decimal Bridge
// Conversion to and from rust_decimal at API boundaries
// ============================================================================

use super::Checked;
use crate::dispatch;
use crate::policy::Policy;
use crate::repr::{ConvertFrom, Repr};
use crate::result::{CheckedError, CheckedResult, ResultClass};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};
use rust_decimal::Decimal;

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

impl<T: Repr, P: Policy> Checked<T, P> {
    /// Convert from a `Decimal`, rounding per the constructor default of `P`.
    ///
    /// The decimal is read exactly, so the only rounding is the one into `T`.
    ///
    /// # Errors
    /// Whatever `P` rejects, typically overflow.
    pub fn from_decimal(d: Decimal) -> CheckedResult<Self>
    where
        T: ConvertFrom<BigRational>,
    {
        let q = BigRational::new(BigInt::from(d.mantissa()), BigInt::from(10u32).pow(d.scale()));
        Self::convert_with(&q, P::ROUND_DEFAULT_CONSTRUCTOR)
    }

    /// Convert to a `Decimal`, rounding half away from zero at the finest
    /// scale that fits.
    ///
    /// # Errors
    /// - `NotANumber`, `PlusInfinity` or `MinusInfinity` for special values
    /// - `PositiveOverflow` / `NegativeOverflow` when even the integer part
    ///   does not fit in 96 bits
    pub fn to_decimal(&self) -> CheckedResult<Decimal> {
        match dispatch::classify::<T, P>(self.raw_value()) {
            ResultClass::NotANumber => return Err(CheckedError::NotANumber),
            ResultClass::PlusInfinity => return Err(CheckedError::PlusInfinity),
            ResultClass::MinusInfinity => return Err(CheckedError::MinusInfinity),
            ResultClass::Normal => {}
        }
        let q = T::to_rational(self.raw_value()).ok_or(CheckedError::NotANumber)?;

        for scale in (0..=MAX_DECIMAL_SCALE).rev() {
            let factor = BigRational::from_integer(BigInt::from(10u32).pow(scale));
            let mantissa = (&q * factor).round().to_integer();
            if let Some(d) = mantissa
                .to_i128()
                .and_then(|m| Decimal::try_from_i128_with_scale(m, scale).ok())
            {
                return Ok(d.normalize());
            }
        }

        if q.is_negative() {
            Err(CheckedError::NegativeOverflow)
        } else {
            Err(CheckedError::PositiveOverflow)
        }
    }
}
