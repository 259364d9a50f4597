// ============================================================================
// Numeric Format
// Output configuration for literals
// ============================================================================

use crate::result::{CheckedError, CheckedResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest base a literal may be written in.
pub const MIN_BASE: u32 = 2;
/// Largest base: digits run `0-9` then `a-z`.
pub const MAX_BASE: u32 = 36;

/// How a number is written out.
///
/// # Example
/// ```
/// use checked_number::io::NumericFormat;
///
/// let format = NumericFormat::new().with_base(16).with_uppercase(true);
/// assert!(format.validate().is_ok());
/// assert!(NumericFormat::new().with_base(40).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericFormat {
    base: u32,
    uppercase: bool,
    show_plus: bool,
    base_prefix: bool,
}

impl NumericFormat {
    /// Decimal, lowercase, no explicit plus sign.
    pub const fn new() -> Self {
        Self {
            base: 10,
            uppercase: false,
            show_plus: false,
            base_prefix: false,
        }
    }

    /// Builder method: digits in `base`
    pub const fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Builder method: digits above 9 as `A-Z`
    pub const fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Builder method: write `+` in front of positive values
    pub const fn with_show_plus(mut self, show_plus: bool) -> Self {
        self.show_plus = show_plus;
        self
    }

    /// Builder method: write non-decimal values as `base^^digits` so that
    /// they read back unchanged
    pub const fn with_base_prefix(mut self, base_prefix: bool) -> Self {
        self.base_prefix = base_prefix;
        self
    }

    #[inline]
    pub const fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub const fn uppercase(&self) -> bool {
        self.uppercase
    }

    #[inline]
    pub const fn show_plus(&self) -> bool {
        self.show_plus
    }

    #[inline]
    pub const fn base_prefix(&self) -> bool {
        self.base_prefix
    }

    /// Validate the format
    pub fn validate(&self) -> CheckedResult<()> {
        if !(MIN_BASE..=MAX_BASE).contains(&self.base) {
            return Err(CheckedError::InvalidFormat);
        }
        Ok(())
    }
}

impl Default for NumericFormat {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_decimal() {
        let format = NumericFormat::default();
        assert_eq!(format.base(), 10);
        assert!(!format.uppercase());
        assert!(!format.show_plus());
        assert!(!format.base_prefix());
        assert!(format.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let format = NumericFormat::new()
            .with_base(2)
            .with_show_plus(true)
            .with_base_prefix(true);
        assert_eq!(format.base(), 2);
        assert!(format.show_plus());
        assert!(format.base_prefix());
    }

    #[test]
    fn test_validate_rejects_bad_base() {
        assert_eq!(
            NumericFormat::new().with_base(1).validate(),
            Err(CheckedError::InvalidFormat)
        );
        assert_eq!(
            NumericFormat::new().with_base(37).validate(),
            Err(CheckedError::InvalidFormat)
        );
        assert!(NumericFormat::new().with_base(36).validate().is_ok());
    }
}
