// ============================================================================
// Policy Module
// Compile-time configuration of checks, special values and default rounding
// ============================================================================
//
// A policy is a zero-sized type carrying named constants. The same
// representation can be wrapped under different policies:
// - Transparent: plain native arithmetic, never faults
// - CheckOverflow: overflow detection, faults on anything inexact-by-overflow
// - Saturating: clamps to the representable range, faults on domain errors
// - Extended: reserves NaN and +/-infinity sentinels, checks every domain error

use crate::result::{CheckedError, CheckedResult, ResultCode, RoundingDir};
use std::fmt;

/// Compile-time record of checks, special values and default rounding.
///
/// `handle_result` is the single choke point deciding whether an outcome is
/// accepted; entry points that return a [`ResultCode`] never call it.
pub trait Policy: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Human readable name, used in log records.
    const NAME: &'static str;

    const CHECK_OVERFLOW: bool;
    const CHECK_INF_ADD_INF: bool;
    const CHECK_INF_SUB_INF: bool;
    const CHECK_INF_MUL_ZERO: bool;
    const CHECK_DIV_ZERO: bool;
    const CHECK_INF_DIV_INF: bool;
    const CHECK_INF_MOD: bool;
    const CHECK_SQRT_NEG: bool;

    /// A NaN sentinel exists.
    const HAS_NAN: bool;
    /// +/-infinity sentinels exist.
    const HAS_INFINITY: bool;
    /// Exposing the raw representation as a plain number is safe.
    const CONVERTIBLE: bool;

    /// Floating primitives always compute the exact relation.
    const FPU_CHECK_INEXACT: bool;
    /// Floating primitives report a NaN produced by the hardware.
    const FPU_CHECK_NAN_RESULT: bool;

    const ROUND_DEFAULT_CONSTRUCTOR: RoundingDir;
    const ROUND_DEFAULT_OPERATOR: RoundingDir;
    const ROUND_DEFAULT_FUNCTION: RoundingDir;
    const ROUND_DEFAULT_INPUT: RoundingDir;
    const ROUND_DEFAULT_OUTPUT: RoundingDir;

    /// Decide whether `r` is acceptable under this policy.
    fn handle_result(r: ResultCode) -> CheckedResult<()>;
}

/// True when values under `P` may hold a special (NaN or infinity).
#[inline]
pub const fn handles_specials<P: Policy>() -> bool {
    P::HAS_NAN || P::HAS_INFINITY
}

/// Validate a result against the rounding assertion carried by `dir`, then
/// hand it to the policy.
pub fn check_result<P: Policy>(r: ResultCode, dir: RoundingDir) -> CheckedResult<()> {
    if dir.round_not_needed() && r.is_strictly_inexact() {
        tracing::debug!(policy = P::NAME, result = ?r, "rounding asserted as not needed");
        return Err(CheckedError::RoundingNotNeeded);
    }
    P::handle_result(r).inspect_err(|err| {
        tracing::debug!(policy = P::NAME, result = ?r, error = %err, "policy rejected result");
    })
}

// ============================================================================
// Transparent
// ============================================================================

/// No checks, no special values: the wrapper behaves like the native type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Transparent;

impl Policy for Transparent {
    const NAME: &'static str = "Transparent";

    const CHECK_OVERFLOW: bool = false;
    const CHECK_INF_ADD_INF: bool = false;
    const CHECK_INF_SUB_INF: bool = false;
    const CHECK_INF_MUL_ZERO: bool = false;
    const CHECK_DIV_ZERO: bool = false;
    const CHECK_INF_DIV_INF: bool = false;
    const CHECK_INF_MOD: bool = false;
    const CHECK_SQRT_NEG: bool = false;

    const HAS_NAN: bool = false;
    const HAS_INFINITY: bool = false;
    const CONVERTIBLE: bool = true;

    const FPU_CHECK_INEXACT: bool = false;
    const FPU_CHECK_NAN_RESULT: bool = false;

    const ROUND_DEFAULT_CONSTRUCTOR: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_OPERATOR: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_FUNCTION: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_INPUT: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_OUTPUT: RoundingDir = RoundingDir::NATIVE;

    #[inline]
    fn handle_result(_r: ResultCode) -> CheckedResult<()> {
        Ok(())
    }
}

// ============================================================================
// CheckOverflow
// ============================================================================

/// Overflow is detected and rejected; no special values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CheckOverflow;

impl Policy for CheckOverflow {
    const NAME: &'static str = "CheckOverflow";

    const CHECK_OVERFLOW: bool = true;
    const CHECK_INF_ADD_INF: bool = false;
    const CHECK_INF_SUB_INF: bool = false;
    const CHECK_INF_MUL_ZERO: bool = false;
    const CHECK_DIV_ZERO: bool = true;
    const CHECK_INF_DIV_INF: bool = false;
    const CHECK_INF_MOD: bool = false;
    const CHECK_SQRT_NEG: bool = true;

    const HAS_NAN: bool = false;
    const HAS_INFINITY: bool = false;
    const CONVERTIBLE: bool = true;

    const FPU_CHECK_INEXACT: bool = false;
    const FPU_CHECK_NAN_RESULT: bool = true;

    const ROUND_DEFAULT_CONSTRUCTOR: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_OPERATOR: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_FUNCTION: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_INPUT: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_OUTPUT: RoundingDir = RoundingDir::NATIVE;

    fn handle_result(r: ResultCode) -> CheckedResult<()> {
        if r.is_nan() || r.is_overflow() || !r.is_representable() {
            Err(CheckedError::from_result(r))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Saturating
// ============================================================================

/// Out-of-range results clamp to the nearest bound; domain errors fault.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Saturating;

impl Policy for Saturating {
    const NAME: &'static str = "Saturating";

    const CHECK_OVERFLOW: bool = true;
    const CHECK_INF_ADD_INF: bool = false;
    const CHECK_INF_SUB_INF: bool = false;
    const CHECK_INF_MUL_ZERO: bool = false;
    const CHECK_DIV_ZERO: bool = true;
    const CHECK_INF_DIV_INF: bool = false;
    const CHECK_INF_MOD: bool = false;
    const CHECK_SQRT_NEG: bool = true;

    const HAS_NAN: bool = false;
    const HAS_INFINITY: bool = false;
    const CONVERTIBLE: bool = true;

    const FPU_CHECK_INEXACT: bool = false;
    const FPU_CHECK_NAN_RESULT: bool = true;

    const ROUND_DEFAULT_CONSTRUCTOR: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_OPERATOR: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_FUNCTION: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_INPUT: RoundingDir = RoundingDir::NATIVE;
    const ROUND_DEFAULT_OUTPUT: RoundingDir = RoundingDir::NATIVE;

    fn handle_result(r: ResultCode) -> CheckedResult<()> {
        if r.is_nan() {
            Err(CheckedError::from_result(r))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Extended
// ============================================================================

/// NaN and +/-infinity sentinels; overflow resolves to infinity when rounding
/// up, every undefined combination of specials is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Extended;

impl Policy for Extended {
    const NAME: &'static str = "Extended";

    const CHECK_OVERFLOW: bool = true;
    const CHECK_INF_ADD_INF: bool = true;
    const CHECK_INF_SUB_INF: bool = true;
    const CHECK_INF_MUL_ZERO: bool = true;
    const CHECK_DIV_ZERO: bool = true;
    const CHECK_INF_DIV_INF: bool = true;
    const CHECK_INF_MOD: bool = true;
    const CHECK_SQRT_NEG: bool = true;

    const HAS_NAN: bool = true;
    const HAS_INFINITY: bool = true;
    const CONVERTIBLE: bool = false;

    const FPU_CHECK_INEXACT: bool = true;
    const FPU_CHECK_NAN_RESULT: bool = true;

    const ROUND_DEFAULT_CONSTRUCTOR: RoundingDir = RoundingDir::UP;
    const ROUND_DEFAULT_OPERATOR: RoundingDir = RoundingDir::UP;
    const ROUND_DEFAULT_FUNCTION: RoundingDir = RoundingDir::UP;
    const ROUND_DEFAULT_INPUT: RoundingDir = RoundingDir::UP;
    const ROUND_DEFAULT_OUTPUT: RoundingDir = RoundingDir::UP;

    fn handle_result(r: ResultCode) -> CheckedResult<()> {
        if r.is_nan() {
            Err(CheckedError::from_result(r))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_accepts_everything() {
        assert!(Transparent::handle_result(ResultCode::V_DIV_ZERO).is_ok());
        assert!(Transparent::handle_result(ResultCode::V_GT_SUP).is_ok());
    }

    #[test]
    fn test_check_overflow_rejects_overflow() {
        assert_eq!(
            CheckOverflow::handle_result(ResultCode::V_GT_SUP.unrepresentable()),
            Err(CheckedError::PositiveOverflow)
        );
        assert_eq!(
            CheckOverflow::handle_result(ResultCode::V_LT_INF),
            Err(CheckedError::NegativeOverflow)
        );
        assert!(CheckOverflow::handle_result(ResultCode::V_EQ).is_ok());
        assert!(CheckOverflow::handle_result(ResultCode::V_LGE).is_ok());
    }

    #[test]
    fn test_saturating_accepts_overflow() {
        assert!(Saturating::handle_result(ResultCode::V_GT_SUP.unrepresentable()).is_ok());
        assert_eq!(
            Saturating::handle_result(ResultCode::V_DIV_ZERO),
            Err(CheckedError::DivisionByZero)
        );
    }

    #[test]
    fn test_extended_rejects_nan_only() {
        assert!(Extended::handle_result(ResultCode::V_LT_PLUS_INFINITY).is_ok());
        assert_eq!(
            Extended::handle_result(ResultCode::V_INF_ADD_INF),
            Err(CheckedError::InfAddInf)
        );
    }

    #[test]
    fn test_check_result_reports_not_needed_violation() {
        assert_eq!(
            check_result::<Transparent>(ResultCode::V_LT, RoundingDir::NOT_NEEDED),
            Err(CheckedError::RoundingNotNeeded)
        );
        assert!(check_result::<Transparent>(ResultCode::V_LGE, RoundingDir::NOT_NEEDED).is_ok());
        assert!(check_result::<Transparent>(ResultCode::V_LT, RoundingDir::UP).is_ok());
    }

    #[test]
    fn test_handles_specials() {
        assert!(handles_specials::<Extended>());
        assert!(!handles_specials::<Saturating>());
        assert!(!handles_specials::<Transparent>());
    }
}
