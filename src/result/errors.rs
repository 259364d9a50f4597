// ============================================================================
// Checked Errors
// Error values for results a policy refuses to accept
// ============================================================================

use super::{Relation, ResultClass, ResultCode};
use thiserror::Error;

/// Errors reported when a policy rejects the outcome of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CheckedError {
    /// Nothing could be said about the exact result
    #[error("exact result is not comparable to computed one")]
    NotComparable,
    #[error("exact result is less than computed one")]
    Less,
    #[error("exact result is less than or equal to computed one")]
    LessOrEqual,
    #[error("exact result is greater than computed one")]
    Greater,
    #[error("exact result is greater than or equal to computed one")]
    GreaterOrEqual,
    #[error("exact result is less than or greater than computed one")]
    NotEqual,
    #[error("exact result is less than, greater than or equal to computed one")]
    Unknown,
    /// The exact value was representable but flagged anyway
    #[error("exact result is equal to computed one")]
    Equal,
    #[error("exact result is -infinity")]
    MinusInfinity,
    #[error("exact result is +infinity")]
    PlusInfinity,
    /// Result below the safe minimum
    #[error("negative overflow")]
    NegativeOverflow,
    /// Result above the safe maximum
    #[error("positive overflow")]
    PositiveOverflow,
    #[error("not a valid numeric string")]
    InvalidNumericString,
    #[error("division by zero")]
    DivisionByZero,
    #[error("addition of infinities of opposite sign")]
    InfAddInf,
    #[error("division of infinities")]
    InfDivInf,
    #[error("remainder of division of infinity")]
    InfMod,
    #[error("multiplication of infinity and zero")]
    InfMulZero,
    #[error("subtraction of infinities of equal sign")]
    InfSubInf,
    #[error("remainder of division by zero")]
    ModByZero,
    #[error("square root of negative number")]
    SqrtOfNegative,
    #[error("negative overflow with unknown exact result")]
    UnknownNegativeOverflow,
    #[error("positive overflow with unknown exact result")]
    UnknownPositiveOverflow,
    #[error("unordered comparison")]
    UnorderedComparison,
    #[error("not a number")]
    NotANumber,
    /// A result asserted to be exact was not
    #[error("rounding asserted as not needed but result is inexact")]
    RoundingNotNeeded,
    /// Output format rejected by `NumericFormat::validate`
    #[error("invalid numeric format: base must be in 2..=36")]
    InvalidFormat,
}

impl CheckedError {
    /// Map a result code to the error describing it.
    pub fn from_result(r: ResultCode) -> Self {
        let r = r.representable();
        match r.class() {
            ResultClass::NotANumber => Self::from_nan_reason(r),
            ResultClass::MinusInfinity => {
                if r.relation() == Relation::EQ {
                    CheckedError::MinusInfinity
                } else {
                    CheckedError::NegativeOverflow
                }
            }
            ResultClass::PlusInfinity => {
                if r.relation() == Relation::EQ {
                    CheckedError::PlusInfinity
                } else {
                    CheckedError::PositiveOverflow
                }
            }
            ResultClass::Normal => match r {
                ResultCode::V_LT_INF => CheckedError::NegativeOverflow,
                ResultCode::V_GT_SUP => CheckedError::PositiveOverflow,
                _ => match r.relation() {
                    Relation::EMPTY => CheckedError::NotComparable,
                    Relation::EQ => CheckedError::Equal,
                    Relation::LT => CheckedError::Less,
                    Relation::LE => CheckedError::LessOrEqual,
                    Relation::GT => CheckedError::Greater,
                    Relation::GE => CheckedError::GreaterOrEqual,
                    Relation::NE => CheckedError::NotEqual,
                    _ => CheckedError::Unknown,
                },
            },
        }
    }

    fn from_nan_reason(r: ResultCode) -> Self {
        match r {
            ResultCode::V_CVT_STR_UNK => CheckedError::InvalidNumericString,
            ResultCode::V_DIV_ZERO => CheckedError::DivisionByZero,
            ResultCode::V_INF_ADD_INF => CheckedError::InfAddInf,
            ResultCode::V_INF_DIV_INF => CheckedError::InfDivInf,
            ResultCode::V_INF_MOD => CheckedError::InfMod,
            ResultCode::V_INF_MUL_ZERO => CheckedError::InfMulZero,
            ResultCode::V_INF_SUB_INF => CheckedError::InfSubInf,
            ResultCode::V_MOD_ZERO => CheckedError::ModByZero,
            ResultCode::V_SQRT_NEG => CheckedError::SqrtOfNegative,
            ResultCode::V_UNKNOWN_NEG_OVERFLOW => CheckedError::UnknownNegativeOverflow,
            ResultCode::V_UNKNOWN_POS_OVERFLOW => CheckedError::UnknownPositiveOverflow,
            ResultCode::V_UNORD_COMP => CheckedError::UnorderedComparison,
            _ => CheckedError::NotANumber,
        }
    }
}

/// Result type alias for checked operations
pub type CheckedResult<T> = Result<T, CheckedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CheckedError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            CheckedError::SqrtOfNegative.to_string(),
            "square root of negative number"
        );
        assert_eq!(
            CheckedError::Less.to_string(),
            "exact result is less than computed one"
        );
    }

    #[test]
    fn test_from_result() {
        assert_eq!(
            CheckedError::from_result(ResultCode::V_DIV_ZERO),
            CheckedError::DivisionByZero
        );
        assert_eq!(
            CheckedError::from_result(ResultCode::V_GT_SUP.unrepresentable()),
            CheckedError::PositiveOverflow
        );
        assert_eq!(
            CheckedError::from_result(ResultCode::V_LT_PLUS_INFINITY),
            CheckedError::PositiveOverflow
        );
        assert_eq!(
            CheckedError::from_result(ResultCode::V_EQ_MINUS_INFINITY),
            CheckedError::MinusInfinity
        );
        assert_eq!(
            CheckedError::from_result(ResultCode::V_LT),
            CheckedError::Less
        );
        assert_eq!(
            CheckedError::from_result(ResultCode::V_NAN),
            CheckedError::NotANumber
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CheckedError::InfMod, CheckedError::InfMod);
        assert_ne!(CheckedError::NegativeOverflow, CheckedError::PositiveOverflow);
    }
}
