// ============================================================================
// Result Module
// Outcome vocabulary shared by every checked operation
// ============================================================================
//
// This module provides:
// - ResultCode: relation + class + unrepresentable flag of a computed value
// - Relation / ResultClass: the two orthogonal axes of a ResultCode
// - RoundingDir: how an inexact result must be resolved
// - CheckedError: descriptive error for results a policy rejects
//
// Design principles:
// - Every primitive returns a ResultCode describing exactly how the value it
//   wrote relates to the mathematically exact one
// - Plain `Copy` bit sets, no allocation

mod errors;
mod rounding;

pub use errors::{CheckedError, CheckedResult};
pub use rounding::RoundingDir;

use std::fmt;

// ============================================================================
// Relation
// ============================================================================

/// Relation between the exact result and the computed one.
///
/// Bit set over `EQ`, `LT` and `GT`: `LE` means "the exact value is less than
/// or equal to the computed one", `LGE` means nothing is known.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relation(u32);

impl Relation {
    pub const EMPTY: Self = Self(0);
    pub const EQ: Self = Self(1);
    pub const LT: Self = Self(2);
    pub const GT: Self = Self(4);
    pub const NE: Self = Self(2 | 4);
    pub const LE: Self = Self(1 | 2);
    pub const GE: Self = Self(1 | 4);
    pub const LGE: Self = Self(1 | 2 | 4);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every relation in `other` is also allowed by `self`.
    #[inline]
    pub const fn contains(self, other: Relation) -> bool {
        self.0 & other.0 == other.0
    }

    /// Swap the roles of `LT` and `GT` (the relation seen from the other side).
    #[inline]
    pub const fn inverse(self) -> Self {
        let lt = (self.0 & Self::LT.0) << 1;
        let gt = (self.0 & Self::GT.0) >> 1;
        Self((self.0 & Self::EQ.0) | lt | gt)
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::EMPTY => "EMPTY",
            Self::EQ => "EQ",
            Self::LT => "LT",
            Self::GT => "GT",
            Self::NE => "NE",
            Self::LE => "LE",
            Self::GE => "GE",
            _ => "LGE",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Result Class
// ============================================================================

/// Class of the computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultClass {
    Normal,
    MinusInfinity,
    PlusInfinity,
    NotANumber,
}

impl ResultClass {
    const SHIFT: u32 = 4;

    #[inline]
    const fn bits(self) -> u32 {
        match self {
            ResultClass::Normal => 0,
            ResultClass::MinusInfinity => 1 << Self::SHIFT,
            ResultClass::PlusInfinity => 2 << Self::SHIFT,
            ResultClass::NotANumber => 3 << Self::SHIFT,
        }
    }

    #[inline]
    const fn from_bits(bits: u32) -> Self {
        match (bits >> Self::SHIFT) & 3 {
            0 => ResultClass::Normal,
            1 => ResultClass::MinusInfinity,
            2 => ResultClass::PlusInfinity,
            _ => ResultClass::NotANumber,
        }
    }
}

// ============================================================================
// Result Code
// ============================================================================

/// Outcome of a checked operation.
///
/// Layout:
/// - bits 0..=2: [`Relation`] of the exact result to the computed one
/// - bits 4..=5: [`ResultClass`] of the computed value
/// - bit 6: overflow marker (exact result outside the safe range)
/// - bit 7: unrepresentable (the requested relation could not be honored)
/// - bits 8..: reason, only meaningful for NaN-class results
///
/// The class dominates: a NaN-class code describes NaN whatever its other bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultCode(u32);

const OVERFLOW_BIT: u32 = 1 << 6;
const UNREPRESENTABLE_BIT: u32 = 1 << 7;
const CLASS_MASK: u32 = 3 << 4;
const RELATION_MASK: u32 = 7;
const REASON_SHIFT: u32 = 8;

const fn nan_reason(n: u32) -> u32 {
    (3 << 4) | (n << REASON_SHIFT)
}

impl ResultCode {
    /// Nothing is known about the result.
    pub const V_EMPTY: Self = Self(0);
    /// The computed value is exact.
    pub const V_EQ: Self = Self(1);
    /// The exact value is less than the computed one.
    pub const V_LT: Self = Self(2);
    /// The exact value is greater than the computed one.
    pub const V_GT: Self = Self(4);
    pub const V_NE: Self = Self(2 | 4);
    pub const V_LE: Self = Self(1 | 2);
    pub const V_GE: Self = Self(1 | 4);
    pub const V_LGE: Self = Self(1 | 2 | 4);

    /// Negative overflow: the exact value is below the computed safe minimum.
    pub const V_LT_INF: Self = Self(2 | OVERFLOW_BIT);
    /// Positive overflow: the exact value is above the computed safe maximum.
    pub const V_GT_SUP: Self = Self(4 | OVERFLOW_BIT);
    /// Positive overflow resolved to the `+inf` sentinel.
    pub const V_LT_PLUS_INFINITY: Self = Self(2 | (2 << 4));
    /// Negative overflow resolved to the `-inf` sentinel.
    pub const V_GT_MINUS_INFINITY: Self = Self(4 | (1 << 4));
    pub const V_EQ_MINUS_INFINITY: Self = Self(1 | (1 << 4));
    pub const V_EQ_PLUS_INFINITY: Self = Self(1 | (2 << 4));

    pub const V_NAN: Self = Self(3 << 4);
    pub const V_CVT_STR_UNK: Self = Self(nan_reason(1));
    pub const V_DIV_ZERO: Self = Self(nan_reason(2));
    pub const V_INF_ADD_INF: Self = Self(nan_reason(3));
    pub const V_INF_DIV_INF: Self = Self(nan_reason(4));
    pub const V_INF_MOD: Self = Self(nan_reason(5));
    pub const V_INF_MUL_ZERO: Self = Self(nan_reason(6));
    pub const V_INF_SUB_INF: Self = Self(nan_reason(7));
    pub const V_MOD_ZERO: Self = Self(nan_reason(8));
    pub const V_SQRT_NEG: Self = Self(nan_reason(9));
    pub const V_UNKNOWN_NEG_OVERFLOW: Self = Self(nan_reason(10));
    pub const V_UNKNOWN_POS_OVERFLOW: Self = Self(nan_reason(11));
    pub const V_UNORD_COMP: Self = Self(nan_reason(12));

    /// Flag: the exact relation could not be encoded in the target.
    pub const V_UNREPRESENTABLE: Self = Self(UNREPRESENTABLE_BIT);

    /// Compose a relation and a class into a code.
    #[inline]
    pub const fn compose(relation: Relation, class: ResultClass) -> Self {
        Self(relation.bits() | class.bits())
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn relation(self) -> Relation {
        Relation(self.0 & RELATION_MASK)
    }

    #[inline]
    pub const fn class(self) -> ResultClass {
        ResultClass::from_bits(self.0 & CLASS_MASK)
    }

    #[inline]
    pub const fn is_representable(self) -> bool {
        self.0 & UNREPRESENTABLE_BIT == 0
    }

    /// The same code with the unrepresentable flag set.
    #[inline]
    pub const fn unrepresentable(self) -> Self {
        Self(self.0 | UNREPRESENTABLE_BIT)
    }

    /// The same code with the unrepresentable flag cleared.
    #[inline]
    pub const fn representable(self) -> Self {
        Self(self.0 & !UNREPRESENTABLE_BIT)
    }

    /// Sign of the overflow described by this code.
    ///
    /// Returns -1 for a negative overflow (saturated to the minimum or to
    /// `-inf`), 1 for a positive one and 0 otherwise.
    #[inline]
    pub const fn overflow(self) -> i32 {
        match self.class() {
            ResultClass::Normal => {
                let r = self.representable();
                if r.0 == Self::V_LT_INF.0 {
                    -1
                } else if r.0 == Self::V_GT_SUP.0 {
                    1
                } else {
                    0
                }
            }
            ResultClass::MinusInfinity => {
                if self.0 & OVERFLOW_BIT == 0 && self.relation().bits() == Relation::EQ.bits() {
                    0
                } else {
                    -1
                }
            }
            ResultClass::PlusInfinity => {
                if self.0 & OVERFLOW_BIT == 0 && self.relation().bits() == Relation::EQ.bits() {
                    0
                } else {
                    1
                }
            }
            ResultClass::NotANumber => 0,
        }
    }

    /// True when the exact value fell outside the safe range of the target.
    #[inline]
    pub const fn is_overflow(self) -> bool {
        self.overflow() != 0
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        matches!(self.class(), ResultClass::NotANumber)
    }

    /// True for both infinity classes.
    #[inline]
    pub const fn is_infinity(self) -> bool {
        matches!(
            self.class(),
            ResultClass::MinusInfinity | ResultClass::PlusInfinity
        )
    }

    /// The computed value is exactly the mathematical result.
    #[inline]
    pub const fn is_exact(self) -> bool {
        !self.is_nan()
            && self.is_representable()
            && self.relation().bits() == Relation::EQ.bits()
    }

    /// The relation excludes equality: the computed value is known to differ.
    #[inline]
    pub const fn is_strictly_inexact(self) -> bool {
        !self.is_nan() && self.relation().bits() & Relation::EQ.bits() == 0
    }

    /// The code seen after negating the operands (swap `LT`/`GT`, swap the
    /// infinity classes).
    pub const fn inverse(self) -> Self {
        let class = match self.class() {
            ResultClass::MinusInfinity => ResultClass::PlusInfinity,
            ResultClass::PlusInfinity => ResultClass::MinusInfinity,
            c => c,
        };
        if matches!(class, ResultClass::NotANumber) {
            return self;
        }
        let rest = self.0 & !(CLASS_MASK | RELATION_MASK);
        Self(rest | self.relation().inverse().bits() | class.bits())
    }

    const fn name(self) -> Option<&'static str> {
        let name = match self.representable().0 {
            0 => "V_EMPTY",
            1 => "V_EQ",
            2 => "V_LT",
            4 => "V_GT",
            6 => "V_NE",
            3 => "V_LE",
            5 => "V_GE",
            7 => "V_LGE",
            x if x == Self::V_LT_INF.0 => "V_LT_INF",
            x if x == Self::V_GT_SUP.0 => "V_GT_SUP",
            x if x == Self::V_LT_PLUS_INFINITY.0 => "V_LT_PLUS_INFINITY",
            x if x == Self::V_GT_MINUS_INFINITY.0 => "V_GT_MINUS_INFINITY",
            x if x == Self::V_EQ_MINUS_INFINITY.0 => "V_EQ_MINUS_INFINITY",
            x if x == Self::V_EQ_PLUS_INFINITY.0 => "V_EQ_PLUS_INFINITY",
            x if x == Self::V_NAN.0 => "V_NAN",
            x if x == Self::V_CVT_STR_UNK.0 => "V_CVT_STR_UNK",
            x if x == Self::V_DIV_ZERO.0 => "V_DIV_ZERO",
            x if x == Self::V_INF_ADD_INF.0 => "V_INF_ADD_INF",
            x if x == Self::V_INF_DIV_INF.0 => "V_INF_DIV_INF",
            x if x == Self::V_INF_MOD.0 => "V_INF_MOD",
            x if x == Self::V_INF_MUL_ZERO.0 => "V_INF_MUL_ZERO",
            x if x == Self::V_INF_SUB_INF.0 => "V_INF_SUB_INF",
            x if x == Self::V_MOD_ZERO.0 => "V_MOD_ZERO",
            x if x == Self::V_SQRT_NEG.0 => "V_SQRT_NEG",
            x if x == Self::V_UNKNOWN_NEG_OVERFLOW.0 => "V_UNKNOWN_NEG_OVERFLOW",
            x if x == Self::V_UNKNOWN_POS_OVERFLOW.0 => "V_UNKNOWN_POS_OVERFLOW",
            x if x == Self::V_UNORD_COMP.0 => "V_UNORD_COMP",
            _ => return None,
        };
        Some(name)
    }
}

impl std::ops::BitOr for ResultCode {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) if self.is_representable() => f.write_str(name),
            Some(name) => write!(f, "{} | V_UNREPRESENTABLE", name),
            None => write!(f, "ResultCode({:#x})", self.0),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_and_class_are_orthogonal() {
        let r = ResultCode::compose(Relation::LT, ResultClass::PlusInfinity);
        assert_eq!(r, ResultCode::V_LT_PLUS_INFINITY);
        assert_eq!(r.relation(), Relation::LT);
        assert_eq!(r.class(), ResultClass::PlusInfinity);
    }

    #[test]
    fn test_nan_class_dominates() {
        assert!(ResultCode::V_DIV_ZERO.is_nan());
        assert!(ResultCode::V_SQRT_NEG.is_nan());
        assert!(!ResultCode::V_DIV_ZERO.is_exact());
        assert_eq!(ResultCode::V_DIV_ZERO.class(), ResultClass::NotANumber);
    }

    #[test]
    fn test_overflow_sign() {
        assert_eq!(ResultCode::V_GT_SUP.overflow(), 1);
        assert_eq!(ResultCode::V_LT_INF.overflow(), -1);
        assert_eq!(ResultCode::V_LT_PLUS_INFINITY.overflow(), 1);
        assert_eq!(ResultCode::V_GT_MINUS_INFINITY.overflow(), -1);
        assert_eq!(ResultCode::V_GT_SUP.unrepresentable().overflow(), 1);
        assert_eq!(ResultCode::V_EQ_PLUS_INFINITY.overflow(), 0);
        assert_eq!(ResultCode::V_EQ.overflow(), 0);
        assert_eq!(ResultCode::V_GT.overflow(), 0);
        assert!(!ResultCode::V_NAN.is_overflow());
    }

    #[test]
    fn test_unrepresentable_flag() {
        let r = ResultCode::V_GT_SUP.unrepresentable();
        assert!(!r.is_representable());
        assert_eq!(r.representable(), ResultCode::V_GT_SUP);
        assert_eq!(format!("{:?}", r), "V_GT_SUP | V_UNREPRESENTABLE");
    }

    #[test]
    fn test_inverse() {
        assert_eq!(ResultCode::V_LT.inverse(), ResultCode::V_GT);
        assert_eq!(ResultCode::V_LE.inverse(), ResultCode::V_GE);
        assert_eq!(ResultCode::V_EQ.inverse(), ResultCode::V_EQ);
        assert_eq!(
            ResultCode::V_LT_PLUS_INFINITY.inverse(),
            ResultCode::V_GT_MINUS_INFINITY
        );
        assert_eq!(ResultCode::V_DIV_ZERO.inverse(), ResultCode::V_DIV_ZERO);
    }

    #[test]
    fn test_exactness() {
        assert!(ResultCode::V_EQ.is_exact());
        assert!(ResultCode::V_EQ_PLUS_INFINITY.is_exact());
        assert!(!ResultCode::V_LGE.is_exact());
        assert!(ResultCode::V_LT.is_strictly_inexact());
        assert!(!ResultCode::V_LE.is_strictly_inexact());
    }

    #[test]
    fn test_debug_names() {
        assert_eq!(format!("{:?}", ResultCode::V_DIV_ZERO), "V_DIV_ZERO");
        assert_eq!(format!("{}", ResultCode::V_LT_INF), "V_LT_INF");
        assert_eq!(format!("{:?}", Relation::GE), "GE");
    }
}
