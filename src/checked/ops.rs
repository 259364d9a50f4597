// ============================================================================
// Operators
// std::ops and comparison traits for Checked values
// ============================================================================
//
// Operators have nowhere to report an error, so a rejected result panics with
// the policy's error. Use the checked_* methods to handle it instead.

use super::Checked;
use crate::dispatch;
use crate::policy::{Policy, Transparent};
use crate::repr::{Operand, Repr};
use crate::result::{ResultCode, RoundingDir};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

// ============================================================================
// Arithmetic Operators
// ============================================================================

macro_rules! binary_operator {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $checked:ident, $what:literal;)*) => {$(
        impl<T: Repr, P: Policy, R: Operand<Repr = T>> $trait<R> for Checked<T, P> {
            type Output = Checked<T, P>;

            #[inline]
            fn $method(self, rhs: R) -> Self::Output {
                self.$checked(&rhs)
                    .unwrap_or_else(|err| panic!(concat!("checked ", $what, " failed: {}"), err))
            }
        }

        impl<T: Repr, P: Policy, R: Operand<Repr = T>> $trait<R> for &Checked<T, P> {
            type Output = Checked<T, P>;

            #[inline]
            fn $method(self, rhs: R) -> Self::Output {
                self.$checked(&rhs)
                    .unwrap_or_else(|err| panic!(concat!("checked ", $what, " failed: {}"), err))
            }
        }

        impl<T: Repr, P: Policy, R: Operand<Repr = T>> $assign_trait<R> for Checked<T, P> {
            #[inline]
            fn $assign_method(&mut self, rhs: R) {
                *self = self
                    .$checked(&rhs)
                    .unwrap_or_else(|err| panic!(concat!("checked ", $what, " failed: {}"), err));
            }
        }
    )*};
}

binary_operator! {
    Add::add, AddAssign::add_assign => checked_add, "addition";
    Sub::sub, SubAssign::sub_assign => checked_sub, "subtraction";
    Mul::mul, MulAssign::mul_assign => checked_mul, "multiplication";
    Div::div, DivAssign::div_assign => checked_div, "division";
    Rem::rem, RemAssign::rem_assign => checked_rem, "remainder";
}

impl<T: Repr, P: Policy> Neg for Checked<T, P> {
    type Output = Checked<T, P>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg()
            .unwrap_or_else(|err| panic!("checked negation failed: {err}"))
    }
}

impl<T: Repr, P: Policy> Neg for &Checked<T, P> {
    type Output = Checked<T, P>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg()
            .unwrap_or_else(|err| panic!("checked negation failed: {err}"))
    }
}

// ============================================================================
// Native Left-Hand Side
// ============================================================================

/// `x op y` with a bare left operand, judged by the policy of `y`.
fn native_lhs<T: Repr, P: Policy>(
    x: &T,
    y: &Checked<T, P>,
    op: fn(&mut T, &T, &T, RoundingDir) -> ResultCode,
    what: &str,
) -> Checked<T, P> {
    Checked::<T, P>::compute(P::ROUND_DEFAULT_OPERATOR, |to, dir| op(to, x, y.raw_value(), dir))
        .unwrap_or_else(|err| panic!("checked {what} failed: {err}"))
}

macro_rules! native_operators {
    ($($t:ty),*) => {$(
        impl<P: Policy> Add<Checked<$t, P>> for $t {
            type Output = Checked<$t, P>;

            fn add(self, rhs: Checked<$t, P>) -> Self::Output {
                native_lhs(&self, &rhs, dispatch::add::<$t, P, Transparent, P>, "addition")
            }
        }

        impl<P: Policy> Sub<Checked<$t, P>> for $t {
            type Output = Checked<$t, P>;

            fn sub(self, rhs: Checked<$t, P>) -> Self::Output {
                native_lhs(&self, &rhs, dispatch::sub::<$t, P, Transparent, P>, "subtraction")
            }
        }

        impl<P: Policy> Mul<Checked<$t, P>> for $t {
            type Output = Checked<$t, P>;

            fn mul(self, rhs: Checked<$t, P>) -> Self::Output {
                native_lhs(&self, &rhs, dispatch::mul::<$t, P, Transparent, P>, "multiplication")
            }
        }

        impl<P: Policy> Div<Checked<$t, P>> for $t {
            type Output = Checked<$t, P>;

            fn div(self, rhs: Checked<$t, P>) -> Self::Output {
                native_lhs(&self, &rhs, dispatch::div::<$t, P, Transparent, P>, "division")
            }
        }

        impl<P: Policy> Rem<Checked<$t, P>> for $t {
            type Output = Checked<$t, P>;

            fn rem(self, rhs: Checked<$t, P>) -> Self::Output {
                native_lhs(&self, &rhs, dispatch::rem::<$t, P, Transparent, P>, "remainder")
            }
        }

        impl<P: Policy> PartialEq<Checked<$t, P>> for $t {
            #[inline]
            fn eq(&self, other: &Checked<$t, P>) -> bool {
                other == self
            }
        }

        impl<P: Policy> PartialOrd<Checked<$t, P>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Checked<$t, P>) -> Option<Ordering> {
                dispatch::cmp::<$t, Transparent, P>(self, other.raw_value())
            }
        }
    )*};
}

native_operators!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, BigInt, BigRational);

// ============================================================================
// Comparison
// ============================================================================

/// Equality through the dispatcher: NaN equals nothing, infinities equal
/// themselves across policies.
impl<T: Repr, P: Policy, R: Operand<Repr = T>> PartialEq<R> for Checked<T, P> {
    #[inline]
    fn eq(&self, other: &R) -> bool {
        dispatch::cmp::<T, P, R::Policy>(self.raw_value(), other.raw()) == Some(Ordering::Equal)
    }
}

impl<T: Repr, P: Policy, R: Operand<Repr = T>> PartialOrd<R> for Checked<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &R) -> Option<Ordering> {
        dispatch::cmp::<T, P, R::Policy>(self.raw_value(), other.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CheckOverflow, Extended, Saturating};

    #[test]
    fn test_operators() {
        let a = Checked::<i32>::new(7);
        let b = Checked::<i32>::new(3);
        assert_eq!(a + b, 10);
        assert_eq!(a - b, 4);
        assert_eq!(a * b, 21);
        assert_eq!(a / b, 2);
        assert_eq!(a % b, 1);
        assert_eq!(-a, -7);
        assert_eq!(&a + 1, 8);
    }

    #[test]
    fn test_mixed_policies_and_natives() {
        let a = Checked::<i32, Extended>::new(7);
        let b = Checked::<i32, Saturating>::new(3);
        assert_eq!(a + b, 10);
        assert_eq!(10i32 - a, 3);
        assert_eq!(2.0f64 * Checked::<f64, Transparent>::new(1.5), 3.0f64);
        assert_eq!(BigInt::from(5) - Checked::<BigInt>::new(BigInt::from(7)), BigInt::from(-2));
    }

    #[test]
    fn test_compound_assignment() {
        let mut x = Checked::<u16>::new(10);
        x += 5u16;
        x *= Checked::<u16, Saturating>::new(2);
        x -= 1u16;
        x /= 2u16;
        x %= 5u16;
        assert_eq!(x, 4u16);
    }

    #[test]
    #[should_panic(expected = "checked addition failed: positive overflow")]
    fn test_operator_panics_on_overflow() {
        let _ = Checked::<i8, CheckOverflow>::new(i8::MAX) + 1i8;
    }

    #[test]
    #[should_panic(expected = "checked division failed: division by zero")]
    fn test_native_lhs_panics_on_division_by_zero() {
        let _ = 1i64 / Checked::<i64>::zero();
    }

    #[test]
    fn test_saturating_operator() {
        let x = Checked::<u8, Saturating>::new(200) + 100u8;
        assert_eq!(x, u8::MAX);
    }

    #[test]
    fn test_comparisons() {
        let x = Checked::<i32, Extended>::new(3);
        assert!(x < 4);
        assert!(x >= Checked::<i32, CheckOverflow>::new(3));
        assert!(5i32 > x);
        assert!(3i32 == x);
        assert!(Checked::<i32, Extended>::minus_infinity() < i32::MIN);
        assert!(Checked::<i32, Extended>::plus_infinity() == Checked::<i32, Extended>::plus_infinity());
    }

    #[test]
    fn test_nan_is_unordered() {
        let nan = Checked::<i32, Extended>::nan();
        assert!(nan != nan);
        assert!(!(nan < 0));
        assert!(!(nan >= 0));
        assert_eq!(nan.partial_cmp(&0), None);
    }
}
