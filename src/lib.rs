// ============================================================================
// Checked Number Library
// Policy-driven checked arithmetic with exact result tracking
// ============================================================================

//! # Checked Number
//!
//! Arithmetic over machine integers, floats and arbitrary-precision numbers
//! where every operation reports how its result relates to the exact one.
//!
//! ## Features
//!
//! - **Result codes** describing exact, rounded, overflowed and undefined results
//! - **Compile-time policies** deciding which checks run and which special
//!   values (NaN, +/-infinity) a value may hold
//! - **Extended-range encoding** reserving sentinels inside native integers
//! - **Directed rounding** for division, conversion, square root and parsing
//! - **Zero-cost wrapper**: `Checked<T, P>` is `#[repr(transparent)]` over `T`
//! - **Textual literals** in any base from 2 to 36, fractions and specials
//!
//! ## Example
//!
//! ```rust
//! use checked_number::prelude::*;
//!
//! // Overflow is an error under the default policy
//! let x = Checked::<i8>::new(100);
//! assert_eq!(x.checked_add(&x), Err(CheckedError::PositiveOverflow));
//!
//! // Under Extended it becomes +inf, and arithmetic carries on
//! let y = Checked::<i8, Extended>::new(100);
//! let sum = y + y;
//! assert!(sum.is_plus_infinity());
//! assert_eq!(sum.to_string(), "+inf");
//!
//! // Literals are read exactly, then rounded once
//! let q: Checked<i32, Extended> = "7/2".parse().unwrap();
//! assert_eq!(q, 4); // Extended rounds up
//! ```

pub mod checked;
pub mod constants;
pub mod dispatch;
pub mod fpu;
pub mod io;
pub mod policy;
mod primitives;
pub mod repr;
pub mod result;

// Re-exports for convenience
pub mod prelude {
    pub use crate::checked::Checked;
    pub use crate::constants::BigConstants;
    pub use crate::fpu::FloatContext;
    pub use crate::io::NumericFormat;
    pub use crate::policy::{CheckOverflow, Extended, Policy, Saturating, Transparent};
    pub use crate::repr::{Operand, Repr};
    pub use crate::result::{
        CheckedError, CheckedResult, Relation, ResultClass, ResultCode, RoundingDir,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    #[test]
    fn test_end_to_end_interval_bounds() {
        // Bracket 1/3 from both sides by rounding the same division
        let one = Checked::<f64, Transparent>::new(1.0);
        let mut lower = Checked::<f64, Extended>::zero();
        let mut upper = Checked::<f64, Extended>::zero();
        let r_lower =
            crate::checked::div_assign_r(&mut lower, &one, &3.0f64, RoundingDir::DOWN);
        let r_upper = crate::checked::div_assign_r(&mut upper, &one, &3.0f64, RoundingDir::UP);

        assert_eq!(r_lower, ResultCode::V_GT);
        assert_eq!(r_upper, ResultCode::V_LT);
        assert!(lower < upper);

        let third = BigRational::new(BigInt::from(1), BigInt::from(3));
        let lo = Checked::<BigRational>::convert(&lower);
        let hi = Checked::<BigRational>::convert(&upper);
        assert!(lo < third && third < hi);
    }

    #[test]
    fn test_end_to_end_specials_flow_through() {
        let inf = Checked::<i64, Extended>::plus_infinity();
        let x = Checked::<i64, Extended>::new(5);
        assert!((inf + x).is_plus_infinity());
        assert_eq!(x / inf, 0i64);
        assert_eq!(inf.checked_sub(&inf), Err(CheckedError::InfSubInf));
    }
}
