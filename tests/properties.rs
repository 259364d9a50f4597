// ============================================================================
// Property Tests
// Laws every representation and policy combination must uphold
// ============================================================================

use checked_number::checked::{
    add_assign_r, cmp, div_assign_r, gcdext_assign_r, idiv_assign_r, rem_assign_r, sqrt_assign_r,
};
use checked_number::prelude::*;
use checked_number::repr::ExtendedRange;
use num_integer::Integer;
use proptest::prelude::*;

// ============================================================================
// Construction
// ============================================================================

proptest! {
    #[test]
    fn construction_round_trips_inside_safe_range(
        x in ExtendedRange::<Extended, i32>::MIN..=ExtendedRange::<Extended, i32>::MAX
    ) {
        let v = Checked::<i32, Extended>::try_new(x).unwrap();
        prop_assert_eq!(*v.raw_value(), x);

        let mut to = Checked::<i32, Extended>::zero();
        let r = checked_number::checked::assign_r(&mut to, &x, RoundingDir::UP);
        prop_assert_eq!(r, ResultCode::V_EQ);
        prop_assert_eq!(*to.raw_value(), x);
    }

    #[test]
    fn text_round_trips(x in any::<i64>()) {
        let v = Checked::<i64>::new(x);
        let back: Checked<i64> = v.to_string().parse().unwrap();
        prop_assert_eq!(*back.value(), x);
    }

    #[test]
    fn hex_prefix_matches_base_prefix(x in any::<u64>()) {
        let hex: Checked<u64> = format!("0x{x:x}").parse().unwrap();
        let based: Checked<u64> = format!("16^^{x:X}").parse().unwrap();
        prop_assert_eq!(*hex.value(), x);
        prop_assert_eq!(*based.value(), x);
    }
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn overflow_boundary_with_infinity() {
    let mut to = Checked::<i32, Extended>::zero();
    let max = ExtendedRange::<Extended, i32>::MAX;
    let r = add_assign_r(&mut to, &max, &1i32, RoundingDir::UP);
    assert_eq!(r, ResultCode::V_LT_PLUS_INFINITY);
    assert!(to.is_plus_infinity());
}

#[test]
fn overflow_boundary_without_infinity() {
    let mut to = Checked::<i32, Saturating>::zero();
    let r = add_assign_r(&mut to, &i32::MAX, &1i32, RoundingDir::UP);
    assert_eq!(r, ResultCode::V_GT_SUP.unrepresentable());
    assert_eq!(*to.value(), i32::MAX);

    let mut low = Checked::<i64, CheckOverflow>::zero();
    let r = add_assign_r(&mut low, &i64::MIN, &-1i64, RoundingDir::DOWN);
    assert_eq!(r, ResultCode::V_LT_INF.unrepresentable());
    assert_eq!(*low.value(), i64::MIN);
}

#[test]
fn division_by_zero_stores_nan() {
    let mut to = Checked::<i16, Extended>::zero();
    let r = div_assign_r(&mut to, &7i16, &0i16, RoundingDir::UP);
    assert_eq!(r, ResultCode::V_DIV_ZERO);
    assert_eq!(r.class(), ResultClass::NotANumber);
    assert!(to.is_nan());
    assert_eq!(*to.raw_value(), ExtendedRange::<Extended, i16>::NOT_A_NUMBER);
}

#[test]
fn zero_divisor_under_each_policy() {
    type FloatOp = fn(&mut Checked<f64, Extended>, &f64, &f64, RoundingDir) -> ResultCode;
    type IntOp = fn(&mut Checked<i32, Extended>, &i32, &i32, RoundingDir) -> ResultCode;
    let float_ops: [(&str, FloatOp, ResultCode); 3] = [
        ("div", div_assign_r, ResultCode::V_DIV_ZERO),
        ("idiv", idiv_assign_r, ResultCode::V_DIV_ZERO),
        ("rem", rem_assign_r, ResultCode::V_MOD_ZERO),
    ];
    let int_ops: [(&str, IntOp, ResultCode); 3] = [
        ("div", div_assign_r, ResultCode::V_DIV_ZERO),
        ("idiv", idiv_assign_r, ResultCode::V_DIV_ZERO),
        ("rem", rem_assign_r, ResultCode::V_MOD_ZERO),
    ];

    // Extended: NaN sentinel plus the dedicated reason
    for (name, op, expected) in float_ops {
        let mut to = Checked::<f64, Extended>::new(2.0);
        assert_eq!(op(&mut to, &1.0, &0.0, RoundingDir::UP), expected, "f64 {name}");
        assert!(to.is_nan(), "f64 {name}");
    }
    for (name, op, expected) in int_ops {
        let mut to = Checked::<i32, Extended>::new(2);
        assert_eq!(op(&mut to, &1, &0, RoundingDir::UP), expected, "i32 {name}");
        assert!(to.is_nan(), "i32 {name}");
        assert_eq!(*to.raw_value(), ExtendedRange::<Extended, i32>::NOT_A_NUMBER);
    }

    // CheckOverflow: rejected
    let x = Checked::<f64, CheckOverflow>::new(1.0);
    assert_eq!(x.checked_div(&0.0f64), Err(CheckedError::DivisionByZero));
    assert_eq!(x.checked_idiv(&0.0f64), Err(CheckedError::DivisionByZero));
    assert_eq!(x.checked_rem(&0.0f64), Err(CheckedError::ModByZero));
    let n = Checked::<i32, CheckOverflow>::new(1);
    assert_eq!(n.checked_div(&0i32), Err(CheckedError::DivisionByZero));
    assert_eq!(n.checked_idiv(&0i32), Err(CheckedError::DivisionByZero));
    assert_eq!(n.checked_rem(&0i32), Err(CheckedError::ModByZero));

    // Transparent floats behave natively
    let x = Checked::<f64, Transparent>::new(1.0);
    assert_eq!(*x.checked_div(&0.0f64).unwrap().raw_value(), f64::INFINITY);
    assert_eq!(*x.checked_idiv(&0.0f64).unwrap().raw_value(), f64::INFINITY);
    assert!(x.checked_rem(&0.0f64).unwrap().raw_value().is_nan());
    let minus = Checked::<f64, Transparent>::new(-1.0);
    assert_eq!(*minus.checked_idiv(&0.0f64).unwrap().raw_value(), f64::NEG_INFINITY);

    // Transparent integers report the reason without faulting
    let mut to = Checked::<i32, Transparent>::new(2);
    assert_eq!(div_assign_r(&mut to, &1i32, &0i32, RoundingDir::NATIVE), ResultCode::V_DIV_ZERO);
    assert_eq!(rem_assign_r(&mut to, &1i32, &0i32, RoundingDir::NATIVE), ResultCode::V_MOD_ZERO);
    assert_eq!(*to.raw_value(), 2);
}

// ============================================================================
// Arithmetic Laws
// ============================================================================

proptest! {
    #[test]
    fn sign_matches_comparison_with_zero(x in any::<i64>()) {
        let v = Checked::<i64, Saturating>::new(x);
        let s = v.sgn();
        prop_assert!((-1..=1).contains(&s));
        prop_assert_eq!(s, cmp(&v, &0i64));
    }

    #[test]
    fn float_sign_matches_comparison_with_zero(x in -1e300f64..1e300f64) {
        let v = Checked::<f64, Extended>::new(x);
        prop_assert_eq!(v.sgn(), cmp(&v, &0.0f64));
    }

    #[test]
    fn exact_addition_commutes(a in any::<i32>(), b in any::<i32>()) {
        let (a, b) = (i64::from(a), i64::from(b));
        let mut ab = Checked::<i64>::zero();
        let mut ba = Checked::<i64>::zero();
        prop_assert_eq!(add_assign_r(&mut ab, &a, &b, RoundingDir::NATIVE), ResultCode::V_EQ);
        prop_assert_eq!(add_assign_r(&mut ba, &b, &a, RoundingDir::NATIVE), ResultCode::V_EQ);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn extended_gcd_satisfies_bezout(y in -1_000_000_000i64..1_000_000_000, z in -1_000_000_000i64..1_000_000_000) {
        let (mut g, mut s, mut t) = (Checked::<i64>::zero(), Checked::zero(), Checked::zero());
        let r = gcdext_assign_r(&mut g, &mut s, &mut t, &y, &z, RoundingDir::NATIVE);
        prop_assert_eq!(r, ResultCode::V_EQ);
        prop_assert_eq!(*g.value(), y.gcd(&z));
        prop_assert_eq!(s.value() * y + t.value() * z, *g.value());
    }

    #[test]
    fn integer_square_root_brackets(y in any::<u64>()) {
        let mut root = Checked::<u64>::zero();
        let r = sqrt_assign_r(&mut root, &y, RoundingDir::DOWN);
        prop_assert!(r == ResultCode::V_EQ || r == ResultCode::V_GT);
        let root = u128::from(*root.value());
        let y = u128::from(y);
        prop_assert!(root * root <= y);
        prop_assert!(y < (root + 1) * (root + 1));
    }

    #[test]
    fn integer_square_root_rounds_up_on_request(y in 1u32..) {
        let mut root = Checked::<u32>::zero();
        let r = sqrt_assign_r(&mut root, &y, RoundingDir::UP);
        prop_assert!(r == ResultCode::V_EQ || r == ResultCode::V_LT);
        let root = u64::from(*root.value());
        let y = u64::from(y);
        prop_assert!((root - 1) * (root - 1) < y);
        prop_assert!(y <= root * root);
    }
}

// ============================================================================
// Grammar
// ============================================================================

#[test]
fn grammar_examples() {
    let parse = |text: &str| text.parse::<Checked<i64>>().unwrap();
    assert_eq!(parse("15e2"), 1500i64);
    assert_eq!(parse("15/3"), 5i64);
    assert_eq!(parse("2^^11"), 3i64);
    assert_eq!(parse("36^^z"), 35i64);
    assert_eq!(parse("16^^1*^2"), 256i64);
    assert_eq!(parse("0x1p4"), 16i64);

    for (text, class) in [
        ("inf", ResultClass::PlusInfinity),
        ("+inf", ResultClass::PlusInfinity),
        ("-inf", ResultClass::MinusInfinity),
    ] {
        let v: Checked<i64, Extended> = text.parse().unwrap();
        assert_eq!(v.is_infinity(), if class == ResultClass::PlusInfinity { 1 } else { -1 });
    }
    let nan = checked_number::io::parse_literal("nan").unwrap();
    assert_eq!(nan, checked_number::io::Literal::NotANumber);
}
