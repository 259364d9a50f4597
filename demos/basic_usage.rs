// ============================================================================
// Basic Usage Example
// ============================================================================

use checked_number::checked::{div_assign_r, gcdext};
use checked_number::prelude::*;

fn main() {
    // Rejected results are logged at debug level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Checked Number Example ===\n");

    // Overflow under each policy
    println!("i8: 100 + 100");
    let checked = Checked::<i8, CheckOverflow>::new(100);
    match checked.checked_add(&100i8) {
        Ok(v) => println!("  CheckOverflow: {}", v),
        Err(err) => println!("  CheckOverflow: error: {}", err),
    }
    let saturating = Checked::<i8, Saturating>::new(100);
    println!("  Saturating:    {}", saturating + 100i8);
    let extended = Checked::<i8, Extended>::new(100);
    println!("  Extended:      {}", extended + 100i8);

    // Special values under Extended
    println!("\nSpecial values (i32, Extended):");
    let inf = Checked::<i32, Extended>::plus_infinity();
    let five = Checked::<i32, Extended>::new(5);
    println!("  +inf + 5 = {}", inf + five);
    println!("  5 / +inf = {}", five / inf);
    match inf.checked_sub(&inf) {
        Ok(v) => println!("  +inf - +inf = {}", v),
        Err(err) => println!("  +inf - +inf: error: {}", err),
    }

    // Directed rounding brackets the exact value
    println!("\nDirected rounding of 1/3 (f64):");
    let one = Checked::<f64, Transparent>::new(1.0);
    let mut lower = Checked::<f64, Extended>::zero();
    let mut upper = Checked::<f64, Extended>::zero();
    let r_lower = div_assign_r(&mut lower, &one, &3.0f64, RoundingDir::DOWN);
    let r_upper = div_assign_r(&mut upper, &one, &3.0f64, RoundingDir::UP);
    println!("  lower = {:?} ({:?})", lower.raw_value(), r_lower);
    println!("  upper = {:?} ({:?})", upper.raw_value(), r_upper);
    let (_, inexact) = FloatContext::scoped(|| one.checked_div(&3.0f64));
    println!("  inexact flag after 1.0 / 3.0: {}", inexact);

    // Literals
    println!("\nLiterals:");
    for text in ["15e2", "16^^ff", "0x1p4", "22/7", "-inf", "12abc"] {
        match text.parse::<Checked<i64, Extended>>() {
            Ok(v) => println!("  {:>8} -> {}", text, v),
            Err(err) => println!("  {:>8} -> error: {}", text, err),
        }
    }

    let hex = NumericFormat::new().with_base(16).with_base_prefix(true);
    let value = Checked::<u32>::new(48879);
    if let Ok(text) = value.format_with(&hex) {
        println!("  48879 in base 16: {}", text);
    }

    // Number theory
    println!("\nExtended gcd of 240 and 46:");
    if let Ok((g, s, t)) = gcdext(&Checked::<i64>::new(240), &46i64) {
        println!("  g = {}, s = {}, t = {}", g, s, t);
    }

    // API boundary
    println!("\nDecimal bridge:");
    let price = Checked::<f64, Transparent>::new(0.375);
    if let Ok(d) = price.to_decimal() {
        println!("  0.375 as Decimal: {}", d);
    }
}
