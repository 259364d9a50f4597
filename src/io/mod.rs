// ============================================================================
// IO Module
// Textual literals: parsing and formatting
// ============================================================================
//
// This module provides:
// - NumericFormat: base, digit case and sign options for output
// - input / input_prefix / parse_literal: the literal grammar
// - output: the inverse of the grammar, sentinels included
//
// Design principles:
// - Parsing is exact: a literal is read into a rational, then rounded once
//   into the target representation
// - A malformed literal is a ResultCode (`V_CVT_STR_UNK`), never a panic

mod format;
pub mod input;
pub mod output;

pub use format::{NumericFormat, MAX_BASE, MIN_BASE};
pub use input::{assign_literal, input, input_prefix, parse_literal, Literal, EXPONENT_LIMIT};
pub use output::output;
