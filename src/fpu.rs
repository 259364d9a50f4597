// ============================================================================
// Floating Context
// Per-thread record of inexact floating-point results
// ============================================================================
//
// Hardware exception flags are ambient global state and not reachable from
// safe Rust. Floating primitives instead derive the exact relation of every
// result they compute and raise the flag here when it is not `EQ`.

use std::cell::Cell;

thread_local! {
    static INEXACT: Cell<bool> = const { Cell::new(false) };
}

/// Handle on the calling thread's floating context.
///
/// # Example
/// ```
/// use checked_number::fpu::FloatContext;
/// use checked_number::prelude::*;
///
/// let (_, inexact) = FloatContext::scoped(|| {
///     let third = Checked::<f64, Extended>::new(1.0) / 3.0;
///     third
/// });
/// assert!(inexact);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatContext;

impl FloatContext {
    /// Whether an inexact result was recorded since the last reset.
    #[inline]
    pub fn is_inexact() -> bool {
        INEXACT.with(Cell::get)
    }

    #[inline]
    pub fn reset_inexact() {
        INEXACT.with(|flag| flag.set(false));
    }

    #[inline]
    pub(crate) fn raise_inexact() {
        INEXACT.with(|flag| flag.set(true));
    }

    /// Run `f` with a cleared flag and report whether it produced an inexact
    /// result. The flag seen by the caller afterwards is the union of both.
    pub fn scoped<R>(f: impl FnOnce() -> R) -> (R, bool) {
        let outer = INEXACT.with(|flag| flag.replace(false));
        let value = f();
        let inner = INEXACT.with(|flag| flag.replace(outer || flag.get()));
        (value, inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_and_reset() {
        FloatContext::reset_inexact();
        assert!(!FloatContext::is_inexact());
        FloatContext::raise_inexact();
        assert!(FloatContext::is_inexact());
        FloatContext::reset_inexact();
        assert!(!FloatContext::is_inexact());
    }

    #[test]
    fn test_scoped_merges_flags() {
        FloatContext::reset_inexact();
        let ((), inner) = FloatContext::scoped(FloatContext::raise_inexact);
        assert!(inner);
        assert!(FloatContext::is_inexact());

        FloatContext::reset_inexact();
        let ((), inner) = FloatContext::scoped(|| {});
        assert!(!inner);
        assert!(!FloatContext::is_inexact());
    }
}
