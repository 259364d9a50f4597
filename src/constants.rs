// ============================================================================
// Big-Number Constants
// Shared arbitrary-precision constants with an explicit lifecycle
// ============================================================================

use num_bigint::BigInt;
use num_traits::{One, Zero};
use parking_lot::{const_rwlock, RwLock};

/// Default precision (in bits) of irrational results over rationals.
pub const DEFAULT_IRRATIONAL_PRECISION: u32 = 128;

static CONSTANTS: RwLock<Option<BigConstants>> = const_rwlock(None);

/// Process-wide arbitrary-precision constants.
///
/// The application owns the lifecycle: [`BigConstants::initialize`] at start,
/// [`BigConstants::finalize`] at teardown. Readers initialize lazily when the
/// application did not, so forgetting `initialize` only costs a lock upgrade.
#[derive(Debug, Clone)]
pub struct BigConstants {
    zero: BigInt,
    one: BigInt,
    irrational_precision: u32,
}

impl BigConstants {
    fn build(irrational_precision: u32) -> Self {
        Self {
            zero: BigInt::zero(),
            one: BigInt::one(),
            irrational_precision,
        }
    }

    /// Create the shared constants. Calling it twice keeps the first set.
    pub fn initialize() {
        let mut slot = CONSTANTS.write();
        if slot.is_none() {
            *slot = Some(Self::build(DEFAULT_IRRATIONAL_PRECISION));
            tracing::trace!("big-number constants initialized");
        }
    }

    /// Drop the shared constants.
    pub fn finalize() {
        if CONSTANTS.write().take().is_some() {
            tracing::trace!("big-number constants finalized");
        }
    }

    pub fn is_initialized() -> bool {
        CONSTANTS.read().is_some()
    }

    /// Run `f` against the shared constants, creating them if needed.
    pub fn with<R>(f: impl FnOnce(&BigConstants) -> R) -> R {
        if let Some(constants) = CONSTANTS.read().as_ref() {
            return f(constants);
        }
        Self::initialize();
        let slot = CONSTANTS.read();
        match slot.as_ref() {
            Some(constants) => f(constants),
            // finalized concurrently; fall back to a private copy
            None => f(&Self::build(DEFAULT_IRRATIONAL_PRECISION)),
        }
    }

    pub fn zero(&self) -> &BigInt {
        &self.zero
    }

    pub fn one(&self) -> &BigInt {
        &self.one
    }

    /// Bits of precision used when a rational result is irrational.
    pub fn irrational_precision() -> u32 {
        Self::with(|c| c.irrational_precision)
    }

    pub fn set_irrational_precision(bits: u32) {
        Self::initialize();
        if let Some(constants) = CONSTANTS.write().as_mut() {
            constants.irrational_precision = bits;
            tracing::trace!(bits, "irrational precision updated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_initialization() {
        let one = BigConstants::with(|c| c.one().clone());
        assert_eq!(one, BigInt::one());
        assert!(BigConstants::with(|c| c.zero().is_zero()));
        assert!(BigConstants::irrational_precision() > 0);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        BigConstants::initialize();
        BigConstants::initialize();
        assert!(BigConstants::is_initialized());
    }
}
