// ============================================================================
// Rounding Directive
// How a primitive resolves a result that is not exactly representable
// ============================================================================

use std::fmt;

/// Rounding directive passed to every primitive.
///
/// The low three bits select the direction; the remaining bits are modifiers
/// that may be combined with any direction.
///
/// # Example
/// ```
/// use checked_number::result::RoundingDir;
///
/// let dir = RoundingDir::UP.with_strict_relation();
/// assert!(dir.round_up());
/// assert!(dir.is_strict_relation());
/// assert!(dir.inverse().round_down());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundingDir(u32);

impl RoundingDir {
    /// Round toward minus infinity.
    pub const DOWN: Self = Self(0);
    /// Round toward plus infinity.
    pub const UP: Self = Self(1);
    /// The caller does not care about the direction.
    pub const IGNORE: Self = Self(6);
    /// Whatever the representation does natively.
    pub const NATIVE: Self = Self::IGNORE;
    /// The caller asserts the result is exact.
    pub const NOT_NEEDED: Self = Self(7);
    /// The "direct" bound: the direction used for upper approximations.
    pub const DIRECT: Self = Self::UP;
    /// The "inverse" bound: the direction used for lower approximations.
    pub const INVERSE: Self = Self::DOWN;

    const DIR_MASK: u32 = 7;

    /// Modifier: require the strict relation, not just a bound.
    pub const STRICT_RELATION: Self = Self(8);
    /// Assert exactness and require the strict relation.
    pub const CHECK: Self = Self(7 | 8);
    /// Modifier: floating primitives must compute the exact relation even when
    /// no direction is requested.
    pub const FPU_CHECK_INEXACT: Self = Self(16);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The direction component, modifiers stripped.
    #[inline]
    pub const fn direction(self) -> Self {
        Self(self.0 & Self::DIR_MASK)
    }

    #[inline]
    pub const fn round_up(self) -> bool {
        self.0 & Self::DIR_MASK == Self::UP.0
    }

    #[inline]
    pub const fn round_down(self) -> bool {
        self.0 & Self::DIR_MASK == Self::DOWN.0
    }

    #[inline]
    pub const fn round_ignore(self) -> bool {
        self.0 & Self::DIR_MASK == Self::IGNORE.0
    }

    #[inline]
    pub const fn round_not_needed(self) -> bool {
        self.0 & Self::DIR_MASK == Self::NOT_NEEDED.0
    }

    /// Neither `UP` nor `DOWN`: primitives may skip computing the relation.
    #[inline]
    pub const fn round_not_requested(self) -> bool {
        self.round_ignore() || self.round_not_needed()
    }

    #[inline]
    pub const fn round_direct(self) -> bool {
        self.round_up()
    }

    #[inline]
    pub const fn round_inverse(self) -> bool {
        self.round_down()
    }

    #[inline]
    pub const fn is_strict_relation(self) -> bool {
        self.0 & Self::STRICT_RELATION.0 != 0
    }

    #[inline]
    pub const fn fpu_check_inexact(self) -> bool {
        self.0 & Self::FPU_CHECK_INEXACT.0 != 0
    }

    #[inline]
    pub const fn with_strict_relation(self) -> Self {
        Self(self.0 | Self::STRICT_RELATION.0)
    }

    #[inline]
    pub const fn with_fpu_check_inexact(self) -> Self {
        Self(self.0 | Self::FPU_CHECK_INEXACT.0)
    }

    /// Swap `UP` and `DOWN`, keeping modifiers; other directions are unchanged.
    #[inline]
    pub const fn inverse(self) -> Self {
        let modifiers = self.0 & !Self::DIR_MASK;
        if self.round_up() {
            Self(Self::DOWN.0 | modifiers)
        } else if self.round_down() {
            Self(Self::UP.0 | modifiers)
        } else {
            self
        }
    }
}

impl Default for RoundingDir {
    #[inline]
    fn default() -> Self {
        Self::NATIVE
    }
}

impl fmt::Debug for RoundingDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction().0 {
            0 => "DOWN",
            1 => "UP",
            6 => "IGNORE",
            7 => "NOT_NEEDED",
            _ => "INVALID",
        };
        f.write_str(dir)?;
        if self.is_strict_relation() {
            f.write_str(" | STRICT_RELATION")?;
        }
        if self.fpu_check_inexact() {
            f.write_str(" | FPU_CHECK_INEXACT")?;
        }
        Ok(())
    }
}
