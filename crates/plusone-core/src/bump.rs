use std::fmt;

use serde::{Deserialize, Serialize};

/// An integer type that can be incremented by one under an [`OverflowPolicy`].
///
/// Implemented for every primitive integer type.
pub trait Bump: Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static {
    const ZERO: Self;
    /// Name of the type as written in Rust source, e.g. `"i32"`.
    const TYPE_NAME: &'static str;

    /// `self + 1`, or `None` if that overflows.
    fn checked_bump(self) -> Option<Self>;

    /// `self + 1`, clamped to the largest value of the type.
    fn saturating_bump(self) -> Self;

    /// `self + 1`, wrapping around to the type's minimum.
    fn wrapping_bump(self) -> Self;
}

macro_rules! impl_bump {
    ($($ty:ty),* $(,)?) => {$(
        impl Bump for $ty {
            const ZERO: Self = 0;
            const TYPE_NAME: &'static str = stringify!($ty);

            #[inline]
            fn checked_bump(self) -> Option<Self> {
                self.checked_add(1)
            }

            #[inline]
            fn saturating_bump(self) -> Self {
                self.saturating_add(1)
            }

            #[inline]
            fn wrapping_bump(self) -> Self {
                self.wrapping_add(1)
            }
        }
    )*};
}

impl_bump!(i8, i16, i32, i64, i128, isize);
impl_bump!(u8, u16, u32, u64, u128, usize);

/// What incrementing the largest value of an integer type does.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Report an overflow error.
    #[default]
    Checked,
    /// `MAX + 1 == MAX`. The result is positive, so it is kept.
    Saturating,
    /// `MAX + 1 == MIN`. The result is never positive, so it is dropped.
    Wrapping,
}

impl OverflowPolicy {
    /// Increments `value`. Returns `None` only when the policy is
    /// [`OverflowPolicy::Checked`] and the increment overflows.
    #[inline]
    pub fn bump<T: Bump>(self, value: T) -> Option<T> {
        match self {
            OverflowPolicy::Checked => value.checked_bump(),
            OverflowPolicy::Saturating => Some(value.saturating_bump()),
            OverflowPolicy::Wrapping => Some(value.wrapping_bump()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Checked => "checked",
            OverflowPolicy::Saturating => "saturating",
            OverflowPolicy::Wrapping => "wrapping",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
