//! Arithmetic mod 3

use core::ops::Deref;
use pq_common::ct::smod_u14;
use subtle::{Choice, ConditionallySelectable};

use super::fq::Fq;
use crate::params::StreamlinedParams;

/// An element of `Z/3`, always held as -1, 0 or 1.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
pub struct Small(i8);

impl Small {
    pub const ZERO: Small = Small(0);
    pub const ONE: Small = Small(1);
    pub const MONE: Small = Small(-1);

    #[must_use]
    pub fn new_i8(n: i8) -> Self {
        debug_assert!((-1..=1).contains(&n));
        Small(n)
    }

    /// Reduces `x` to its representative in `-1..=1`. `x` must be below `i32::MAX`.
    #[must_use]
    pub const fn freeze(x: i32) -> Self {
        Small((smod_u14(x + 1, 3) as i8).wrapping_sub(1))
    }
}

/// Read access to the value; there is no way to set it without reducing.
impl Deref for Small {
    type Target = i8;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ConditionallySelectable for Small {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Small(i8::conditional_select(&a.0, &b.0, choice))
    }
}

impl<P: StreamlinedParams> From<Fq<P>> for Small {
    fn from(value: Fq<P>) -> Self {
        Small::freeze(i32::from(*value))
    }
}

#[cfg(test)]
mod test {
    use super::Small;

    #[test]
    fn freeze_matches_rem_euclid() {
        for x in -100_000_i32..100_000 {
            let expected = match x.rem_euclid(3) {
                2 => -1,
                r => r as i8,
            };
            assert_eq!(*Small::freeze(x), expected, "{x}");
        }
    }

    #[test]
    fn freeze_extremes() {
        assert_eq!(*Small::freeze(i32::from(i16::MIN)), 1);
        assert_eq!(*Small::freeze(i32::MAX - 1), 0);
    }
}
