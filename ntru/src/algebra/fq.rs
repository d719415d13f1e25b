//! Arithmetic mod q

use core::{fmt, marker::PhantomData, ops::Deref};
use pq_common::ct::smod_u14;
use subtle::{Choice, ConditionallySelectable};

use crate::params::StreamlinedParams;

/// An element of `Z/q`, always held in `-Q12..=Q12`.
pub struct Fq<P> {
    value: i16,
    marker: PhantomData<fn() -> P>,
}

// `P` is a marker, so none of these may require anything of it
impl<P> Clone for Fq<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Fq<P> {}

impl<P> Default for Fq<P> {
    fn default() -> Self {
        Self::from_raw(0)
    }
}

impl<P> PartialEq for Fq<P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<P> Eq for Fq<P> {}

impl<P> fmt::Debug for Fq<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fq").field(&self.value).finish()
    }
}

/// Read access to the value; there is no way to set it without reducing.
impl<P> Deref for Fq<P> {
    type Target = i16;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<P> ConditionallySelectable for Fq<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_raw(i16::conditional_select(&a.value, &b.value, choice))
    }
}

impl<P> Fq<P> {
    const fn from_raw(value: i16) -> Self {
        Fq {
            value,
            marker: PhantomData,
        }
    }
}

impl<P: StreamlinedParams> Fq<P> {
    /// Wraps a value already in `-Q12..=Q12`.
    #[must_use]
    pub fn new_i16(n: i16) -> Self {
        debug_assert!(n.unsigned_abs() <= P::Q12);
        Self::from_raw(n)
    }

    /// Reduces `x` to its representative in `-Q12..=Q12`. `x` must not be within `Q12` of
    /// `i32::MAX`.
    #[must_use]
    pub const fn freeze(x: i32) -> Self {
        debug_assert!(x <= i32::MAX - P::Q12 as i32);
        Self::from_raw(smod_u14(x + P::Q12 as i32, P::Q).wrapping_sub(P::Q12) as i16)
    }

    /// Multiplicative inverse by Fermat: `a^(q-2)`. The inverse of zero is zero.
    #[must_use]
    pub const fn recip(a: Self) -> Self {
        let mut ai = a;
        let mut i = 1;
        while i < P::Q - 2 {
            ai = Self::freeze(a.value as i32 * ai.value as i32);
            i += 1;
        }
        ai
    }
}
