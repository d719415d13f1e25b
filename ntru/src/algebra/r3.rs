use alloc::vec;
use pq_common::{
    FixedArray,
    ct::{negative_mask_i16, nonzero_mask_i16, select_i16, sort_u32},
};
use rand_core::CryptoRng;
use subtle::{Choice, ConditionallySelectable};

use super::{f3::Small, ring_mul, rq::Rq};
use crate::params::StreamlinedParams;

/// A polynomial in `R/3`.
pub struct R3<P: StreamlinedParams>(pub P::Poly<Small>);

impl<P: StreamlinedParams> Default for R3<P> {
    fn default() -> Self {
        Self::from_fn(|_| Small::ZERO)
    }
}

impl<P: StreamlinedParams> Clone for R3<P> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<P: StreamlinedParams> R3<P> {
    pub(crate) fn from_fn(f: impl FnMut(usize) -> Small) -> Self {
        Self(<P::Poly<Small> as FixedArray<Small>>::from_fn(f))
    }

    fn widened(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.as_ref().iter().map(|s| i32::from(**s))
    }

    /// -1 if the Hamming weight differs from `w`, 0 if it equals `w`.
    #[must_use]
    pub fn weight_w_mask(&self) -> i32 {
        let weight: i16 = self.0.as_ref().iter().map(|s| i16::from(**s & 1)).sum();
        nonzero_mask_i16(weight - P::W)
    }

    /// `self * other` in `R/3`.
    #[must_use]
    pub fn mult(&self, other: &Self) -> Self {
        let a: alloc::vec::Vec<i32> = self.widened().collect();
        let b: alloc::vec::Vec<i32> = other.widened().collect();
        let mut fg = vec![0i32; P::P];
        ring_mul(&a, &b, &mut fg);
        Self::from_fn(|i| Small::freeze(fg[i]))
    }

    /// Inverse in `R/3` by the constant-time divstep loop. The [`Choice`] is 1 iff the
    /// inverse exists; otherwise the polynomial is garbage.
    #[must_use]
    pub fn recip(&self) -> (Self, Choice) {
        let p = P::P;
        let mut f = vec![Small::ZERO; p + 1];
        let mut g = vec![Small::ZERO; p + 1];
        let mut v = vec![Small::ZERO; p + 1];
        let mut r = vec![Small::ZERO; p + 1];
        r[0] = Small::ONE;
        f[0] = Small::ONE;
        f[p - 1] = Small::MONE;
        f[p] = Small::MONE;
        for (gi, s) in g[..p].iter_mut().rev().zip(self.0.as_ref()) {
            *gi = *s;
        }

        let mut delta = 1i16;
        for _ in 0..2 * p - 1 {
            v.copy_within(..p, 1);
            v[0] = Small::ZERO;

            let sign = -i32::from(*g[0]) * i32::from(*f[0]);
            let swap = Choice::from(
                (negative_mask_i16(-delta) & nonzero_mask_i16(i16::from(*g[0])) & 1) as u8,
            );
            delta = i16::conditional_select(&delta, &-delta, swap) + 1;
            for (fi, gi) in f.iter_mut().zip(g.iter_mut()) {
                Small::conditional_swap(fi, gi, swap);
            }
            for (vi, ri) in v.iter_mut().zip(r.iter_mut()) {
                Small::conditional_swap(vi, ri, swap);
            }

            for (gi, fi) in g.iter_mut().zip(f.iter()) {
                *gi = Small::freeze(i32::from(**gi) + sign * i32::from(**fi));
            }
            for (ri, vi) in r.iter_mut().zip(v.iter()) {
                *ri = Small::freeze(i32::from(**ri) + sign * i32::from(**vi));
            }
            g.copy_within(1.., 0);
            g[p] = Small::ZERO;
        }

        let sign = *f[0];
        let out = Self::from_fn(|i| Small::new_i8(sign * *v[p - 1 - i]));
        let invertible = Choice::from((nonzero_mask_i16(delta) + 1) as u8);
        (out, invertible)
    }

    /// Short polynomial (weight `w`) from `p` random words, through a sorting network.
    #[must_use]
    pub fn short_from_list(words: &P::Poly<u32>) -> Self {
        let w = P::W as usize;
        let mut l = words.clone();
        let l = l.as_mut();
        // low bits 0b00 or 0b10 for the w non-zero coefficients, 0b01 for the rest
        for x in &mut l[..w] {
            *x &= !1;
        }
        for x in &mut l[w..] {
            *x = (*x & !3) | 1;
        }
        sort_u32(l);
        Self::from_fn(|i| Small::new_i8((l[i] & 3) as i8 - 1))
    }

    /// Uniformly random short polynomial.
    pub fn short_random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let words = <P::Poly<u32> as FixedArray<u32>>::from_fn(|_| rng.next_u32());
        Self::short_from_list(&words)
    }

    /// Uniformly random small polynomial: every coefficient in `-1..=1`.
    pub fn small_random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self::from_fn(|_| Small::new_i8(((((rng.next_u32() & 0x3fff_ffff) * 3) >> 30) as i8) - 1))
    }

    /// `self` unless the weight differs from `w`, in which case the fixed short polynomial
    /// `1, .., 1, 0, .., 0` (w ones). Branch-free in the weight.
    #[must_use]
    pub fn or_default_short(&self) -> Self {
        let bad = (self.weight_w_mask() & 1) as u8;
        let w = P::W as usize;
        Self::from_fn(|i| {
            let mut c = i16::from(*self.0[i]);
            select_i16(&mut c, i16::from(i < w), bad);
            Small::new_i8(c as i8)
        })
    }
}

impl<P: StreamlinedParams> From<&Rq<P>> for R3<P> {
    fn from(value: &Rq<P>) -> Self {
        Self::from_fn(|i| Small::from(value.0[i]))
    }
}
