use alloc::{vec, vec::Vec};
use pq_common::{
    FixedArray,
    ct::{negative_mask_i16, nonzero_mask_i16},
};
use subtle::{Choice, ConditionallySelectable};

use super::{f3::Small, fq::Fq, r3::R3, ring_mul};
use crate::params::StreamlinedParams;

/// A polynomial in `R/q`.
pub struct Rq<P: StreamlinedParams>(pub P::Poly<Fq<P>>);

impl<P: StreamlinedParams> Default for Rq<P> {
    fn default() -> Self {
        Self::from_fn(|_| Fq::default())
    }
}

impl<P: StreamlinedParams> Rq<P> {
    pub(crate) fn from_fn(f: impl FnMut(usize) -> Fq<P>) -> Self {
        Self(<P::Poly<Fq<P>> as FixedArray<Fq<P>>>::from_fn(f))
    }

    /// `self * other` in `R/q`.
    #[must_use]
    pub fn mult_r3(&self, other: &R3<P>) -> Self {
        let a: Vec<i32> = self.0.as_ref().iter().map(|x| i32::from(**x)).collect();
        let b: Vec<i32> = other.0.as_ref().iter().map(|s| i32::from(**s)).collect();
        let mut fg = vec![0i32; P::P];
        ring_mul(&a, &b, &mut fg);
        Self::from_fn(|i| Fq::freeze(fg[i]))
    }

    /// `3 * self`
    #[must_use]
    pub fn mult3(&self) -> Self {
        Self::from_fn(|i| Fq::freeze(i32::from(*self.0[i]) * 3))
    }

    /// `1 / (3 * f)` in `R/q` by the constant-time divstep loop. The [`Choice`] is 1 iff the
    /// inverse exists.
    #[must_use]
    pub fn recip3(f_in: &R3<P>) -> (Self, Choice) {
        let p = P::P;
        let one = Fq::<P>::new_i16(1);
        let mut f = vec![Fq::default(); p + 1];
        let mut g = vec![Fq::default(); p + 1];
        let mut v: Vec<Fq<P>> = vec![Fq::default(); p + 1];
        let mut r = vec![Fq::default(); p + 1];
        r[0] = Fq::recip(Fq::new_i16(3));
        f[0] = one;
        f[p - 1] = Fq::new_i16(-1);
        f[p] = Fq::new_i16(-1);
        for (gi, s) in g[..p].iter_mut().rev().zip(f_in.0.as_ref()) {
            *gi = Fq::new_i16(i16::from(**s));
        }

        let mut delta = 1i16;
        for _ in 0..2 * p - 1 {
            v.copy_within(..p, 1);
            v[0] = Fq::default();

            let swap = Choice::from(
                (negative_mask_i16(-delta) & nonzero_mask_i16(*g[0]) & 1) as u8,
            );
            delta = i16::conditional_select(&delta, &-delta, swap) + 1;
            for (fi, gi) in f.iter_mut().zip(g.iter_mut()) {
                Fq::conditional_swap(fi, gi, swap);
            }
            for (vi, ri) in v.iter_mut().zip(r.iter_mut()) {
                Fq::conditional_swap(vi, ri, swap);
            }

            let f0 = i32::from(*f[0]);
            let g0 = i32::from(*g[0]);
            for (gi, fi) in g.iter_mut().zip(f.iter()) {
                *gi = Fq::freeze(f0 * i32::from(**gi) - g0 * i32::from(**fi));
            }
            for (ri, vi) in r.iter_mut().zip(v.iter()) {
                *ri = Fq::freeze(f0 * i32::from(**ri) - g0 * i32::from(**vi));
            }
            g.copy_within(1.., 0);
            g[p] = Fq::default();
        }

        let scale = i32::from(*Fq::recip(f[0]));
        let out = Self::from_fn(|i| Fq::freeze(scale * i32::from(*v[p - 1 - i])));
        let invertible = Choice::from((nonzero_mask_i16(delta) + 1) as u8);
        (out, invertible)
    }

    /// Rounds every coefficient to the nearest multiple of 3.
    #[must_use]
    pub fn round(&self) -> Self {
        Self::from_fn(|i| {
            let x = self.0[i];
            Fq::new_i16(*x - i16::from(*Small::from(x)))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::Streamlined;
    use rand::{SeedableRng, rngs::StdRng};

    type P761 = Streamlined<761>;

    #[test]
    fn recip3_inverts_short() {
        let mut rng = StdRng::seed_from_u64(4591);
        let f = R3::<P761>::short_random(&mut rng);
        let (finv, ok) = Rq::recip3(&f);
        assert!(bool::from(ok));
        // finv * f * 3 == 1
        let one = finv.mult_r3(&f).mult3();
        assert_eq!(*one.0[0], 1);
        assert!(one.0[1..].iter().all(|c| **c == 0));
    }

    #[test]
    fn round_hits_multiples_of_three() {
        let mut rng = StdRng::seed_from_u64(3);
        let f = R3::<P761>::short_random(&mut rng);
        let (h, _) = Rq::recip3(&f);
        let rounded = h.round();
        for (x, y) in h.0.iter().zip(rounded.0.iter()) {
            assert_eq!(**y % 3, 0);
            assert!((**x - **y).abs() <= 1);
        }
    }
}
