//! Streamlined NTRU Prime on polynomials: key generation, encryption, decryption.

use rand_core::CryptoRng;

use crate::{
    algebra::{r3::R3, rq::Rq},
    params::StreamlinedParams,
};

/// Returns `(h, f, 1/g)` with `h = g / (3f)`.
pub fn key_gen<P: StreamlinedParams, R: CryptoRng + ?Sized>(
    rng: &mut R,
) -> (Rq<P>, R3<P>, R3<P>) {
    // rejection sampling: whether g is invertible leaks nothing about the g that is kept
    let (g, ginv) = loop {
        let g = R3::small_random(rng);
        let (ginv, invertible) = g.recip();
        if bool::from(invertible) {
            break (g, ginv);
        }
    };
    let f = R3::short_random(rng);
    let (finv, invertible) = Rq::recip3(&f);
    // x^p - x - 1 is irreducible mod q, so every non-zero f is invertible
    debug_assert!(bool::from(invertible));
    (finv.mult_r3(&g), f, ginv)
}

/// `Round(h * r)`
pub fn encrypt<P: StreamlinedParams>(r: &R3<P>, h: &Rq<P>) -> Rq<P> {
    h.mult_r3(r).round()
}

/// Recovers `r` from `c = Round(h * r)`. A result of the wrong weight, which only an invalid
/// ciphertext produces, is replaced by a fixed short polynomial.
pub fn decrypt<P: StreamlinedParams>(c: &Rq<P>, f: &R3<P>, ginv: &R3<P>) -> R3<P> {
    let e = R3::from(&c.mult_r3(f).mult3());
    e.mult(ginv).or_default_short()
}
