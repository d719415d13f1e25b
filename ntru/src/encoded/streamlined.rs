use hybrid_array::{Array, typenum::Unsigned};
use pq_common::{FixedArray, RadixCodec};
use rand_core::CryptoRng;

use super::{Pke, decode, encode};
use crate::{
    algebra::{f3::Small, fq::Fq, r3::R3, rq::Rq},
    params::{Streamlined, StreamlinedParams},
    streamlined,
};

fn poly<P: StreamlinedParams>(f: impl FnMut(usize) -> u16) -> P::Poly<u16> {
    <P::Poly<u16> as FixedArray<u16>>::from_fn(f)
}

fn rq_encode<P: StreamlinedParams>(r: &Rq<P>) -> Array<u8, P::RqBytes> {
    let values = poly::<P>(|i| (*r.0[i] as u16).wrapping_add(P::Q12));
    let moduli = poly::<P>(|_| P::Q);
    let mut out = Array::default();
    encode(values.as_ref(), moduli.as_ref(), &mut out);
    out
}

fn rq_decode<P: StreamlinedParams>(s: &Array<u8, P::RqBytes>) -> Rq<P> {
    let moduli = poly::<P>(|_| P::Q);
    let mut values = poly::<P>(|_| 0);
    decode(s, moduli.as_ref(), values.as_mut());
    Rq::from_fn(|i| Fq::new_i16(values[i].wrapping_sub(P::Q12) as i16))
}

/// Coefficients are multiples of 3, so only `(x + Q12) / 3` is stored. `out` holds
/// `ROUNDED_BYTES` bytes.
fn rounded_encode<P: StreamlinedParams>(r: &Rq<P>, out: &mut [u8]) {
    debug_assert_eq!(out.len(), P::ROUNDED_BYTES);
    // 10923 / 2^15 is 1/3 to within the needed precision
    let values = poly::<P>(|i| {
        ((*r.0[i] as u32).wrapping_add(u32::from(P::Q12)).wrapping_mul(10923) >> 15) as u16
    });
    let moduli = poly::<P>(|_| P::Q.div_ceil(3));
    encode(values.as_ref(), moduli.as_ref(), out);
}

fn rounded_decode<P: StreamlinedParams>(s: &[u8]) -> Rq<P> {
    debug_assert_eq!(s.len(), P::ROUNDED_BYTES);
    let moduli = poly::<P>(|_| P::Q.div_ceil(3));
    let mut values = poly::<P>(|_| 0);
    decode(s, moduli.as_ref(), values.as_mut());
    Rq::from_fn(|i| Fq::new_i16(values[i].wrapping_mul(3).wrapping_sub(P::Q12) as i16))
}

fn small_encode<P: StreamlinedParams>(f: &R3<P>) -> Array<u8, P::SmallBytes> {
    let digits = <P::Poly<u8> as FixedArray<u8>>::from_fn(|i| (*f.0[i] + 1) as u8);
    P::SmallCodec::encode(&digits)
}

/// `s` holds at least `SmallBytes` bytes; only those are read.
fn small_decode<P: StreamlinedParams>(s: &[u8]) -> R3<P> {
    let packed = Array::<u8, P::SmallBytes>::from_fn(|i| s[i]);
    let digits = P::SmallCodec::decode(&packed);
    R3::from_fn(|i| Small::new_i8(digits[i] as i8 - 1))
}

impl<const N: usize> Pke for Streamlined<N>
where
    Self: StreamlinedParams,
{
    type Inputs = R3<Self>;
    type InputsBytes = <Self as StreamlinedParams>::SmallBytes;
    type PublicKeyBytes = <Self as StreamlinedParams>::RqBytes;
    type SecretKeyBytes = <Self as StreamlinedParams>::SecretKeyBytes;
    type CiphertextBytes = <Self as StreamlinedParams>::CiphertextBytes;
    const BODY_BYTES: usize = <Self as StreamlinedParams>::ROUNDED_BYTES;

    fn key_gen<R: CryptoRng + ?Sized>(
        rng: &mut R,
    ) -> (
        Array<u8, Self::SecretKeyBytes>,
        Array<u8, Self::PublicKeyBytes>,
    ) {
        let () = <Self as StreamlinedParams>::CONSISTENT;
        let (h, f, ginv) = streamlined::key_gen::<Self, R>(rng);
        let pk = rq_encode(&h);
        let f = small_encode(&f);
        let ginv = small_encode(&ginv);
        let half = <Self as StreamlinedParams>::SmallBytes::USIZE;
        let sk = Array::from_fn(|i| if i < half { f[i] } else { ginv[i - half] });
        (sk, pk)
    }

    fn encrypt(r: &R3<Self>, pk: &Array<u8, Self::PublicKeyBytes>, body: &mut [u8]) {
        let h = rq_decode(pk);
        rounded_encode(&streamlined::encrypt(r, &h), body);
    }

    fn decrypt(body: &[u8], sk: &Array<u8, Self::SecretKeyBytes>) -> R3<Self> {
        let (f, ginv) = sk.split_at(<Self as StreamlinedParams>::SmallBytes::USIZE);
        let f = small_decode(f);
        let ginv = small_decode(ginv);
        streamlined::decrypt(&rounded_decode(body), &f, &ginv)
    }

    fn inputs_encode(r: &R3<Self>) -> Array<u8, Self::InputsBytes> {
        small_encode(r)
    }

    fn inputs_random<R: CryptoRng + ?Sized>(rng: &mut R) -> R3<Self> {
        R3::short_random(rng)
    }
}
