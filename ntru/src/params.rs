//! Streamlined NTRU Prime parameter sets (section 3.4 of the NIST round 3 submission).
use core::fmt::Debug;

use hybrid_array::{
    ArraySize,
    sizes::{U2, U897, U994, U1039, U1158, U1184, U1322, U1349, U1455, U1505, U1623, U1847, U2067},
    typenum::Unsigned,
};
use pq_common::{
    FixedArray, RadixCodec,
    radix::{Encode653x3, Encode761x3, Encode857x3, Encode953x3, Encode1013x3, Encode1277x3},
};

/// Length of every hash output and session key
pub const HASH_BYTES: usize = 32;

/// Sizes and moduli of one Streamlined NTRU Prime instance.
///
/// Degrees such as 761 have no `typenum` array size, so polynomials are `[T; p]` arrays named
/// through [`Poly`](Self::Poly). Byte strings that cross the API keep `hybrid_array` sizes.
pub trait StreamlinedParams: 'static + Sized {
    /// Polynomial degree `p`
    const P: usize;
    /// `[T; p]`: the coefficients of one polynomial
    type Poly<T: Copy + Debug + Eq>: FixedArray<T>;
    /// `(p + 3) / 4`: a packed small polynomial
    type SmallBytes: ArraySize;
    /// A packed element of `R/q`: the public key
    type RqBytes: ArraySize;
    /// `2 * SmallBytes`: the packed `f` and `1/g`
    type SecretKeyBytes: ArraySize;
    /// A packed rounded element of `R/q` followed by the confirmation hash
    type CiphertextBytes: ArraySize;
    /// Ternary codec for small polynomials, coefficient `c` stored as digit `c + 1`
    type SmallCodec: RadixCodec<Digit = u8, Digits = Self::Poly<u8>, StrBytes = Self::SmallBytes>;

    /// Length of a packed rounded element of `R/q`: the ciphertext body
    const ROUNDED_BYTES: usize;
    /// Modulus `q`
    const Q: u16;
    /// Weight `w` of short polynomials
    const W: i16;
    /// `(q - 1) / 2`
    const Q12: u16 = (Self::Q - 1) / 2;

    #[doc(hidden)]
    const CONSISTENT: () = {
        assert!(<Self::Poly<u8> as FixedArray<u8>>::LEN == Self::P);
        assert!(Self::SmallBytes::USIZE == Self::P.div_ceil(4));
        assert!(Self::SecretKeyBytes::USIZE == 2 * Self::SmallBytes::USIZE);
        assert!(Self::CiphertextBytes::USIZE == Self::ROUNDED_BYTES + HASH_BYTES);
    };
}

/// Streamlined NTRU Prime of degree `P`.
pub struct Streamlined<const P: usize>;

macro_rules! impl_streamlined {
    ($p:literal, $q:literal, $w:literal, $rq:ty, $rounded:literal, $ct:ty, $codec:ty) => {
        impl StreamlinedParams for Streamlined<$p> {
            const P: usize = $p;
            type Poly<T: Copy + Debug + Eq> = [T; $p];
            type SmallBytes = <$codec as RadixCodec>::StrBytes;
            type RqBytes = $rq;
            type SecretKeyBytes = <Self::SmallBytes as core::ops::Mul<U2>>::Output;
            type CiphertextBytes = $ct;
            type SmallCodec = $codec;
            const ROUNDED_BYTES: usize = $rounded;
            const Q: u16 = $q;
            const W: i16 = $w;
        }
    };
}

impl_streamlined!(653, 4621, 288, U994, 865, U897, Encode653x3);
impl_streamlined!(761, 4591, 286, U1158, 1007, U1039, Encode761x3);
impl_streamlined!(857, 5167, 322, U1322, 1152, U1184, Encode857x3);
impl_streamlined!(953, 6343, 396, U1505, 1317, U1349, Encode953x3);
impl_streamlined!(1013, 7177, 448, U1623, 1423, U1455, Encode1013x3);
impl_streamlined!(1277, 7879, 492, U2067, 1815, U1847, Encode1277x3);
