use hybrid_array::typenum::Unsigned;
use pq_common::{Error, Kem};
use rand_core::CryptoRng;

use crate::{
    kem::{Ciphertext, PublicKey, SecretKey, decap, encap, key_gen},
    params::{HASH_BYTES, Streamlined, StreamlinedParams},
};

/// Every parameter set as a byte-buffer [`Kem`].
impl<const N: usize> Kem for Streamlined<N>
where
    Self: StreamlinedParams,
{
    const PUBLIC_KEY_BYTES: usize = <Self as StreamlinedParams>::RqBytes::USIZE;
    const SECRET_KEY_BYTES: usize = SecretKey::<Self>::BYTES;
    const CIPHERTEXT_BYTES: usize = Ciphertext::<Self>::BYTES;
    const BYTES: usize = HASH_BYTES;

    fn keypair<R: CryptoRng + ?Sized>(
        rng: &mut R,
        pk: &mut [u8],
        sk: &mut [u8],
    ) -> Result<(), Error> {
        Error::check_length(pk, Self::PUBLIC_KEY_BYTES)?;
        Error::check_length(sk, Self::SECRET_KEY_BYTES)?;
        let (secret, public) = key_gen::<Self, R>(rng);
        pk.copy_from_slice(public.as_bytes());
        secret.write_to(sk)
    }

    fn encapsulate<R: CryptoRng + ?Sized>(
        rng: &mut R,
        ct: &mut [u8],
        ss: &mut [u8],
        pk: &[u8],
    ) -> Result<(), Error> {
        Error::check_length(ct, Self::CIPHERTEXT_BYTES)?;
        Error::check_length(ss, Self::BYTES)?;
        let pk = PublicKey::<Self>::from_bytes(pk)?;
        let (c, k) = encap(rng, &pk);
        ss.copy_from_slice(&k);
        c.write_to(ct)
    }

    fn decapsulate(ss: &mut [u8], ct: &[u8], sk: &[u8]) -> Result<(), Error> {
        Error::check_length(ss, Self::BYTES)?;
        let ct = Ciphertext::<Self>::from_bytes(ct)?;
        let sk = SecretKey::<Self>::from_bytes(sk)?;
        ss.copy_from_slice(&decap(&ct, &sk));
        Ok(())
    }
}
