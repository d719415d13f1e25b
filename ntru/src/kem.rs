//! The Streamlined NTRU Prime KEM: the PKE plus confirmation hash and implicit rejection.

use alloc::vec::Vec;
use core::fmt;
use hybrid_array::{Array, ArraySize, typenum::Unsigned};
use pq_common::{Error, ct};
use rand_core::CryptoRng;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    encoded::Pke,
    hashes::{hash_confirm, hash_prefix, hash_session, prefix},
    params::HASH_BYTES,
};

/// A 32-byte session key
pub type SharedSecret = [u8; HASH_BYTES];

/// Takes the next `N` bytes off the front of `bytes`, which must hold at least that many.
fn take<N: ArraySize>(bytes: &mut &[u8]) -> Array<u8, N> {
    let (head, rest) = bytes.split_at(N::USIZE);
    *bytes = rest;
    Array::from_fn(|i| head[i])
}

fn take_hash(bytes: &mut &[u8]) -> [u8; HASH_BYTES] {
    let (head, rest) = bytes.split_at(HASH_BYTES);
    *bytes = rest;
    core::array::from_fn(|i| head[i])
}

/// An encoded public key.
pub struct PublicKey<P: Pke>(Array<u8, P::PublicKeyBytes>);

impl<P: Pke> PublicKey<P> {
    /// Encoded length
    pub const BYTES: usize = P::PublicKeyBytes::USIZE;

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// # Errors
    /// [`Error::InvalidLength`] unless `bytes.len() == Self::BYTES`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Error::check_length(bytes, Self::BYTES)?;
        Ok(Self(take(&mut &bytes[..])))
    }
}

impl<P: Pke> Clone for PublicKey<P> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<P: Pke> PartialEq for PublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P: Pke> fmt::Debug for PublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.0.as_slice()).finish()
    }
}

/// A secret key with everything decapsulation needs: the PKE secret key, a copy of the public
/// key, the rejection secret and the public key digest.
pub struct SecretKey<P: Pke> {
    sk: Array<u8, P::SecretKeyBytes>,
    pk: Array<u8, P::PublicKeyBytes>,
    rand: Array<u8, P::InputsBytes>,
    digest: [u8; HASH_BYTES],
}

impl<P: Pke> SecretKey<P> {
    /// Encoded length: `sk || pk || rand || digest`
    pub const BYTES: usize = P::SecretKeyBytes::USIZE
        + P::PublicKeyBytes::USIZE
        + P::InputsBytes::USIZE
        + HASH_BYTES;

    /// Writes the encoding into `out`.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] unless `out.len() == Self::BYTES`.
    pub fn write_to(&self, out: &mut [u8]) -> Result<(), Error> {
        Error::check_length(out, Self::BYTES)?;
        let parts: [&[u8]; 4] = [&self.sk, &self.pk, &self.rand, &self.digest];
        let mut pos = 0;
        for part in parts {
            out[pos..pos + part.len()].copy_from_slice(part);
            pos += part.len();
        }
        Ok(())
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::BYTES);
        bytes.extend_from_slice(&self.sk);
        bytes.extend_from_slice(&self.pk);
        bytes.extend_from_slice(&self.rand);
        bytes.extend_from_slice(&self.digest);
        bytes
    }

    /// # Errors
    /// [`Error::InvalidLength`] unless `bytes.len() == Self::BYTES`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Error::check_length(bytes, Self::BYTES)?;
        let mut rest = bytes;
        Ok(Self {
            sk: take(&mut rest),
            pk: take(&mut rest),
            rand: take(&mut rest),
            digest: take_hash(&mut rest),
        })
    }

    /// The public key this secret key decapsulates for.
    #[must_use]
    pub fn public_key(&self) -> PublicKey<P> {
        PublicKey(self.pk.clone())
    }
}

#[cfg(feature = "zeroize")]
impl<P: Pke> Drop for SecretKey<P> {
    fn drop(&mut self) {
        self.sk.as_mut_slice().zeroize();
        self.rand.as_mut_slice().zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<P: Pke> ZeroizeOnDrop for SecretKey<P> {}

/// A ciphertext: the PKE ciphertext body followed by the confirmation hash.
pub struct Ciphertext<P: Pke>(Array<u8, P::CiphertextBytes>);

impl<P: Pke> Ciphertext<P> {
    /// Encoded length
    pub const BYTES: usize = P::CiphertextBytes::USIZE;

    /// The PKE ciphertext
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.0[..P::BODY_BYTES]
    }

    /// The confirmation hash
    #[must_use]
    pub fn confirm(&self) -> &[u8] {
        &self.0[P::BODY_BYTES..]
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Writes the encoding into `out`.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] unless `out.len() == Self::BYTES`.
    pub fn write_to(&self, out: &mut [u8]) -> Result<(), Error> {
        Error::check_length(out, Self::BYTES)?;
        out.copy_from_slice(&self.0);
        Ok(())
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// # Errors
    /// [`Error::InvalidLength`] unless `bytes.len() == Self::BYTES`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Error::check_length(bytes, Self::BYTES)?;
        Ok(Self(take(&mut &bytes[..])))
    }
}

impl<P: Pke> Clone for Ciphertext<P> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<P: Pke> PartialEq for Ciphertext<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P: Pke> fmt::Debug for Ciphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ciphertext")
            .field("body", &self.body())
            .field("confirm", &self.confirm())
            .finish()
    }
}

/// Generates a key pair.
pub fn key_gen<P: Pke, R: CryptoRng + ?Sized>(rng: &mut R) -> (SecretKey<P>, PublicKey<P>) {
    let (sk, pk) = P::key_gen(rng);
    let mut rand = Array::<u8, P::InputsBytes>::default();
    rng.fill_bytes(&mut rand);
    let digest = hash_prefix(prefix::PUBLIC_KEY, &[&pk]);
    (
        SecretKey {
            sk,
            pk: pk.clone(),
            rand,
            digest,
        },
        PublicKey(pk),
    )
}

/// Encrypts `r` and attaches the confirmation hash; also returns the encoded `r`.
fn hide<P: Pke>(
    r: &P::Inputs,
    pk: &Array<u8, P::PublicKeyBytes>,
    digest: &[u8; HASH_BYTES],
) -> (Ciphertext<P>, Array<u8, P::InputsBytes>) {
    let r_enc = P::inputs_encode(r);
    let mut ct = Array::<u8, P::CiphertextBytes>::default();
    let (body, confirm) = ct.split_at_mut(P::BODY_BYTES);
    P::encrypt(r, pk, body);
    confirm.copy_from_slice(&hash_confirm(&r_enc, digest));
    (Ciphertext(ct), r_enc)
}

/// Encapsulates a fresh session key to `pk`.
pub fn encap<P: Pke, R: CryptoRng + ?Sized>(
    rng: &mut R,
    pk: &PublicKey<P>,
) -> (Ciphertext<P>, SharedSecret) {
    let r = P::inputs_random(rng);
    let digest = hash_prefix(prefix::PUBLIC_KEY, &[&pk.0]);
    let (ct, r_enc) = hide::<P>(&r, &pk.0, &digest);
    let k = hash_session(prefix::SESSION, &r_enc, ct.body(), ct.confirm());
    (ct, k)
}

/// Recovers the session key of `ct`.
///
/// Decapsulation re-encrypts the recovered input and compares the result with `ct` in
/// constant time. On a mismatch the session key is derived from the secret rejection value
/// instead, so an invalid ciphertext yields an unrelated pseudorandom key and no error.
pub fn decap<P: Pke>(ct: &Ciphertext<P>, sk: &SecretKey<P>) -> SharedSecret {
    let r = P::decrypt(ct.body(), &sk.sk);
    let (cnew, mut r_enc) = hide::<P>(&r, &sk.pk, &sk.digest);
    // body and confirmation hash together
    let differ = ct::compare(&ct.0, &cnew.0);
    ct::select(&mut r_enc, &sk.rand, differ);
    // prefix::SESSION on a match, prefix::SESSION_REJECT otherwise
    hash_session(prefix::SESSION - differ, &r_enc, ct.body(), ct.confirm())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::Streamlined;

    fn round_trip_test<P: Pke>() {
        let mut rng = rand::rng();
        let (sk, pk) = key_gen::<P, _>(&mut rng);
        let (ct, k_send) = encap(&mut rng, &pk);
        let k_recv = decap(&ct, &sk);
        assert_eq!(k_send, k_recv);
    }

    #[test]
    fn round_trip() {
        round_trip_test::<Streamlined<653>>();
        round_trip_test::<Streamlined<761>>();
        round_trip_test::<Streamlined<857>>();
        round_trip_test::<Streamlined<953>>();
        round_trip_test::<Streamlined<1013>>();
        round_trip_test::<Streamlined<1277>>();
    }

    fn implicit_rejection_test<P: Pke>() {
        let mut rng = rand::rng();
        let (sk, pk) = key_gen::<P, _>(&mut rng);
        let (ct, k_send) = encap(&mut rng, &pk);

        let mut bytes = ct.to_bytes();
        bytes[0] ^= 1;
        let tampered = Ciphertext::<P>::from_bytes(&bytes).unwrap();
        assert_ne!(decap(&tampered, &sk), k_send);

        let mut bytes = ct.to_bytes();
        *bytes.last_mut().unwrap() ^= 0x80;
        let tampered = Ciphertext::<P>::from_bytes(&bytes).unwrap();
        let k_reject = decap(&tampered, &sk);
        assert_ne!(k_reject, k_send);
        // rejection is deterministic in the ciphertext
        assert_eq!(decap(&tampered, &sk), k_reject);
    }

    #[test]
    fn implicit_rejection() {
        implicit_rejection_test::<Streamlined<761>>();
        implicit_rejection_test::<Streamlined<953>>();
    }

    fn serialization_test<P: Pke>() {
        let mut rng = rand::rng();
        let (sk, pk) = key_gen::<P, _>(&mut rng);
        let (ct, k) = encap(&mut rng, &pk);

        let sk2 = SecretKey::<P>::from_bytes(&sk.to_bytes()).unwrap();
        assert_eq!(sk2.to_bytes(), sk.to_bytes());
        assert_eq!(sk2.public_key(), pk);

        let pk2 = PublicKey::<P>::from_bytes(pk.as_bytes()).unwrap();
        assert_eq!(pk2, pk);

        let ct2 = Ciphertext::<P>::from_bytes(&ct.to_bytes()).unwrap();
        assert_eq!(ct2, ct);
        assert_eq!(decap(&ct2, &sk2), k);
    }

    #[test]
    fn secret_key_layout() {
        type P = Streamlined<761>;
        let mut rng = rand::rng();
        let (sk, pk) = key_gen::<P, _>(&mut rng);
        let bytes = sk.to_bytes();
        assert_eq!(bytes.len(), SecretKey::<P>::BYTES);
        let mut written = vec![0u8; SecretKey::<P>::BYTES];
        sk.write_to(&mut written).unwrap();
        assert_eq!(bytes, written);
        // sk (382) || pk (1158) || rand (191) || digest (32)
        assert_eq!(&bytes[382..1540], pk.as_bytes());
        assert_eq!(
            bytes[1731..],
            hash_prefix(prefix::PUBLIC_KEY, &[pk.as_bytes()])
        );
    }

    #[test]
    fn ciphertext_parts() {
        type P = Streamlined<653>;
        let mut rng = rand::rng();
        let (_, pk) = key_gen::<P, _>(&mut rng);
        let (ct, _) = encap(&mut rng, &pk);
        assert_eq!(ct.body().len(), 865);
        assert_eq!(ct.confirm().len(), HASH_BYTES);
        assert_eq!([ct.body(), ct.confirm()].concat(), ct.to_bytes());
        assert_eq!(ct.as_bytes(), ct.to_bytes().as_slice());
    }

    #[test]
    fn serialization() {
        serialization_test::<Streamlined<653>>();
        serialization_test::<Streamlined<1277>>();
    }

    #[test]
    fn sntrup761_sizes() {
        type P = Streamlined<761>;
        assert_eq!(PublicKey::<P>::BYTES, 1158);
        assert_eq!(SecretKey::<P>::BYTES, 1763);
        assert_eq!(Ciphertext::<P>::BYTES, 1039);
    }

    #[test]
    fn wrong_lengths() {
        type P = Streamlined<761>;
        assert_eq!(
            PublicKey::<P>::from_bytes(&[0u8; 1157]),
            Err(Error::InvalidLength {
                expected: 1158,
                actual: 1157
            })
        );
        assert!(Ciphertext::<P>::from_bytes(&[0u8; 1040]).is_err());
        assert!(SecretKey::<P>::from_bytes(&[]).is_err());
    }
}
