//! Acceptance checks for key encapsulation mechanisms.

use pq_common::Kem;
use rand_core::CryptoRng;

use crate::{
    canary::CanaryBuffer,
    config::HarnessConfig,
    error::{AcceptanceError, BufferKind, Call},
};

struct KeyPair {
    pk: Vec<u8>,
    sk: Vec<u8>,
}

impl KeyPair {
    fn generate<K: Kem, R: CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, AcceptanceError> {
        let mut pk = vec![0u8; K::PUBLIC_KEY_BYTES];
        let mut sk = vec![0u8; K::SECRET_KEY_BYTES];
        K::keypair(rng, &mut pk, &mut sk)
            .map_err(|e| AcceptanceError::failed(Call::Keypair, e))?;
        Ok(Self { pk, sk })
    }

    fn encapsulate<K: Kem, R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Vec<u8>, Vec<u8>), AcceptanceError> {
        let mut ct = vec![0u8; K::CIPHERTEXT_BYTES];
        let mut ss = vec![0u8; K::BYTES];
        K::encapsulate(rng, &mut ct, &mut ss, &self.pk)
            .map_err(|e| AcceptanceError::failed(Call::Encapsulate, e))?;
        Ok((ct, ss))
    }

    fn decapsulate<K: Kem>(&self, ct: &[u8]) -> Result<Vec<u8>, AcceptanceError> {
        let mut ss = vec![0u8; K::BYTES];
        K::decapsulate(&mut ss, ct, &self.sk)
            .map_err(|e| AcceptanceError::failed(Call::Decapsulate, e))?;
        Ok(ss)
    }
}

/// Encapsulates to a fresh key pair and decapsulates; both sides must agree.
///
/// # Errors
/// [`AcceptanceError::SharedSecretMismatch`] if they do not, or the failure of a call.
pub fn kem_round_trip<K: Kem, R: CryptoRng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(), AcceptanceError> {
    for _ in 0..config.iterations {
        let keys = KeyPair::generate::<K, R>(rng)?;
        let (ct, sent) = keys.encapsulate::<K, R>(rng)?;
        if keys.decapsulate::<K>(&ct)? != sent {
            return Err(AcceptanceError::SharedSecretMismatch);
        }
    }
    Ok(())
}

/// Decapsulates with the secret key of an unrelated key pair, which must not recover the
/// shared secret.
///
/// # Errors
/// [`AcceptanceError::WrongKeyAgreed`] if it does, or the failure of a call.
pub fn kem_wrong_key<K: Kem, R: CryptoRng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(), AcceptanceError> {
    for _ in 0..config.iterations {
        let keys = KeyPair::generate::<K, R>(rng)?;
        let other = KeyPair::generate::<K, R>(rng)?;
        let (ct, sent) = keys.encapsulate::<K, R>(rng)?;
        if other.decapsulate::<K>(&ct)? == sent {
            return Err(AcceptanceError::WrongKeyAgreed);
        }
    }
    Ok(())
}

/// Flips one random bit of the ciphertext, which must then decapsulate to a different
/// shared secret without an error.
///
/// # Errors
/// [`AcceptanceError::TamperedCiphertextAgreed`] if the secret is unchanged, or the failure
/// of a call.
pub fn kem_tampered_ciphertext<K: Kem, R: CryptoRng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(), AcceptanceError> {
    for _ in 0..config.iterations {
        let keys = KeyPair::generate::<K, R>(rng)?;
        let (mut ct, sent) = keys.encapsulate::<K, R>(rng)?;
        let bit = rng.next_u64() as usize % (8 * ct.len());
        ct[bit / 8] ^= 1 << (bit % 8);
        if keys.decapsulate::<K>(&ct)? == sent {
            return Err(AcceptanceError::TamperedCiphertextAgreed);
        }
    }
    Ok(())
}

/// `config.iterations` keypair / encapsulate / decapsulate cycles over [`CanaryBuffer`]s,
/// checking every canary after every call.
///
/// # Errors
/// The first property the scheme violates.
pub fn kem_guarded_cycles<K: Kem, R: CryptoRng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(), AcceptanceError> {
    let mut pk = CanaryBuffer::new(BufferKind::PublicKey, K::PUBLIC_KEY_BYTES);
    let mut sk = CanaryBuffer::new(BufferKind::SecretKey, K::SECRET_KEY_BYTES);
    let mut ct = CanaryBuffer::new(BufferKind::Ciphertext, K::CIPHERTEXT_BYTES);
    let mut sent = CanaryBuffer::new(BufferKind::SharedSecret, K::BYTES);
    let mut received = CanaryBuffer::new(BufferKind::SharedSecret, K::BYTES);

    for _ in 0..config.iterations {
        K::keypair(rng, pk.as_mut_slice(), sk.as_mut_slice())
            .map_err(|e| AcceptanceError::failed(Call::Keypair, e))?;
        CanaryBuffer::check_all(Call::Keypair, &[&pk, &sk, &ct, &sent, &received])?;

        K::encapsulate(rng, ct.as_mut_slice(), sent.as_mut_slice(), pk.as_slice())
            .map_err(|e| AcceptanceError::failed(Call::Encapsulate, e))?;
        CanaryBuffer::check_all(Call::Encapsulate, &[&pk, &sk, &ct, &sent, &received])?;

        K::decapsulate(received.as_mut_slice(), ct.as_slice(), sk.as_slice())
            .map_err(|e| AcceptanceError::failed(Call::Decapsulate, e))?;
        CanaryBuffer::check_all(Call::Decapsulate, &[&pk, &sk, &ct, &sent, &received])?;

        if sent.as_slice() != received.as_slice() {
            return Err(AcceptanceError::SharedSecretMismatch);
        }
    }
    Ok(())
}

/// Runs [`kem_round_trip`], [`kem_wrong_key`], [`kem_tampered_ciphertext`] and
/// [`kem_guarded_cycles`] in turn.
///
/// # Errors
/// The first property the scheme violates.
pub fn run_kem_suite<K: Kem, R: CryptoRng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(), AcceptanceError> {
    kem_round_trip::<K, R>(rng, config)?;
    kem_wrong_key::<K, R>(rng, config)?;
    kem_tampered_ciphertext::<K, R>(rng, config)?;
    kem_guarded_cycles::<K, R>(rng, config)
}
