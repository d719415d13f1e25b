//! Acceptance checks for signature schemes.

use pq_common::SignatureScheme;
use rand_core::CryptoRng;

use crate::{
    canary::CanaryBuffer,
    config::HarnessConfig,
    error::{AcceptanceError, BufferKind, Call},
};

fn keypair<S: SignatureScheme, R: CryptoRng + ?Sized>(
    rng: &mut R,
) -> Result<(Vec<u8>, Vec<u8>), AcceptanceError> {
    let mut pk = vec![0u8; S::PUBLIC_KEY_BYTES];
    let mut sk = vec![0u8; S::SECRET_KEY_BYTES];
    S::keypair(rng, &mut pk, &mut sk).map_err(|e| AcceptanceError::failed(Call::Keypair, e))?;
    Ok((pk, sk))
}

fn sign<S: SignatureScheme, R: CryptoRng + ?Sized>(
    rng: &mut R,
    sm: &mut [u8],
    m: &[u8],
    sk: &[u8],
) -> Result<usize, AcceptanceError> {
    let smlen = S::sign(rng, sm, m, sk).map_err(|e| AcceptanceError::failed(Call::Sign, e))?;
    AcceptanceError::check_reported(Call::Sign, BufferKind::SignedMessage, smlen, sm.len())
}

/// Signs a random message under a fresh key pair, opens it into a separate buffer and
/// checks the recovered message.
///
/// # Errors
/// The first property the scheme violates.
pub fn sign_round_trip<S: SignatureScheme, R: CryptoRng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(), AcceptanceError> {
    let (pk, sk) = keypair::<S, R>(rng)?;

    let mut m = vec![0u8; config.message_bytes];
    rng.fill_bytes(&mut m);
    let mut sm = vec![0u8; m.len() + S::BYTES];
    let smlen = sign::<S, R>(rng, &mut sm, &m, &sk)?;

    let mut opened = vec![0u8; smlen];
    let mlen = S::open(&mut opened, &sm[..smlen], &pk)
        .map_err(|e| AcceptanceError::failed(Call::Open, e))?;
    let mlen = AcceptanceError::check_reported(Call::Open, BufferKind::Message, mlen, smlen)?;
    if opened[..mlen] != m[..] {
        return Err(AcceptanceError::MessageMismatch);
    }
    Ok(())
}

/// For `config.iterations` pairs of independent key pairs, signs under the first and opens
/// in place under the public key of the second. Every open must fail with a negative
/// status.
///
/// # Errors
/// [`AcceptanceError::WrongKeyAccepted`] if an open succeeds,
/// [`AcceptanceError::NonNegativeFailureStatus`] if it fails with a status that is not
/// negative.
pub fn wrong_public_key<S: SignatureScheme, R: CryptoRng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(), AcceptanceError> {
    let mut m = vec![0u8; config.message_bytes];
    let mut sm = vec![0u8; m.len() + S::BYTES];
    for _ in 0..config.iterations {
        let (other_pk, _) = keypair::<S, R>(rng)?;
        let (_, sk) = keypair::<S, R>(rng)?;

        rng.fill_bytes(&mut m);
        let smlen = sign::<S, R>(rng, &mut sm, &m, &sk)?;
        match S::open_in_place(&mut sm, smlen, &other_pk) {
            Ok(_) => return Err(AcceptanceError::WrongKeyAccepted),
            Err(e) if e.status() >= 0 => {
                return Err(AcceptanceError::NonNegativeFailureStatus {
                    call: Call::Open,
                    status: e.status(),
                });
            }
            Err(_) => {}
        }
    }
    Ok(())
}

/// `config.iterations` keypair / sign / open-in-place cycles over [`CanaryBuffer`]s,
/// checking every canary after every call.
///
/// # Errors
/// The first property the scheme violates.
pub fn guarded_cycles<S: SignatureScheme, R: CryptoRng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(), AcceptanceError> {
    let mut pk = CanaryBuffer::new(BufferKind::PublicKey, S::PUBLIC_KEY_BYTES);
    let mut sk = CanaryBuffer::new(BufferKind::SecretKey, S::SECRET_KEY_BYTES);
    let mut sm = CanaryBuffer::new(BufferKind::SignedMessage, config.message_bytes + S::BYTES);
    let mut m = CanaryBuffer::new(BufferKind::Message, config.message_bytes);

    for _ in 0..config.iterations {
        S::keypair(rng, pk.as_mut_slice(), sk.as_mut_slice())
            .map_err(|e| AcceptanceError::failed(Call::Keypair, e))?;
        CanaryBuffer::check_all(Call::Keypair, &[&pk, &sk, &sm, &m])?;

        rng.fill_bytes(m.as_mut_slice());
        let smlen = sign::<S, R>(rng, sm.as_mut_slice(), m.as_slice(), sk.as_slice())?;
        CanaryBuffer::check_all(Call::Sign, &[&pk, &sk, &sm, &m])?;

        // the recovered message overwrites the signed message
        let mlen = S::open_in_place(sm.as_mut_slice(), smlen, pk.as_slice())
            .map_err(|e| AcceptanceError::failed(Call::Open, e))?;
        CanaryBuffer::check_all(Call::Open, &[&pk, &sk, &sm, &m])?;
        let mlen =
            AcceptanceError::check_reported(Call::Open, BufferKind::SignedMessage, mlen, smlen)?;
        if sm.as_slice()[..mlen] != *m.as_slice() {
            return Err(AcceptanceError::MessageMismatch);
        }
    }
    Ok(())
}

/// Runs [`sign_round_trip`], [`wrong_public_key`] and [`guarded_cycles`] in turn.
///
/// # Errors
/// The first property the scheme violates.
pub fn run_signature_suite<S: SignatureScheme, R: CryptoRng + ?Sized>(
    rng: &mut R,
    config: &HarnessConfig,
) -> Result<(), AcceptanceError> {
    sign_round_trip::<S, R>(rng, config)?;
    wrong_public_key::<S, R>(rng, config)?;
    guarded_cycles::<S, R>(rng, config)
}
