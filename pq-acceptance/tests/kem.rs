//! The KEM checks against every Streamlined NTRU Prime parameter set, and against a KEM
//! whose shared secret ignores the secret key.

use pq_acceptance::{
    AcceptanceError, HarnessConfig, kem_round_trip, kem_tampered_ciphertext, kem_wrong_key,
    run_kem_suite,
};
use ntru::{Sntrup653, Sntrup761, Sntrup857, Sntrup953, Sntrup1013, Sntrup1277};
use pq_common::{Error, Kem};
use rand::{SeedableRng, rngs::StdRng};
use rand_core::CryptoRng;
use rstest::rstest;

fn suite<K: Kem>() {
    let mut rng = StdRng::seed_from_u64(K::CIPHERTEXT_BYTES as u64);
    let config = HarnessConfig::new(3, 32);
    if let Err(e) = run_kem_suite::<K, _>(&mut rng, &config) {
        panic!("{e}");
    }
}

#[rstest]
#[case::sntrup653(suite::<Sntrup653>)]
#[case::sntrup761(suite::<Sntrup761>)]
#[case::sntrup857(suite::<Sntrup857>)]
#[case::sntrup953(suite::<Sntrup953>)]
#[case::sntrup1013(suite::<Sntrup1013>)]
#[case::sntrup1277(suite::<Sntrup1277>)]
fn sntrup(#[case] check: fn()) {
    check();
}

#[test]
fn sntrup761_full_run() {
    let mut rng = rand::rng();
    run_kem_suite::<Sntrup761, _>(&mut rng, &HarnessConfig::default()).unwrap();
}

/// The ciphertext is the shared secret in the clear.
struct Transparent;

impl Kem for Transparent {
    const PUBLIC_KEY_BYTES: usize = 16;
    const SECRET_KEY_BYTES: usize = 16;
    const CIPHERTEXT_BYTES: usize = 32;
    const BYTES: usize = 32;

    fn keypair<R: CryptoRng + ?Sized>(
        rng: &mut R,
        pk: &mut [u8],
        sk: &mut [u8],
    ) -> Result<(), Error> {
        Error::check_length(pk, Self::PUBLIC_KEY_BYTES)?;
        Error::check_length(sk, Self::SECRET_KEY_BYTES)?;
        rng.fill_bytes(sk);
        pk.copy_from_slice(sk);
        Ok(())
    }

    fn encapsulate<R: CryptoRng + ?Sized>(
        rng: &mut R,
        ct: &mut [u8],
        ss: &mut [u8],
        pk: &[u8],
    ) -> Result<(), Error> {
        Error::check_length(ct, Self::CIPHERTEXT_BYTES)?;
        Error::check_length(ss, Self::BYTES)?;
        Error::check_length(pk, Self::PUBLIC_KEY_BYTES)?;
        rng.fill_bytes(ss);
        ct.copy_from_slice(ss);
        Ok(())
    }

    fn decapsulate(ss: &mut [u8], ct: &[u8], sk: &[u8]) -> Result<(), Error> {
        Error::check_length(ss, Self::BYTES)?;
        Error::check_length(ct, Self::CIPHERTEXT_BYTES)?;
        Error::check_length(sk, Self::SECRET_KEY_BYTES)?;
        ss.copy_from_slice(ct);
        Ok(())
    }
}

#[test]
fn key_independent_secret_is_caught() {
    let mut rng = rand::rng();
    let config = HarnessConfig::default();
    kem_round_trip::<Transparent, _>(&mut rng, &config).unwrap();
    kem_tampered_ciphertext::<Transparent, _>(&mut rng, &config).unwrap();
    assert_eq!(
        kem_wrong_key::<Transparent, _>(&mut rng, &config),
        Err(AcceptanceError::WrongKeyAgreed)
    );
    assert_eq!(
        run_kem_suite::<Transparent, _>(&mut rng, &config),
        Err(AcceptanceError::WrongKeyAgreed)
    );
}
