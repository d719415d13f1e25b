//! The deterministic public-key encryption under the KEM, on encoded keys and ciphertexts.

mod encoding;
mod streamlined;

pub use encoding::{decode, encode};

use hybrid_array::{Array, ArraySize};
use rand_core::CryptoRng;

/// Key generation, encryption and decryption over byte encodings.
pub trait Pke {
    /// Decoded encryption input
    type Inputs;
    /// Packed encryption input
    type InputsBytes: ArraySize;
    /// Packed public key
    type PublicKeyBytes: ArraySize;
    /// Packed secret key
    type SecretKeyBytes: ArraySize;
    /// A KEM ciphertext: the packed encryption followed by a
    /// [`HASH_BYTES`](crate::params::HASH_BYTES) confirmation hash
    type CiphertextBytes: ArraySize;

    /// Length of the packed encryption, the front of a [`CiphertextBytes`](Self::CiphertextBytes)
    /// string
    const BODY_BYTES: usize;

    /// Returns `(sk, pk)`.
    fn key_gen<R: CryptoRng + ?Sized>(
        rng: &mut R,
    ) -> (
        Array<u8, Self::SecretKeyBytes>,
        Array<u8, Self::PublicKeyBytes>,
    );

    /// Writes the encryption of `r` to `body`, which holds exactly `BODY_BYTES` bytes.
    fn encrypt(r: &Self::Inputs, pk: &Array<u8, Self::PublicKeyBytes>, body: &mut [u8]);

    /// Decrypts a `BODY_BYTES` body. Never fails: an invalid body decrypts to some valid input.
    fn decrypt(body: &[u8], sk: &Array<u8, Self::SecretKeyBytes>) -> Self::Inputs;

    fn inputs_encode(r: &Self::Inputs) -> Array<u8, Self::InputsBytes>;

    fn inputs_random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self::Inputs;
}
