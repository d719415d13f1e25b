use alloc::vec::Vec;
use rand_core::CryptoRng;

use crate::Error;

/// A key-encapsulation mechanism over caller-owned byte buffers.
///
/// Every buffer must have exactly the length named by the matching constant; implementations
/// return [`Error::InvalidLength`] otherwise and never write past a buffer. Decapsulation
/// uses implicit rejection: an invalid ciphertext yields a pseudorandom shared secret rather
/// than an error.
pub trait Kem {
    /// Encoded public key length
    const PUBLIC_KEY_BYTES: usize;
    /// Encoded secret key length
    const SECRET_KEY_BYTES: usize;
    /// Ciphertext length
    const CIPHERTEXT_BYTES: usize;
    /// Shared secret length
    const BYTES: usize;

    /// Generates a key pair into `pk` and `sk`.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if a buffer has the wrong length.
    fn keypair<R: CryptoRng + ?Sized>(
        rng: &mut R,
        pk: &mut [u8],
        sk: &mut [u8],
    ) -> Result<(), Error>;

    /// Encapsulates a fresh shared secret `ss` to `pk`, writing the ciphertext to `ct`.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] on a buffer of the wrong length, [`Error::InvalidKey`] if `pk`
    /// does not parse.
    fn encapsulate<R: CryptoRng + ?Sized>(
        rng: &mut R,
        ct: &mut [u8],
        ss: &mut [u8],
        pk: &[u8],
    ) -> Result<(), Error>;

    /// Recovers the shared secret of `ct` under `sk`.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] on a buffer of the wrong length, [`Error::InvalidKey`] if `sk`
    /// does not parse.
    fn decapsulate(ss: &mut [u8], ct: &[u8], sk: &[u8]) -> Result<(), Error>;
}

/// A signature scheme producing signed messages (signature and message in one buffer).
///
/// `BYTES` is the largest overhead a signature adds: `sign` needs an output buffer of at
/// least `m.len() + BYTES` bytes and `open` a message buffer of at least `sm.len()` bytes.
pub trait SignatureScheme {
    /// Encoded public key length
    const PUBLIC_KEY_BYTES: usize;
    /// Encoded secret key length
    const SECRET_KEY_BYTES: usize;
    /// Largest signature overhead
    const BYTES: usize;

    /// Generates a key pair into `pk` and `sk`.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if a buffer has the wrong length.
    fn keypair<R: CryptoRng + ?Sized>(
        rng: &mut R,
        pk: &mut [u8],
        sk: &mut [u8],
    ) -> Result<(), Error>;

    /// Signs `m` under `sk` into `sm`, returning the signed message length.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if `sm` is too short, [`Error::InvalidKey`] if `sk` does not
    /// parse.
    fn sign<R: CryptoRng + ?Sized>(
        rng: &mut R,
        sm: &mut [u8],
        m: &[u8],
        sk: &[u8],
    ) -> Result<usize, Error>;

    /// Verifies `sm` under `pk` and writes the recovered message to `m`, returning its
    /// length.
    ///
    /// # Errors
    /// [`Error::Verification`] if the signature does not verify. Nothing meaningful is left in
    /// `m` on failure.
    fn open(m: &mut [u8], sm: &[u8], pk: &[u8]) -> Result<usize, Error>;

    /// [`open`](Self::open) where the signed message is the first `smlen` bytes of `buf` and
    /// the recovered message is written back to the start of `buf`.
    ///
    /// # Errors
    /// As [`open`](Self::open); [`Error::InvalidLength`] if `smlen > buf.len()`.
    fn open_in_place(buf: &mut [u8], smlen: usize, pk: &[u8]) -> Result<usize, Error> {
        let Some(sm) = buf.get(..smlen) else {
            return Err(Error::InvalidLength {
                expected: smlen,
                actual: buf.len(),
            });
        };
        let sm: Vec<u8> = sm.to_vec();
        Self::open(buf, &sm, pk)
    }
}
