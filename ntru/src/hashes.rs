//! The SHA-512 based hashes of the KEM, each truncated to 32 bytes and domain-separated
//! by a one-byte prefix.

use sha2::{Digest, Sha512};

use crate::params::HASH_BYTES;

/// Domain separation prefixes
pub mod prefix {
    /// Session key after rejection
    pub const SESSION_REJECT: u8 = 0;
    /// Session key on success
    pub const SESSION: u8 = 1;
    /// Plaintext confirmation
    pub const CONFIRM: u8 = 2;
    /// Encoded encryption input
    pub const INPUTS: u8 = 3;
    /// Public key
    pub const PUBLIC_KEY: u8 = 4;
}

/// `SHA-512(b || parts...)[..32]`
#[must_use]
pub fn hash_prefix(b: u8, parts: &[&[u8]]) -> [u8; HASH_BYTES] {
    let mut hasher = Sha512::new();
    hasher.update([b]);
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut out = [0u8; HASH_BYTES];
    out.copy_from_slice(&digest[..HASH_BYTES]);
    out
}

/// Confirmation hash binding the encoded input `r` to the public key digest.
#[must_use]
pub fn hash_confirm(r: &[u8], pk_digest: &[u8; HASH_BYTES]) -> [u8; HASH_BYTES] {
    let x = hash_prefix(prefix::INPUTS, &[r]);
    hash_prefix(prefix::CONFIRM, &[&x, pk_digest])
}

/// Session key from the encoded input `r` and the ciphertext (`body || confirm`); `b` is
/// [`prefix::SESSION`] or [`prefix::SESSION_REJECT`].
#[must_use]
pub fn hash_session(b: u8, r: &[u8], body: &[u8], confirm: &[u8]) -> [u8; HASH_BYTES] {
    let x = hash_prefix(prefix::INPUTS, &[r]);
    hash_prefix(b, &[&x, body, confirm])
}
