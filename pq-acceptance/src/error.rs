use core::fmt;

use pq_common::Error;
use thiserror::Error;

/// The scheme entry point an [`AcceptanceError`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Key pair generation
    Keypair,
    /// Signing
    Sign,
    /// Signature verification
    Open,
    /// KEM encapsulation
    Encapsulate,
    /// KEM decapsulation
    Decapsulate,
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Call::Keypair => "keypair",
            Call::Sign => "sign",
            Call::Open => "open",
            Call::Encapsulate => "encapsulate",
            Call::Decapsulate => "decapsulate",
        })
    }
}

/// The role of a guarded buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BufferKind {
    /// Encoded public key
    PublicKey,
    /// Encoded secret key
    SecretKey,
    /// Signed message, also the target of in-place open
    SignedMessage,
    /// Message to sign
    Message,
    /// KEM ciphertext
    Ciphertext,
    /// KEM shared secret
    SharedSecret,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BufferKind::PublicKey => "public key",
            BufferKind::SecretKey => "secret key",
            BufferKind::SignedMessage => "signed message",
            BufferKind::Message => "message",
            BufferKind::Ciphertext => "ciphertext",
            BufferKind::SharedSecret => "shared secret",
        })
    }
}

/// Which canary of a buffer was hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The guard below the start of the buffer
    Before,
    /// The guard past the end of the buffer
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Before => "before",
            Side::After => "after",
        })
    }
}

/// A property of the acceptance protocol that a scheme violated.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum AcceptanceError {
    /// An honest call failed
    #[error("{call} failed: {source}")]
    CallFailed {
        /// The failing call
        call: Call,
        /// What it returned
        source: Error,
    },
    /// A call wrote into the canary around a buffer
    #[error("{call} overwrote the canary {side} the {buffer} buffer")]
    CanaryOverwritten {
        /// The call after which the damage was seen
        call: Call,
        /// The buffer whose canary changed
        buffer: BufferKind,
        /// Which of its two canaries changed
        side: Side,
    },
    /// A call reported producing more bytes than its output buffer holds
    #[error("{call} reported {reported} bytes of {buffer} but was given {capacity}")]
    LengthOutOfBounds {
        /// The call
        call: Call,
        /// Its output buffer
        buffer: BufferKind,
        /// The length it reported
        reported: usize,
        /// The length of the buffer it was given
        capacity: usize,
    },
    /// Open succeeded but recovered something other than the signed message
    #[error("opened message differs from the signed message")]
    MessageMismatch,
    /// A signature verified under a public key it was not made for
    #[error("signature verified under an unrelated public key")]
    WrongKeyAccepted,
    /// A call failed, but with a status that is not negative
    #[error("{call} failed with non-negative status {status}")]
    NonNegativeFailureStatus {
        /// The call
        call: Call,
        /// The status it reported
        status: i32,
    },
    /// Encapsulation and decapsulation disagree on the shared secret
    #[error("encapsulated and decapsulated shared secrets differ")]
    SharedSecretMismatch,
    /// An unrelated secret key recovered the encapsulated shared secret
    #[error("an unrelated secret key recovered the shared secret")]
    WrongKeyAgreed,
    /// A modified ciphertext decapsulated to the original shared secret
    #[error("a tampered ciphertext decapsulated to the original shared secret")]
    TamperedCiphertextAgreed,
}

impl AcceptanceError {
    /// Classifies the failure of a call that was expected to succeed.
    #[must_use]
    pub const fn failed(call: Call, source: Error) -> Self {
        let status = source.status();
        if status < 0 {
            AcceptanceError::CallFailed { call, source }
        } else {
            AcceptanceError::NonNegativeFailureStatus { call, status }
        }
    }

    /// Fails unless a produced length fits the buffer it was written to.
    ///
    /// # Errors
    /// [`AcceptanceError::LengthOutOfBounds`] if `reported > capacity`.
    pub const fn check_reported(
        call: Call,
        buffer: BufferKind,
        reported: usize,
        capacity: usize,
    ) -> Result<usize, Self> {
        if reported <= capacity {
            Ok(reported)
        } else {
            Err(AcceptanceError::LengthOutOfBounds {
                call,
                buffer,
                reported,
                capacity,
            })
        }
    }
}
