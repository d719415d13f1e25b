#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]

mod canary;
mod config;
mod error;
mod kem;
mod sign;

pub use canary::{CANARY, CanaryBuffer};
pub use config::HarnessConfig;
pub use error::{AcceptanceError, BufferKind, Call, Side};
pub use kem::{
    kem_guarded_cycles, kem_round_trip, kem_tampered_ciphertext, kem_wrong_key, run_kem_suite,
};
pub use sign::{guarded_cycles, run_signature_suite, sign_round_trip, wrong_public_key};
