#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(missing_docs)] // Require all public interfaces to be documented
#![warn(clippy::pedantic)] // Be pedantic by default
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

extern crate alloc;

/// Constant-time comparison, selection and arithmetic helpers
pub mod ct;

/// Error type shared by every scheme
mod error;

/// Arrays whose length is a type-level constant
mod fixed;

/// Packing of small-range integers into minimal byte strings
pub mod radix;

/// Uniform keypair / encapsulate / decapsulate and keypair / sign / open interfaces
pub mod scheme;

pub use hybrid_array as array;

pub use error::Error;
pub use fixed::FixedArray;
pub use radix::{Digit, RadixCodec};
pub use scheme::{Kem, SignatureScheme};
