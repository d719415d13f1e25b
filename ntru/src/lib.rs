#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![warn(clippy::pedantic)] // Be pedantic by default
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    // Single-letter names follow the NTRU Prime papers: p, q, w, f, g, h, r, c
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::missing_panics_doc,
)]
extern crate alloc;

mod algebra;
pub mod encoded;
pub mod hashes;
pub mod kem;
pub mod params;
mod scheme;
mod streamlined;

use params::Streamlined;

pub use kem::{Ciphertext, PublicKey, SecretKey, SharedSecret, decap, encap, key_gen};
pub use pq_common::{Error, Kem};

/// sntrup653
pub type Sntrup653 = Streamlined<653>;
/// sntrup761
pub type Sntrup761 = Streamlined<761>;
/// sntrup857
pub type Sntrup857 = Streamlined<857>;
/// sntrup953
pub type Sntrup953 = Streamlined<953>;
/// sntrup1013
pub type Sntrup1013 = Streamlined<1013>;
/// sntrup1277
pub type Sntrup1277 = Streamlined<1277>;
