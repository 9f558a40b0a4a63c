//! Deterministic authenticated encryption with associated data
//! in SIV mode, per [RFC 5297].
//!
//! # Overview
//!
//! SIV mode turns a 128-bit block cipher into a *deterministic*
//! AEAD: sealing the same inputs always yields the same output,
//! and any tampering with the ciphertext, the synthetic IV, or
//! any associated-data field is detected on open. The synthetic
//! IV doubles as the authentication tag and as the starting
//! counter for the CTR keystream, so there is no caller-supplied
//! nonce to misuse.
//!
//! The mode is built from two keyed phases: [S2V], a CMAC-based
//! pseudorandom function that maps the plaintext and an ordered
//! vector of associated-data strings to the synthetic IV, and
//! a CTR keystream seeded by that IV. Both phases consume the
//! block cipher through [`BlockCipherFactory`]; an AES
//! implementation backed by [RustCrypto] ships behind the `aes`
//! feature (on by default).
//!
//! ```
//! use siv::Siv;
//!
//! let siv = Siv::aes();
//! let sealed = siv
//!     .seal(&[0x40; 16], &[0x7f; 16], b"attack at dawn", &[b"header"])
//!     .expect("seal failed");
//! let opened = siv
//!     .open(&[0x40; 16], &[0x7f; 16], &sealed, &[b"header"])
//!     .expect("open failed");
//! assert_eq!(opened, b"attack at dawn");
//! ```
//!
//! [RFC 5297]: https://www.rfc-editor.org/rfc/rfc5297
//! [S2V]: https://www.rfc-editor.org/rfc/rfc5297#section-2.4
//! [RustCrypto]: https://github.com/RustCrypto

#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![deny(clippy::wildcard_imports, missing_docs)]

extern crate alloc;

mod bits;
pub mod block;
pub mod cmac;
mod ctr;
pub mod error;
pub mod keys;
#[cfg(feature = "aes")]
pub mod rust;
mod s2v;
mod siv;

pub use block::{Block, BlockCipher, BlockCipherFactory, BLOCK_SIZE};
pub use error::{InvalidBlockSize, InvalidKeySize, OpenError, SealError};
pub use keys::SivKey;
#[cfg(feature = "aes")]
pub use rust::{Aes, AesFactory};
pub use siv::Siv;

/// [`Siv`] backed by the [RustCrypto] AES implementation.
///
/// [RustCrypto]: https://github.com/RustCrypto
#[cfg(feature = "aes")]
pub type AesSiv = Siv<AesFactory>;
