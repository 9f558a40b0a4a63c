//! The block-cipher interface consumed by SIV mode.
//!
//! # Warning
//!
//! This is a low-level module. You should not be implementing
//! these traits unless you are plugging in your own block
//! cipher; the `aes` feature provides a ready-made
//! implementation.

#![forbid(unsafe_code)]

use crate::error::InvalidKeySize;

/// The block size, in bytes, SIV mode is defined over.
pub const BLOCK_SIZE: usize = 16;

/// A single cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// A block cipher run in the encrypt direction.
///
/// # Requirements
///
/// The cipher must:
///
/// * Have a 16-byte block size (see [`BLOCK_SIZE`]). Factories
///   producing ciphers with any other block size are rejected
///   when the [`Siv`][crate::Siv] context is constructed.
/// * Be rekeyable: [`set_key`][Self::set_key] may be called any
///   number of times, and installing a key discards any
///   per-message state along with the previous key schedule.
/// * Keep no hidden chaining state across single-block
///   encryptions once [`reset`][Self::reset] has been called.
///
/// Only the encrypt direction is ever used: SIV decryption runs
/// the cipher forward to regenerate the keystream.
pub trait BlockCipher {
    /// Returns the cipher's block size in bytes.
    fn block_size(&self) -> usize;

    /// Installs `key`, replacing any previously installed key
    /// and clearing any per-message state.
    ///
    /// Returns [`InvalidKeySize`] if the cipher does not accept
    /// keys of `key.len()` bytes.
    fn set_key(&mut self, key: &[u8]) -> Result<(), InvalidKeySize>;

    /// Encrypts a single block in place.
    ///
    /// # Panics
    ///
    /// Implementations may panic if no key has been installed
    /// with [`set_key`][Self::set_key].
    fn encrypt_block(&mut self, block: &mut Block);

    /// Clears any per-message state. The key schedule is
    /// retained.
    fn reset(&mut self);
}

/// Creates [`BlockCipher`]s.
///
/// Each call to [`create`][Self::create] yields a fresh, unkeyed
/// instance. The block size must not vary across calls.
pub trait BlockCipherFactory {
    /// The cipher this factory creates.
    type Cipher: BlockCipher;

    /// Returns a fresh, unkeyed cipher.
    fn create(&self) -> Self::Cipher;
}
