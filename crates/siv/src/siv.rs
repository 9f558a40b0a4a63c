//! The seal/open envelope.

#![forbid(unsafe_code)]

use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::{
    bits::xor,
    block::{BlockCipher, BlockCipherFactory, BLOCK_SIZE},
    ctr::keystream,
    error::{InvalidBlockSize, OpenError, SealError},
    keys::SivKey,
    s2v::{s2v, MAX_ASSOCIATED_DATA},
};
#[cfg(feature = "aes")]
use crate::rust::AesFactory;

/// SIV-mode deterministic authenticated encryption per
/// [RFC 5297].
///
/// A `Siv` is configured once with a [`BlockCipherFactory`] and
/// may then be shared freely across concurrent callers: every
/// call obtains its own cipher instance from the factory, so no
/// keyed state is ever shared.
///
/// Keys are per-call inputs. SIV uses two independent subkeys:
/// `mac_key` keys the S2V tagging phase and `ctr_key` keys the
/// keystream. When both halves are carried in one combined key
/// (RFC 5297 §2.2, the *leading* half keying S2V), split them
/// with [`SivKey::split`] and use
/// [`seal_with_key`][Self::seal_with_key] /
/// [`open_with_key`][Self::open_with_key].
///
/// Sealing is deterministic: identical inputs produce identical
/// output. That is the point of the mode, but it also means
/// equal plaintexts under equal keys and associated data are
/// detectable as equal ciphertexts.
///
/// [RFC 5297]: https://www.rfc-editor.org/rfc/rfc5297
pub struct Siv<F> {
    factory: F,
}

impl<F: BlockCipherFactory> Siv<F> {
    /// The length in bytes of the synthetic IV prepended to
    /// every ciphertext.
    pub const OVERHEAD: usize = BLOCK_SIZE;

    /// The maximum number of associated-data items accepted per
    /// call.
    pub const MAX_ASSOCIATED_DATA: usize = MAX_ASSOCIATED_DATA;

    /// The maximum plaintext length in bytes.
    pub const MAX_PLAINTEXT_SIZE: usize = usize::MAX - BLOCK_SIZE;

    /// Creates a SIV context from a block-cipher factory.
    ///
    /// Returns [`InvalidBlockSize`] unless the factory's ciphers
    /// have a 16-byte block size. The block size is assumed not
    /// to vary across `create` calls.
    pub fn new(factory: F) -> Result<Self, InvalidBlockSize> {
        let got = factory.create().block_size();
        if got != BLOCK_SIZE {
            return Err(InvalidBlockSize { got });
        }
        Ok(Self { factory })
    }

    /// Encrypts and authenticates `plaintext`, authenticating
    /// (but not encrypting) every item of `associated_data`.
    ///
    /// Returns the synthetic IV followed by the ciphertext,
    /// `plaintext.len() + 16` bytes in total.
    ///
    /// The associated-data vector is order-significant and its
    /// items may be empty; both keys are read-only and never
    /// retained past the call.
    pub fn seal(
        &self,
        ctr_key: &[u8],
        mac_key: &[u8],
        plaintext: &[u8],
        associated_data: &[&[u8]],
    ) -> Result<Vec<u8>, SealError> {
        if plaintext.len() > Self::MAX_PLAINTEXT_SIZE {
            return Err(SealError::PlaintextTooLong);
        }

        let mut cipher = self.factory.create();
        let iv = s2v(&mut cipher, mac_key, plaintext, associated_data)?;
        let blocks = plaintext.len().div_ceil(BLOCK_SIZE);
        let ks = keystream(&mut cipher, ctr_key, &iv, blocks)?;

        let mut out = Vec::with_capacity(BLOCK_SIZE + plaintext.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&xor(plaintext, &ks));
        Ok(out)
    }

    /// Decrypts and authenticates `input` (a [`seal`][Self::seal]
    /// output: synthetic IV followed by ciphertext) against the
    /// same associated-data vector.
    ///
    /// Returns the plaintext only if the regenerated IV matches
    /// the transmitted one; the comparison is constant-time. On
    /// [`OpenError::Authentication`] no plaintext is released
    /// and the internal candidate buffer is wiped.
    pub fn open(
        &self,
        ctr_key: &[u8],
        mac_key: &[u8],
        input: &[u8],
        associated_data: &[&[u8]],
    ) -> Result<Vec<u8>, OpenError> {
        if input.len() < BLOCK_SIZE {
            return Err(OpenError::InvalidLength);
        }
        let (iv, ciphertext) = input.split_at(BLOCK_SIZE);
        let mut tag = [0u8; BLOCK_SIZE];
        tag.copy_from_slice(iv);

        let mut cipher = self.factory.create();
        // The keystream depends only on the transmitted IV, so
        // it can be derived before the tag is authenticated.
        let blocks = ciphertext.len().div_ceil(BLOCK_SIZE);
        let ks = keystream(&mut cipher, ctr_key, &tag, blocks)?;
        let mut plaintext = xor(ciphertext, &ks);

        let control = s2v(&mut cipher, mac_key, &plaintext, associated_data)?;
        if bool::from(tag[..].ct_eq(&control[..])) {
            Ok(plaintext)
        } else {
            // Do not release unauthenticated plaintext.
            plaintext.zeroize();
            Err(OpenError::Authentication)
        }
    }

    /// [`seal`][Self::seal] with the subkeys taken from a
    /// [`SivKey`].
    pub fn seal_with_key(
        &self,
        key: &SivKey,
        plaintext: &[u8],
        associated_data: &[&[u8]],
    ) -> Result<Vec<u8>, SealError> {
        self.seal(key.ctr_key(), key.mac_key(), plaintext, associated_data)
    }

    /// [`open`][Self::open] with the subkeys taken from a
    /// [`SivKey`].
    pub fn open_with_key(
        &self,
        key: &SivKey,
        input: &[u8],
        associated_data: &[&[u8]],
    ) -> Result<Vec<u8>, OpenError> {
        self.open(key.ctr_key(), key.mac_key(), input, associated_data)
    }
}

#[cfg(feature = "aes")]
impl Siv<AesFactory> {
    /// Creates an AES-SIV instance backed by the [RustCrypto]
    /// AES implementation.
    ///
    /// [RustCrypto]: https://github.com/RustCrypto
    pub fn aes() -> Self {
        // AES always has a 16-byte block, so the construction
        // cannot fail.
        Self {
            factory: AesFactory,
        }
    }
}
