//! [RustCrypto] implementations of the block-cipher interface.
//!
//! [RustCrypto]: https://github.com/RustCrypto

#![cfg(feature = "aes")]
#![forbid(unsafe_code)]

use aes::{
    cipher::{BlockEncrypt, KeyInit},
    Aes128Enc, Aes192Enc, Aes256Enc,
};

use crate::{
    block::{Block, BlockCipher, BlockCipherFactory, BLOCK_SIZE},
    error::InvalidKeySize,
};

/// AES in the encrypt direction, keyed at runtime.
///
/// The key length selects the variant: 16, 24, or 32 bytes for
/// AES-128, AES-192, or AES-256. A fresh instance is unkeyed;
/// [`set_key`][BlockCipher::set_key] must be called before the
/// first block is encrypted.
#[derive(Default)]
pub struct Aes {
    inner: Option<Inner>,
}

enum Inner {
    Aes128(Aes128Enc),
    Aes192(Aes192Enc),
    Aes256(Aes256Enc),
}

impl BlockCipher for Aes {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> Result<(), InvalidKeySize> {
        let inner = match key.len() {
            16 => Aes128Enc::new_from_slice(key).map(Inner::Aes128),
            24 => Aes192Enc::new_from_slice(key).map(Inner::Aes192),
            32 => Aes256Enc::new_from_slice(key).map(Inner::Aes256),
            _ => return Err(InvalidKeySize),
        }
        .map_err(|_| InvalidKeySize)?;
        self.inner = Some(inner);
        Ok(())
    }

    fn encrypt_block(&mut self, block: &mut Block) {
        let inner = self
            .inner
            .as_ref()
            .expect("`set_key` must be called before `encrypt_block`");
        match inner {
            Inner::Aes128(c) => c.encrypt_block(block.into()),
            Inner::Aes192(c) => c.encrypt_block(block.into()),
            Inner::Aes256(c) => c.encrypt_block(block.into()),
        }
    }

    fn reset(&mut self) {
        // AES keeps no per-message state; the key schedule is
        // retained per the interface contract.
    }
}

/// Creates fresh, unkeyed [`Aes`] instances.
#[derive(Copy, Clone, Debug, Default)]
pub struct AesFactory;

impl BlockCipherFactory for AesFactory {
    type Cipher = Aes;

    fn create(&self) -> Aes {
        Aes::default()
    }
}
