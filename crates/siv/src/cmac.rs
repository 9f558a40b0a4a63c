//! CMAC per [RFC 4493] over a 128-bit block cipher.
//!
//! # Warning
//!
//! This is a low-level module. You should not be using it
//! directly unless you are building another block-cipher mode on
//! top of it; [`Siv`][crate::Siv] drives it for you.
//!
//! [RFC 4493]: https://www.rfc-editor.org/rfc/rfc4493

#![forbid(unsafe_code)]

use core::cmp;

use subtle::{Choice, ConstantTimeEq};

use crate::{
    bits::{dbl, pad},
    block::{Block, BlockCipher, BLOCK_SIZE},
    error::InvalidKeySize,
};

/// CMAC per [RFC 4493] for some 128-bit block cipher `C`.
///
/// One keyed instance can authenticate any number of messages:
/// [`tag`][Self::tag] resets the message state while keeping the
/// key schedule and subkeys.
///
/// [RFC 4493]: https://www.rfc-editor.org/rfc/rfc4493
pub struct Cmac<'c, C: ?Sized> {
    cipher: &'c mut C,
    /// Subkey for a complete final block.
    k1: Block,
    /// Subkey for a padded final block.
    k2: Block,
    /// The CBC-MAC chaining value.
    state: Block,
    buf: Block,
    buf_len: usize,
}

impl<'c, C: BlockCipher + ?Sized> Cmac<'c, C> {
    /// Keys `cipher` with `key` and derives the CMAC subkeys.
    pub fn new(cipher: &'c mut C, key: &[u8]) -> Result<Self, InvalidKeySize> {
        cipher.set_key(key)?;
        let mut l = [0u8; BLOCK_SIZE];
        cipher.encrypt_block(&mut l);
        cipher.reset();
        let k1 = dbl(&l);
        let k2 = dbl(&k1);
        Ok(Self {
            cipher,
            k1,
            k2,
            state: [0u8; BLOCK_SIZE],
            buf: [0u8; BLOCK_SIZE],
            buf_len: 0,
        })
    }

    /// Writes `data` to the MAC.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            // A full buffer is only compressed once more input
            // arrives: the final block is handled by `tag`.
            if self.buf_len == BLOCK_SIZE {
                self.compress();
                self.buf_len = 0;
            }
            let n = cmp::min(BLOCK_SIZE - self.buf_len, data.len());
            self.buf[self.buf_len..self.buf_len + n].copy_from_slice(&data[..n]);
            self.buf_len += n;
            data = &data[n..];
        }
    }

    /// Returns the authentication tag and resets the MAC for a
    /// new message under the same key.
    pub fn tag(&mut self) -> Tag {
        let mut last = if self.buf_len == BLOCK_SIZE {
            let mut b = self.buf;
            for (v, k) in b.iter_mut().zip(&self.k1) {
                *v ^= k;
            }
            b
        } else {
            let mut b = pad(&self.buf[..self.buf_len]);
            for (v, k) in b.iter_mut().zip(&self.k2) {
                *v ^= k;
            }
            b
        };
        for (v, s) in last.iter_mut().zip(&self.state) {
            *v ^= s;
        }
        self.cipher.encrypt_block(&mut last);
        self.cipher.reset();

        self.state = [0u8; BLOCK_SIZE];
        self.buf_len = 0;
        Tag(last)
    }

    /// Shorthand for [`update`][Self::update] followed by
    /// [`tag`][Self::tag].
    pub fn mac(&mut self, data: &[u8]) -> Tag {
        self.update(data);
        self.tag()
    }

    fn compress(&mut self) {
        for (s, b) in self.state.iter_mut().zip(&self.buf) {
            *s ^= b;
        }
        self.cipher.encrypt_block(&mut self.state);
        self.cipher.reset();
    }
}

/// A [`Cmac`] authentication tag.
#[derive(Clone, Debug)]
pub struct Tag(Block);

impl Tag {
    // NB: this is intentionally not public because the only safe
    // way to use a MAC is to compare it for equality using
    // `ConstantTimeEq`. It's needed by the `s2v` module, which
    // chains tags through `dbl` and XOR.
    pub(crate) const fn into_array(self) -> Block {
        self.0
    }
}

impl ConstantTimeEq for Tag {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

#[cfg(all(test, feature = "aes"))]
mod tests {
    use hex_literal::hex;

    use super::Cmac;
    use crate::rust::Aes;

    const KEY: [u8; 16] = hex!("2b7e1516 28aed2a6 abf71588 09cf4f3c");
    const MSG: [u8; 64] = hex!(
        "6bc1bee2 2e409f96 e93d7e11 7393172a"
        "ae2d8a57 1e03ac9c 9eb76fac 45af8e51"
        "30c81c46 a35ce411 e5fbc119 1a0a52ef"
        "f69f2445 df4f9b17 ad2b417b e66c3710"
    );

    fn cmac_of(msg: &[u8]) -> [u8; 16] {
        let mut cipher = Aes::default();
        let mut mac = Cmac::new(&mut cipher, &KEY).expect("CMAC key should be accepted");
        mac.mac(msg).into_array()
    }

    // RFC 4493 §4 test vectors.
    #[test]
    fn test_rfc4493_vectors() {
        assert_eq!(cmac_of(&[]), hex!("bb1d6929 e9593728 7fa37d12 9b756746"));
        assert_eq!(
            cmac_of(&MSG[..16]),
            hex!("070a16b4 6b4d4144 f79bdd9d d04a287c")
        );
        assert_eq!(
            cmac_of(&MSG[..40]),
            hex!("dfa66747 de9ae630 30ca3261 1497c827")
        );
        assert_eq!(cmac_of(&MSG), hex!("51f0bebf 7e3b9d92 fc497417 79363cfe"));
    }

    // Byte-at-a-time updates must match the one-shot tag.
    #[test]
    fn test_streaming_matches_one_shot() {
        let mut cipher = Aes::default();
        let mut mac = Cmac::new(&mut cipher, &KEY).expect("CMAC key should be accepted");
        for b in &MSG[..40] {
            mac.update(&[*b]);
        }
        assert_eq!(mac.tag().into_array(), cmac_of(&MSG[..40]));
    }

    // `tag` resets the message state, so one keyed instance can
    // authenticate a sequence of messages.
    #[test]
    fn test_reuse_after_tag() {
        let mut cipher = Aes::default();
        let mut mac = Cmac::new(&mut cipher, &KEY).expect("CMAC key should be accepted");
        let first = mac.mac(&MSG[..16]).into_array();
        let second = mac.mac(&MSG[..16]).into_array();
        assert_eq!(first, second);
        assert_eq!(mac.mac(&[]).into_array(), cmac_of(&[]));
    }
}
