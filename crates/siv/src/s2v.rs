//! The S2V (string-to-vector) pseudorandom function, RFC 5297
//! §2.4.

#![forbid(unsafe_code)]

use crate::{
    bits::{dbl, pad, xorend},
    block::{Block, BlockCipher, BLOCK_SIZE},
    cmac::Cmac,
    error::{InvalidKeySize, OpenError, SealError},
};

/// The maximum number of associated-data items S2V accepts.
///
/// The construction does not remain secure past the block size
/// in bits minus two.
pub(crate) const MAX_ASSOCIATED_DATA: usize = 126;

/// An error from [`s2v`], mapped into [`SealError`] or
/// [`OpenError`] at the envelope.
#[derive(Debug)]
pub(crate) enum S2vError {
    InvalidKeySize(InvalidKeySize),
    TooManyAssociatedData,
}

impl From<InvalidKeySize> for S2vError {
    fn from(err: InvalidKeySize) -> Self {
        Self::InvalidKeySize(err)
    }
}

impl From<S2vError> for SealError {
    fn from(err: S2vError) -> Self {
        match err {
            S2vError::InvalidKeySize(err) => Self::InvalidKeySize(err),
            S2vError::TooManyAssociatedData => Self::TooManyAssociatedData,
        }
    }
}

impl From<S2vError> for OpenError {
    fn from(err: S2vError) -> Self {
        match err {
            S2vError::InvalidKeySize(err) => Self::InvalidKeySize(err),
            S2vError::TooManyAssociatedData => Self::TooManyAssociatedData,
        }
    }
}

/// Maps the plaintext and the ordered associated-data vector to
/// the 16-byte synthetic IV.
///
/// `cipher` is keyed with `mac_key` for the duration of the
/// call; the caller may rekey it afterwards.
pub(crate) fn s2v<C: BlockCipher + ?Sized>(
    cipher: &mut C,
    mac_key: &[u8],
    plaintext: &[u8],
    associated_data: &[&[u8]],
) -> Result<Block, S2vError> {
    if associated_data.len() > MAX_ASSOCIATED_DATA {
        return Err(S2vError::TooManyAssociatedData);
    }

    let mut mac = Cmac::new(cipher, mac_key)?;

    let mut d = mac.mac(&[0u8; BLOCK_SIZE]).into_array();
    for a in associated_data {
        d = dbl(&d);
        let t = mac.mac(a).into_array();
        for (v, x) in d.iter_mut().zip(&t) {
            *v ^= x;
        }
    }

    if plaintext.len() >= BLOCK_SIZE {
        // XOR `d` into the trailing block of a copy of the
        // plaintext.
        mac.update(&xorend(plaintext, &d));
    } else {
        d = dbl(&d);
        let p = pad(plaintext);
        for (v, x) in d.iter_mut().zip(&p) {
            *v ^= x;
        }
        mac.update(&d);
    }
    Ok(mac.tag().into_array())
}

#[cfg(all(test, feature = "aes"))]
mod tests {
    use hex_literal::hex;

    use super::s2v;
    use crate::rust::Aes;

    // RFC 5297 A.1: the synthetic IV over one AD item.
    #[test]
    fn test_rfc5297_a1_iv() {
        let mac_key = hex!("fffefdfc fbfaf9f8 f7f6f5f4 f3f2f1f0");
        let ad = hex!("10111213 14151617 18191a1b 1c1d1e1f 20212223 24252627");
        let plaintext = hex!("11223344 55667788 99aabbcc ddee");

        let mut cipher = Aes::default();
        let iv = s2v(&mut cipher, &mac_key, &plaintext, &[&ad])
            .expect("s2v should accept the inputs");
        assert_eq!(iv, hex!("85632d07 c6e8f37f 950acd32 0a2ecc93"));
    }

    // RFC 5297 A.2: three AD items and a long plaintext (the
    // `xorend` branch).
    #[test]
    fn test_rfc5297_a2_iv() {
        let mac_key = hex!("7f7e7d7c 7b7a7978 77767574 73727170");
        let ad1 = hex!(
            "00112233 44556677 8899aabb ccddeeff"
            "deaddada deaddada ffeeddcc bbaa9988"
            "77665544 33221100"
        );
        let ad2 = hex!("10203040 50607080 90a0");
        let nonce = hex!("09f91102 9d74e35b d84156c5 635688c0");
        let plaintext = hex!(
            "74686973 20697320 736f6d65 20706c61"
            "696e7465 78742074 6f20656e 63727970"
            "74207573 696e6720 5349562d 414553"
        );

        let mut cipher = Aes::default();
        let iv = s2v(&mut cipher, &mac_key, &plaintext, &[&ad1, &ad2, &nonce])
            .expect("s2v should accept the inputs");
        assert_eq!(iv, hex!("7bdb6e3b 432667eb 06f4d14b ff2fbd0f"));
    }
}
