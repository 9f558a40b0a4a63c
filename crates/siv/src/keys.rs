//! Key material containers.

#![forbid(unsafe_code)]

use alloc::vec::Vec;

use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::error::InvalidKeySize;

/// The two independent SIV subkeys: the S2V (MAC) key and the
/// CTR key.
///
/// The contained key material is wiped when the value is
/// dropped. The raw-slice [`seal`][crate::Siv::seal] /
/// [`open`][crate::Siv::open] entry points never copy their
/// keys; this container exists for callers who extract key bytes
/// out of some opaque store and want them wiped on every exit
/// path.
///
/// Subkey lengths are not validated here; the underlying cipher
/// rejects unsupported lengths when the key is used.
#[derive(Clone)]
pub struct SivKey {
    mac: Zeroizing<Vec<u8>>,
    ctr: Zeroizing<Vec<u8>>,
}

impl SivKey {
    /// Creates a key from its two subkeys.
    pub fn new(mac_key: &[u8], ctr_key: &[u8]) -> Self {
        Self {
            mac: Zeroizing::new(mac_key.to_vec()),
            ctr: Zeroizing::new(ctr_key.to_vec()),
        }
    }

    /// Splits a combined key into its halves per RFC 5297 §2.2:
    /// the leading half keys S2V, the trailing half keys CTR.
    ///
    /// Returns [`InvalidKeySize`] if `key` is empty or of odd
    /// length.
    pub fn split(key: &[u8]) -> Result<Self, InvalidKeySize> {
        if key.is_empty() || key.len() % 2 != 0 {
            return Err(InvalidKeySize);
        }
        let (mac, ctr) = key.split_at(key.len() / 2);
        Ok(Self::new(mac, ctr))
    }

    /// Returns the S2V (MAC) key.
    pub fn mac_key(&self) -> &[u8] {
        &self.mac
    }

    /// Returns the CTR key.
    pub fn ctr_key(&self) -> &[u8] {
        &self.ctr
    }
}

impl ZeroizeOnDrop for SivKey {}
