//! The CTR keystream seeded by the synthetic IV, RFC 5297 §2.5.

#![forbid(unsafe_code)]

use alloc::vec::Vec;

use crate::{
    block::{Block, BlockCipher, BLOCK_SIZE},
    error::InvalidKeySize,
};

/// Generates `blocks * 16` bytes of keystream from `iv` under
/// `ctr_key`.
///
/// `cipher` is keyed with `ctr_key` for the duration of the
/// call; the caller may rekey it afterwards. Callers truncate
/// the keystream to the message length.
pub(crate) fn keystream<C: BlockCipher + ?Sized>(
    cipher: &mut C,
    ctr_key: &[u8],
    iv: &Block,
    blocks: usize,
) -> Result<Vec<u8>, InvalidKeySize> {
    cipher.set_key(ctr_key)?;

    // The top bits of q[8] and q[12] are cleared so counter
    // increments cannot carry into q[0..8] within one message.
    let mut q = *iv;
    q[8] &= 0x7f;
    q[12] &= 0x7f;

    let mut tail = [0u8; 8];
    tail.copy_from_slice(&q[8..16]);
    let ctr0 = u64::from_be_bytes(tail);

    let mut ks = Vec::with_capacity(blocks * BLOCK_SIZE);
    for i in 0..blocks {
        q[8..16].copy_from_slice(&ctr0.wrapping_add(i as u64).to_be_bytes());
        let mut block = q;
        cipher.encrypt_block(&mut block);
        cipher.reset();
        ks.extend_from_slice(&block);
    }
    Ok(ks)
}
