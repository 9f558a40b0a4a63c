//! Bit-level primitives shared by CMAC and S2V.

#![forbid(unsafe_code)]

use alloc::vec::Vec;

use crate::block::{Block, BLOCK_SIZE};

/// XORs `a` with the leading `a.len()` bytes of `b`, returning
/// a buffer of `a.len()` bytes.
///
/// `a` must not be longer than `b`.
pub(crate) fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(a.len() <= b.len(), "`a` must not be longer than `b`");
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

/// Returns a copy of `a` with its trailing `b.len()` bytes XORed
/// with `b`.
///
/// `a` must not be shorter than `b`.
pub(crate) fn xorend(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(a.len() >= b.len(), "`a` must not be shorter than `b`");
    let mut out = a.to_vec();
    let tail = a.len() - b.len();
    for (v, x) in out[tail..].iter_mut().zip(b) {
        *v ^= x;
    }
    out
}

/// Pads `s` to a single block as `s || 0x80 || 0x00...`
/// (ISO/IEC 7816-4).
///
/// `s` must be shorter than one block.
pub(crate) fn pad(s: &[u8]) -> Block {
    debug_assert!(s.len() < BLOCK_SIZE);
    let mut out = [0u8; BLOCK_SIZE];
    out[..s.len()].copy_from_slice(s);
    out[s.len()] = 0x80;
    out
}

/// Shifts `block` left by one bit across the full 16 bytes,
/// writing the result to `out` and returning the bit shifted out
/// of the high end of `block[0]`.
pub(crate) fn shift_left_1(block: &Block, out: &mut Block) -> u8 {
    let mut bit = 0;
    for i in (0..BLOCK_SIZE).rev() {
        out[i] = (block[i] << 1) | bit;
        bit = block[i] >> 7;
    }
    bit
}

/// Doubles `block` in GF(2^128) under the polynomial
/// x^128 + x^7 + x^2 + x + 1.
///
/// The reduction constant is folded in through a mask derived
/// from the carry; the carry is never branched on, so the
/// sequence of operations is independent of the block's high
/// bit.
pub(crate) fn dbl(block: &Block) -> Block {
    let mut out = [0u8; BLOCK_SIZE];
    let carry = shift_left_1(block, &mut out);
    let mask = carry.wrapping_neg();
    out[BLOCK_SIZE - 1] ^= 0x87 & mask;
    out
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::{dbl, pad, shift_left_1, xor, xorend, Block, BLOCK_SIZE};

    /// A branching reference for [`dbl`], used to check that the
    /// masked variant matches it for both carry values.
    fn dbl_branching(block: &Block) -> Block {
        let mut out = [0u8; BLOCK_SIZE];
        let carry = shift_left_1(block, &mut out);
        if carry == 1 {
            out[BLOCK_SIZE - 1] ^= 0x87;
        }
        out
    }

    #[test]
    fn test_xor() {
        assert_eq!(xor(&[], &[1, 2, 3]), &[]);
        assert_eq!(xor(&[0x0f, 0xf0], &[0xff, 0xff, 0xff]), &[0xf0, 0x0f]);
    }

    #[test]
    fn test_xorend() {
        assert_eq!(xorend(&[1, 2, 3], &[]), &[1, 2, 3]);
        assert_eq!(
            xorend(&[0x11, 0x22, 0x33, 0x44], &[0xff, 0xff]),
            &[0x11, 0x22, 0xcc, 0xbb]
        );
    }

    #[test]
    fn test_pad_empty() {
        let mut want = [0u8; BLOCK_SIZE];
        want[0] = 0x80;
        assert_eq!(pad(&[]), want);
    }

    #[test]
    fn test_pad_partial() {
        let got = pad(&hex!("112233445566"));
        assert_eq!(got, hex!("11223344 55668000 00000000 00000000"));
    }

    #[test]
    fn test_shift_left_carry() {
        let mut out = [0u8; BLOCK_SIZE];

        let bit = shift_left_1(&[0u8; BLOCK_SIZE], &mut out);
        assert_eq!(bit, 0);
        assert_eq!(out, [0u8; BLOCK_SIZE]);

        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0x80;
        block[BLOCK_SIZE - 1] = 0x01;
        let bit = shift_left_1(&block, &mut out);
        assert_eq!(bit, 1);
        let mut want = [0u8; BLOCK_SIZE];
        want[BLOCK_SIZE - 1] = 0x02;
        assert_eq!(out, want);
    }

    // The RFC 4493 §4 subkey derivation doubles L and then K1,
    // exercising both carry values.
    #[test]
    fn test_dbl_rfc4493_subkeys() {
        let l = hex!("7df76b0c 1ab899b3 3e42f047 b91b546f");
        let k1 = dbl(&l);
        assert_eq!(k1, hex!("fbeed618 35713366 7c85e08f 7236a8de"));
        let k2 = dbl(&k1);
        assert_eq!(k2, hex!("f7ddac30 6ae266cc f90bc11e e46d513b"));
    }

    #[test]
    fn test_dbl_matches_branching_reference() {
        let no_carry = hex!("00112233 44556677 8899aabb ccddeeff");
        let carry = hex!("80112233 44556677 8899aabb ccddeeff");
        for block in [&no_carry, &carry] {
            assert_eq!(dbl(block), dbl_branching(block));
        }
    }
}
