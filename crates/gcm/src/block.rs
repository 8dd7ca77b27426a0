// Copyright 2025 Irreducible Inc.

pub const BLOCK_SIZE: usize = 16;

/// A 16-byte cipher block, also used for the GHASH accumulator and the counter.
pub type Block = [u8; BLOCK_SIZE];

/// `dst[i] ^= src[i]` over the length of `src`.
#[inline]
pub(crate) fn xor_into(dst: &mut [u8], src: &[u8]) {
	debug_assert!(src.len() <= dst.len());

	for (d, s) in dst.iter_mut().zip(src) {
		*d ^= s;
	}
}

/// Increment the low 32 bits of a counter block as a big-endian integer, wrapping.
#[inline]
pub(crate) fn inc32(counter: &mut Block) {
	let low = u32::from_be_bytes([counter[12], counter[13], counter[14], counter[15]]);
	counter[12..].copy_from_slice(&low.wrapping_add(1).to_be_bytes());
}

/// The final GHASH block: both lengths in bits, big-endian.
#[inline]
pub(crate) fn length_block(first_len: u64, second_len: u64) -> Block {
	let mut block = [0u8; BLOCK_SIZE];
	block[..8].copy_from_slice(&(first_len * 8).to_be_bytes());
	block[8..].copy_from_slice(&(second_len * 8).to_be_bytes());
	block
}
