// Copyright 2025 Irreducible Inc.

use auto_impl::auto_impl;

use crate::block::{xor_into, Block, BLOCK_SIZE};

/// Forward block encryption under a fixed key.
///
/// The implementation is chosen once, when the [`GcmContext`](crate::GcmContext) is built.
#[auto_impl(&, Box, Arc)]
pub trait BlockEncryptor {
	fn encrypt_block(&self, block: &Block) -> Block;
}

/// GHASH multiplication in GF(2^128) with the GCM bit order.
#[auto_impl(&, Box, Arc)]
pub trait GhashBackend {
	/// `acc = acc · h`.
	fn mul_h(&self, acc: &mut Block, h: &Block);

	/// Absorb whole blocks into the accumulator: `acc = (acc ^ block) · h` for each block.
	///
	/// `data.len()` must be a multiple of [`BLOCK_SIZE`]. Backends with wide multipliers override
	/// this to aggregate several blocks per reduction.
	fn auth(&self, acc: &mut Block, data: &[u8], h: &Block) {
		debug_assert_eq!(data.len() % BLOCK_SIZE, 0);

		for block in data.chunks_exact(BLOCK_SIZE) {
			xor_into(acc, block);
			self.mul_h(acc, h);
		}
	}
}
