// Copyright 2025 Irreducible Inc.

//! Bit-serial GHASH multiplication.

use ctprim_ct::mask::lsb_mask_u128;

use crate::{block::Block, capability::GhashBackend};

/// `x^128 + x^7 + x^2 + x + 1` in the reflected bit order GCM uses.
const REDUCTION: u128 = 0xe1 << 120;

/// Multiply two GHASH field elements given as big-endian integers of their byte strings.
///
/// The loop runs 128 times for every input and selects with masks, so neither the timing nor
/// the memory access pattern depends on the operands.
pub fn gf128_mul(x: u128, y: u128) -> u128 {
	let mut z = 0u128;
	let mut v = y;
	for i in 0..128 {
		z ^= v & lsb_mask_u128(x >> (127 - i));
		v = (v >> 1) ^ (REDUCTION & lsb_mask_u128(v));
	}
	z
}

/// Portable constant-time GHASH backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortableGhash;

impl GhashBackend for PortableGhash {
	#[inline]
	fn mul_h(&self, acc: &mut Block, h: &Block) {
		*acc = gf128_mul(u128::from_be_bytes(*acc), u128::from_be_bytes(*h)).to_be_bytes();
	}
}
