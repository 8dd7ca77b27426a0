// Copyright 2025 Irreducible Inc.

//! Conversion between canonical integers and the transposed radix-2^52 limb layout.
//!
//! A multi-lane integer of `k` limbs is a `[M512]` slice of length `k`: limb `j` of lane `i` sits
//! in `limbs[j].lanes()[i]`, least significant limb first. Normalized limbs are below 2^52; the
//! arithmetic routines let limbs grow past that between normalizations.

use ctprim_utils::checked_arithmetics::div_ceil;

use crate::m512::{DIGIT_BITS, DIGIT_MASK, LANES, M512};

/// Number of 52-bit limbs needed to hold `bits` bits.
pub const fn limbs_for_bits(bits: usize) -> usize {
	div_ceil(bits, DIGIT_BITS as usize)
}

/// Pack little-endian digits of `width` bits into lane `lane` of `out`, zeroing the rest.
fn pack_lane(out: &mut [M512], lane: usize, digits: impl Iterator<Item = u64>, width: u32) {
	let mut acc = 0u128;
	let mut acc_bits = 0u32;
	let mut limbs = out.iter_mut();

	for digit in digits {
		acc |= (digit as u128) << acc_bits;
		acc_bits += width;
		while acc_bits >= DIGIT_BITS {
			if let Some(limb) = limbs.next() {
				limb.lanes_mut()[lane] = acc as u64 & DIGIT_MASK;
			}
			acc >>= DIGIT_BITS;
			acc_bits -= DIGIT_BITS;
		}
	}
	if let Some(limb) = limbs.next() {
		limb.lanes_mut()[lane] = acc as u64;
	}
	for limb in limbs {
		limb.lanes_mut()[lane] = 0;
	}
}

/// Load eight big-endian byte strings, one per lane.
pub(crate) fn load_be_bytes(out: &mut [M512], inputs: [&[u8]; LANES]) {
	for (lane, bytes) in inputs.into_iter().enumerate() {
		debug_assert!(bytes.len() * 8 <= out.len() * DIGIT_BITS as usize);
		pack_lane(out, lane, bytes.iter().rev().map(|&b| b as u64), 8);
	}
}

/// Load eight little-endian sequences of 64-bit words, one per lane.
pub(crate) fn load_le_words(out: &mut [M512], inputs: [&[u64]; LANES]) {
	for (lane, words) in inputs.into_iter().enumerate() {
		debug_assert!(words.len() * 64 <= out.len() * DIGIT_BITS as usize);
		pack_lane(out, lane, words.iter().copied(), 64);
	}
}

/// Write normalized limbs back as big-endian bytes, filling each output completely.
///
/// Bits above `8 * output.len()` are dropped.
pub(crate) fn store_be_bytes(limbs: &[M512], outputs: [&mut [u8]; LANES]) {
	for (lane, bytes) in outputs.into_iter().enumerate() {
		let mut acc = 0u128;
		let mut acc_bits = 0u32;
		let mut limb_values = limbs.iter().map(|limb| limb.lanes()[lane] & DIGIT_MASK);

		for byte in bytes.iter_mut().rev() {
			if acc_bits < 8 {
				acc |= (limb_values.next().unwrap_or(0) as u128) << acc_bits;
				acc_bits += DIGIT_BITS;
			}
			*byte = acc as u8;
			acc >>= 8;
			acc_bits -= 8;
		}
	}
}

/// Propagate carries so every limb is below 2^52. The carry out of the top limb is dropped.
pub(crate) fn normalize(limbs: &mut [M512]) {
	let digit_mask = M512::splat(DIGIT_MASK);
	let mut carry = M512::ZERO;
	for limb in limbs {
		let t = *limb + carry;
		carry = t.srli(DIGIT_BITS);
		*limb = t & digit_mask;
	}
}

/// Set every lane to the integer 1.
pub(crate) fn set_one(limbs: &mut [M512]) {
	limbs.fill(M512::ZERO);
	if let Some(first) = limbs.first_mut() {
		*first = M512::splat(1);
	}
}
