// Copyright 2025 Irreducible Inc.

//! Branch-free masks over machine words.
//!
//! A mask is either all ones or all zeros. None of the functions here branch on their inputs or
//! index memory by them.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

pub const ALL_ONES: u64 = u64::MAX;

/// Expand a [`Choice`] into a full-width mask.
#[inline]
pub fn choice_mask(choice: Choice) -> u64 {
	u64::conditional_select(&0, &ALL_ONES, choice)
}

/// All ones if `a == b`, zero otherwise.
#[inline]
pub fn eq_mask(a: u64, b: u64) -> u64 {
	choice_mask(a.ct_eq(&b))
}

#[inline]
pub fn is_zero_mask(a: u64) -> u64 {
	eq_mask(a, 0)
}

/// Broadcast the most significant bit of `a`.
#[inline]
pub fn msb_mask(a: u64) -> u64 {
	0u64.wrapping_sub(a >> 63)
}

/// Broadcast the least significant bit of `a`.
#[inline]
pub fn lsb_mask(a: u64) -> u64 {
	0u64.wrapping_sub(a & 1)
}

#[inline]
pub fn lsb_mask_u128(a: u128) -> u128 {
	0u128.wrapping_sub(a & 1)
}

/// `a` where the mask is set, `b` elsewhere.
#[inline]
pub fn select(mask: u64, a: u64, b: u64) -> u64 {
	b ^ (mask & (a ^ b))
}

/// `acc |= src & mask`, limb by limb.
#[inline]
pub fn masked_or_assign(acc: &mut [u64], src: &[u64], mask: u64) {
	debug_assert_eq!(acc.len(), src.len());

	for (a, &s) in acc.iter_mut().zip(src) {
		*a |= s & mask;
	}
}

/// Add `addend & mask` to the little-endian number `acc`, returning the outgoing carry bit.
pub fn cond_add_assign(acc: &mut [u64], addend: &[u64], mask: u64) -> u64 {
	debug_assert_eq!(acc.len(), addend.len());

	let mut carry = 0u64;
	for (a, &b) in acc.iter_mut().zip(addend) {
		let (sum, c1) = a.overflowing_add(b & mask);
		let (sum, c2) = sum.overflowing_add(carry);
		*a = sum;
		carry = (c1 | c2) as u64;
	}
	carry
}

/// Subtract `sub & mask` from the little-endian number `acc`, returning the outgoing borrow bit.
pub fn cond_sub_assign(acc: &mut [u64], sub: &[u64], mask: u64) -> u64 {
	debug_assert_eq!(acc.len(), sub.len());

	let mut borrow = 0u64;
	for (a, &b) in acc.iter_mut().zip(sub) {
		let (diff, b1) = a.overflowing_sub(b & mask);
		let (diff, b2) = diff.overflowing_sub(borrow);
		*a = diff;
		borrow = (b1 | b2) as u64;
	}
	borrow
}

/// Constant-time equality of two limb slices. Slices of different lengths are never equal.
#[inline]
pub fn ct_eq_slices(a: &[u64], b: &[u64]) -> Choice {
	a.ct_eq(b)
}
