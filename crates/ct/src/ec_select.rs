// Copyright 2025 Irreducible Inc.

//! Secret-index selection from a table of precomputed affine points.
//!
//! Scalar multiplication with a 5-bit signed window needs the multiples `1·P..=16·P` of a base
//! point. The window digit is derived from the secret scalar, so the lookup reads every entry of
//! the table and keeps the wanted one with a mask. Digit `0` (and anything outside `1..=16`)
//! selects nothing and yields the all-zero record.

use std::slice;

use bytemuck::{Pod, Zeroable};
use ctprim_utils::ensure;

use crate::{
	error::Error,
	mask::{eq_mask, masked_or_assign},
};

/// Number of precomputed multiples held by a window-5 table.
pub const TABLE_LEN: usize = 16;

/// 64-bit limbs of a P-521 field element.
pub const P521_LIMBS: usize = 9;

/// An affine curve point: `x` followed by `y`, each `LIMBS` little-endian 64-bit limbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct AffinePoint<const LIMBS: usize> {
	pub x: [u64; LIMBS],
	pub y: [u64; LIMBS],
}

// Two arrays of `u64` with no padding in between.
unsafe impl<const LIMBS: usize> Zeroable for AffinePoint<LIMBS> {}
unsafe impl<const LIMBS: usize> Pod for AffinePoint<LIMBS> {}

impl<const LIMBS: usize> AffinePoint<LIMBS> {
	/// The all-zero record used as "no point".
	pub const ZERO: Self = Self {
		x: [0; LIMBS],
		y: [0; LIMBS],
	};

	pub const fn record_limbs() -> usize {
		2 * LIMBS
	}
}

impl<const LIMBS: usize> Default for AffinePoint<LIMBS> {
	fn default() -> Self {
		Self::ZERO
	}
}

pub type P521AffinePoint = AffinePoint<P521_LIMBS>;

/// Sixteen precomputed multiples of a base point. Immutable once built, so it can be shared by
/// any number of concurrent lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePointTable<const LIMBS: usize> {
	points: [AffinePoint<LIMBS>; TABLE_LEN],
}

impl<const LIMBS: usize> AffinePointTable<LIMBS> {
	pub fn new(points: [AffinePoint<LIMBS>; TABLE_LEN]) -> Self {
		Self { points }
	}

	/// Build a table from concatenated `x || y` records.
	pub fn from_limbs(limbs: &[u64]) -> Result<Self, Error> {
		let expected = TABLE_LEN * AffinePoint::<LIMBS>::record_limbs();
		ensure!(
			limbs.len() == expected,
			Error::TableLength {
				expected,
				actual: limbs.len()
			}
		);

		let mut points = [AffinePoint::ZERO; TABLE_LEN];
		bytemuck::cast_slice_mut::<_, u64>(&mut points).copy_from_slice(limbs);
		Ok(Self { points })
	}

	pub fn points(&self) -> &[AffinePoint<LIMBS>; TABLE_LEN] {
		&self.points
	}

	pub fn as_limbs(&self) -> &[u64] {
		bytemuck::cast_slice(&self.points)
	}

	/// Return `points[index - 1]`, or [`AffinePoint::ZERO`] when `index` is not in `1..=16`.
	///
	/// All sixteen entries are read whatever the index is.
	pub fn select(&self, index: u32) -> AffinePoint<LIMBS> {
		let mut out = AffinePoint::ZERO;
		masked_select_words(
			self.as_limbs(),
			AffinePoint::<LIMBS>::record_limbs(),
			index as u64,
			bytemuck::cast_slice_mut(slice::from_mut(&mut out)),
			|_| {},
		);
		out
	}
}

/// Select the P-521 multiple for a window-5 digit.
pub fn select_p521_w5(table: &AffinePointTable<P521_LIMBS>, index: u32) -> P521AffinePoint {
	table.select(index)
}

/// Masked selection over a table of fixed-width records.
///
/// Returns `table[index - 1]` if `index` is in `1..=table.len()` and the all-zero record
/// otherwise.
pub fn masked_select<const N: usize>(table: &[[u64; N]], index: u64) -> [u64; N] {
	let mut out = [0u64; N];
	masked_select_words(bytemuck::cast_slice(table), N, index, &mut out, |_| {});
	out
}

/// `out |= record_i & (i == index)` for every record position `i` counted from one.
///
/// `visit` is told about each record position as it is read, which lets tests confirm that the
/// access sequence does not depend on `index`.
#[inline]
fn masked_select_words(
	words: &[u64],
	record_len: usize,
	index: u64,
	out: &mut [u64],
	mut visit: impl FnMut(usize),
) {
	debug_assert_eq!(out.len(), record_len);
	debug_assert_eq!(words.len() % record_len, 0);

	out.fill(0);
	for (i, record) in words.chunks_exact(record_len).enumerate() {
		visit(i);
		let mask = eq_mask(i as u64 + 1, index);
		masked_or_assign(out, record, mask);
	}
}
