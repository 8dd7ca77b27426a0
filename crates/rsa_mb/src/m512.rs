// Copyright 2025 Irreducible Inc.

//! Portable model of a 512-bit vector register holding eight 64-bit lanes.
//!
//! Only the operations the multi-buffer engine needs are provided. Every operation acts on all
//! lanes with the same instruction sequence, including the 52-bit multiply-add halves that mirror
//! the IFMA instructions (`vpmadd52luq` / `vpmadd52huq`).

use std::ops::{
	Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub,
	SubAssign,
};

use bytemuck::{Pod, Zeroable};
use ctprim_ct::mask;
use static_assertions::{assert_eq_size, const_assert_eq};
use subtle::{Choice, ConstantTimeEq};

pub const LANES: usize = 8;

/// Bits per limb in the redundant representation.
pub const DIGIT_BITS: u32 = 52;
pub const DIGIT_MASK: u64 = (1 << DIGIT_BITS) - 1;

/// Eight 64-bit lanes, aligned like a `__m512i`.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[repr(C, align(64))]
pub struct M512(pub(crate) [u64; LANES]);

assert_eq_size!(M512, [u8; 64]);
const_assert_eq!(std::mem::align_of::<M512>(), 64);

// Safety: 64 bytes of plain integers with no padding.
unsafe impl Zeroable for M512 {}
unsafe impl Pod for M512 {}

impl M512 {
	pub const ZERO: Self = Self([0; LANES]);

	#[inline(always)]
	pub const fn splat(value: u64) -> Self {
		Self([value; LANES])
	}

	#[inline(always)]
	pub fn from_fn(f: impl FnMut(usize) -> u64) -> Self {
		Self(std::array::from_fn(f))
	}

	#[inline(always)]
	pub const fn lanes(&self) -> &[u64; LANES] {
		&self.0
	}

	#[inline(always)]
	pub fn lanes_mut(&mut self) -> &mut [u64; LANES] {
		&mut self.0
	}

	#[inline(always)]
	fn map(self, f: impl Fn(u64) -> u64) -> Self {
		Self(self.0.map(f))
	}

	#[inline(always)]
	fn zip_with(self, rhs: Self, f: impl Fn(u64, u64) -> u64) -> Self {
		Self::from_fn(|i| f(self.0[i], rhs.0[i]))
	}

	/// Logical right shift of every lane.
	#[inline(always)]
	pub fn srli(self, shift: u32) -> Self {
		self.map(|x| x >> shift)
	}

	/// Logical left shift of every lane.
	#[inline(always)]
	pub fn slli(self, shift: u32) -> Self {
		self.map(|x| x << shift)
	}

	/// `self + low52(low52(a) * low52(b))` per lane.
	#[inline(always)]
	pub fn madd52lo(self, a: Self, b: Self) -> Self {
		Self::from_fn(|i| {
			let product = (a.0[i] & DIGIT_MASK) as u128 * (b.0[i] & DIGIT_MASK) as u128;
			self.0[i].wrapping_add(product as u64 & DIGIT_MASK)
		})
	}

	/// `self + high52(low52(a) * low52(b))` per lane.
	#[inline(always)]
	pub fn madd52hi(self, a: Self, b: Self) -> Self {
		Self::from_fn(|i| {
			let product = (a.0[i] & DIGIT_MASK) as u128 * (b.0[i] & DIGIT_MASK) as u128;
			self.0[i].wrapping_add((product >> DIGIT_BITS) as u64)
		})
	}

	/// All-ones in the lanes where `a == b`, zero elsewhere.
	#[inline(always)]
	pub fn eq_mask(a: Self, b: Self) -> Self {
		a.zip_with(b, mask::eq_mask)
	}
}

macro_rules! impl_lanewise_op {
	($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
		impl $trait for M512 {
			type Output = Self;

			#[inline(always)]
			fn $method(self, rhs: Self) -> Self::Output {
				self.zip_with(rhs, $op)
			}
		}

		impl $assign_trait for M512 {
			#[inline(always)]
			fn $assign_method(&mut self, rhs: Self) {
				*self = $trait::$method(*self, rhs);
			}
		}
	};
}

impl_lanewise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| a & b);
impl_lanewise_op!(BitOr, bitor, BitOrAssign, bitor_assign, |a, b| a | b);
impl_lanewise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| a ^ b);
// Vector adds wrap like the hardware instructions do.
impl_lanewise_op!(Add, add, AddAssign, add_assign, u64::wrapping_add);
impl_lanewise_op!(Sub, sub, SubAssign, sub_assign, u64::wrapping_sub);

impl Not for M512 {
	type Output = Self;

	#[inline(always)]
	fn not(self) -> Self::Output {
		self.map(|x| !x)
	}
}

impl ConstantTimeEq for M512 {
	fn ct_eq(&self, other: &Self) -> Choice {
		mask::ct_eq_slices(&self.0, &other.0)
	}
}

impl std::fmt::Debug for M512 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "M512({:013X?})", self.0)
	}
}
