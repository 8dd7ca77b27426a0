// Copyright 2025 Irreducible Inc.

//! Lane-parallel Montgomery arithmetic in radix 2^52.
//!
//! With `n` limbs per modulus, `R = 2^(52·n)`. Every supported width leaves at least two spare
//! bits (`4·m < R`), which is what lets the almost-Montgomery product skip its final subtraction:
//! inputs below `2·m` give outputs below `2·m`.

use itertools::izip;

use crate::{
	m512::{DIGIT_BITS, DIGIT_MASK, M512},
	radix52::{normalize, set_one},
};

/// A multi-lane modulus with its Montgomery constant.
pub(crate) struct Modulus<'a> {
	limbs: &'a [M512],
	k0: M512,
}

impl<'a> Modulus<'a> {
	/// `limbs` must be normalized and odd in every lane.
	pub fn new(limbs: &'a [M512]) -> Self {
		debug_assert!(!limbs.is_empty());

		Self {
			limbs,
			k0: neg_inverse_mod_digit(limbs[0]),
		}
	}

	pub fn len(&self) -> usize {
		self.limbs.len()
	}
}

/// `-m^{-1} mod 2^52` per lane, by Newton iteration.
///
/// Each step doubles the number of correct low bits, starting from 3 (any odd `m` is its own
/// inverse mod 8), so five steps cover 64 bits.
pub(crate) fn neg_inverse_mod_digit(m0: M512) -> M512 {
	M512::from_fn(|lane| {
		let m = m0.lanes()[lane];
		let mut inverse = m;
		for _ in 0..5 {
			inverse = inverse.wrapping_mul(2u64.wrapping_sub(m.wrapping_mul(inverse)));
		}
		inverse.wrapping_neg() & DIGIT_MASK
	})
}

/// Almost-Montgomery product: `out = a·b·R^{-1} mod m`, with `out < 2·m` for `a, b < 2·m`.
///
/// Inputs must be normalized; the output is normalized.
pub(crate) fn amm(out: &mut [M512], a: &[M512], b: &[M512], modulus: &Modulus) {
	let m = modulus.limbs;
	let n = m.len();
	debug_assert!(a.len() == n && b.len() == n && out.len() == n);

	out.fill(M512::ZERO);
	for &a_i in a {
		for (r, &b_j) in out.iter_mut().zip(b) {
			*r = r.madd52lo(a_i, b_j);
		}
		let y = M512::ZERO.madd52lo(out[0], modulus.k0);
		for (r, &m_j) in out.iter_mut().zip(m) {
			*r = r.madd52lo(y, m_j);
		}

		// The low digit is now divisible by 2^52; divide the accumulator by one digit.
		let carry = out[0].srli(DIGIT_BITS);
		out.copy_within(1.., 0);
		out[n - 1] = M512::ZERO;
		out[0] += carry;

		for (r, &b_j, &m_j) in izip!(out.iter_mut(), b, m) {
			*r = r.madd52hi(a_i, b_j).madd52hi(y, m_j);
		}
	}

	normalize(out);
}

/// Montgomery reduction of a double-width value: `out = t·R^{-1} mod m`, almost reduced.
///
/// `t` has `2·n + 1` normalized limbs and is clobbered. The result is below `t / R + m`.
pub(crate) fn redc_wide(out: &mut [M512], t: &mut [M512], modulus: &Modulus) {
	let m = modulus.limbs;
	let n = m.len();
	debug_assert!(out.len() == n && t.len() == 2 * n + 1);

	for i in 0..n {
		let y = M512::ZERO.madd52lo(t[i], modulus.k0);
		for (j, &m_j) in m.iter().enumerate() {
			t[i + j] = t[i + j].madd52lo(y, m_j);
			t[i + j + 1] = t[i + j + 1].madd52hi(y, m_j);
		}
		let carry = t[i].srli(DIGIT_BITS);
		t[i + 1] += carry;
	}

	normalize(&mut t[n..]);
	out.copy_from_slice(&t[n..2 * n]);
}

/// `out = a·b` as a plain product of `2·n + 1` normalized limbs.
pub(crate) fn mul_wide(out: &mut [M512], a: &[M512], b: &[M512]) {
	debug_assert!(a.len() == b.len() && out.len() == a.len() + b.len() + 1);

	out.fill(M512::ZERO);
	for (i, &a_i) in a.iter().enumerate() {
		for (j, &b_j) in b.iter().enumerate() {
			out[i + j] = out[i + j].madd52lo(a_i, b_j);
			out[i + j + 1] = out[i + j + 1].madd52hi(a_i, b_j);
		}
	}
	normalize(out);
}

/// `x -= m` in the lanes where `x >= m`. Turns `x < 2·m` into the exact residue.
pub(crate) fn reduce_once(x: &mut [M512], m: &[M512]) {
	debug_assert_eq!(x.len(), m.len());

	// First pass only looks at the borrow of `x - m`.
	let mut borrow = M512::ZERO;
	for (&x_j, &m_j) in x.iter().zip(m) {
		borrow = (x_j - m_j - borrow).srli(63);
	}
	let subtract = !(M512::ZERO - borrow);

	sub_masked(x, m, subtract);
}

/// `x -= m & mask` limb-wise; returns the final borrow (0 or 1 per lane).
pub(crate) fn sub_masked(x: &mut [M512], m: &[M512], mask: M512) -> M512 {
	let digit_mask = M512::splat(DIGIT_MASK);
	let mut borrow = M512::ZERO;
	for (x_j, &m_j) in x.iter_mut().zip(m) {
		let t = *x_j - (m_j & mask) - borrow;
		borrow = t.srli(63);
		*x_j = t & digit_mask;
	}
	borrow
}

/// `x += m & mask` limb-wise; returns the carry out of the top digit (0 or 1 per lane).
pub(crate) fn add_masked(x: &mut [M512], m: &[M512], mask: M512) -> M512 {
	let digit_mask = M512::splat(DIGIT_MASK);
	let mut carry = M512::ZERO;
	for (x_j, &m_j) in x.iter_mut().zip(m) {
		let t = *x_j + (m_j & mask) + carry;
		carry = t.srli(DIGIT_BITS);
		*x_j = t & digit_mask;
	}
	carry
}

/// `out = R^2 mod m`, by `2·52·n` constant-time modular doublings of 1.
pub(crate) fn compute_rr(out: &mut [M512], m: &[M512]) {
	debug_assert_eq!(out.len(), m.len());

	set_one(out);
	for _ in 0..2 * DIGIT_BITS as usize * m.len() {
		double_mod(out, m);
	}
}

fn double_mod(x: &mut [M512], m: &[M512]) {
	let digit_mask = M512::splat(DIGIT_MASK);
	let mut carry = M512::ZERO;
	for x_j in x.iter_mut() {
		let t = x_j.slli(1) | carry;
		carry = t.srli(DIGIT_BITS);
		*x_j = t & digit_mask;
	}
	reduce_once(x, m);
}
