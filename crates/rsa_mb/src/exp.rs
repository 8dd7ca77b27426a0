// Copyright 2025 Irreducible Inc.

//! Exponentiation ladders in the Montgomery domain.
//!
//! The private ladder is a fixed-window one: the number of squarings and multiplications depends
//! only on the exponent width, and every table lookup reads all entries.

use ctprim_utils::checked_arithmetics::div_ceil;

use crate::{
	m512::{LANES, M512},
	mont::{amm, Modulus},
	radix52::set_one,
};

/// Width of the fixed exponent window.
pub const WINDOW_BITS: usize = 5;

/// Number of precomputed powers.
pub(crate) const TABLE_SIZE: usize = 1 << WINDOW_BITS;

/// Bits `[bit, bit + width)` of each lane's little-endian exponent.
///
/// `bit` and `width` are public; only the extracted values are secret.
fn window_digits(exponents: [&[u64]; LANES], bit: usize, width: usize) -> M512 {
	debug_assert!(width <= WINDOW_BITS);

	let word = bit / 64;
	let shift = bit % 64;
	let digit_mask = (1u64 << width) - 1;
	M512::from_fn(|lane| {
		let words = exponents[lane];
		let mut digits = words.get(word).copied().unwrap_or(0) >> shift;
		if shift + width > 64 {
			digits |= words.get(word + 1).copied().unwrap_or(0) << (64 - shift);
		}
		digits & digit_mask
	})
}

/// `out = table[digit]` per lane, touching every table entry.
fn gather(out: &mut [M512], table: &[M512], digits: M512) {
	let n = out.len();
	debug_assert_eq!(table.len(), TABLE_SIZE * n);

	out.fill(M512::ZERO);
	for (k, entry) in table.chunks_exact(n).enumerate() {
		let select = M512::eq_mask(digits, M512::splat(k as u64));
		for (o, &e) in out.iter_mut().zip(entry) {
			*o |= e & select;
		}
	}
}

fn square_in_place(acc: &mut [M512], tmp: &mut [M512], modulus: &Modulus) {
	amm(tmp, acc, acc, modulus);
	acc.copy_from_slice(tmp);
}

fn mul_in_place(acc: &mut [M512], b: &[M512], tmp: &mut [M512], modulus: &Modulus) {
	amm(tmp, acc, b, modulus);
	acc.copy_from_slice(tmp);
}

/// Fixed-window exponentiation: `acc = base^e` in the Montgomery domain.
///
/// On entry the second table entry (`table[n..2n]`) holds the base in Montgomery form; the rest of
/// the table, `tmp` and `gathered` are scratch. `exp_bits` is the public exponent width; exponent
/// words past it must be zero.
#[allow(clippy::too_many_arguments)]
pub(crate) fn mont_exp_fixed_window(
	acc: &mut [M512],
	table: &mut [M512],
	tmp: &mut [M512],
	gathered: &mut [M512],
	exponents: [&[u64]; LANES],
	exp_bits: usize,
	rr: &[M512],
	modulus: &Modulus,
) {
	let n = modulus.len();
	debug_assert!(exp_bits > 0 && table.len() == TABLE_SIZE * n);

	// table[0] = R mod m, the Montgomery form of 1.
	set_one(gathered);
	amm(&mut table[..n], rr, gathered, modulus);
	for k in 2..TABLE_SIZE {
		let (lower, upper) = table.split_at_mut(k * n);
		amm(&mut upper[..n], &lower[(k - 1) * n..], &lower[n..2 * n], modulus);
	}

	let windows = div_ceil(exp_bits, WINDOW_BITS);
	let mut bit = (windows - 1) * WINDOW_BITS;
	gather(acc, table, window_digits(exponents, bit, exp_bits - bit));

	while bit > 0 {
		bit -= WINDOW_BITS;
		for _ in 0..WINDOW_BITS {
			square_in_place(acc, tmp, modulus);
		}
		gather(gathered, table, window_digits(exponents, bit, WINDOW_BITS));
		mul_in_place(acc, gathered, tmp, modulus);
	}
}

/// Left-to-right binary exponentiation by a public exponent shared by all lanes.
///
/// `acc` receives `base^e` in the Montgomery domain; `base` is in Montgomery form.
pub(crate) fn mont_exp_public(
	acc: &mut [M512],
	base: &[M512],
	tmp: &mut [M512],
	exponent: u64,
	modulus: &Modulus,
) {
	debug_assert!(exponent > 0);

	acc.copy_from_slice(base);
	let top = 63 - exponent.leading_zeros();
	for bit in (0..top).rev() {
		square_in_place(acc, tmp, modulus);
		if (exponent >> bit) & 1 == 1 {
			mul_in_place(acc, base, tmp, modulus);
		}
	}
}
