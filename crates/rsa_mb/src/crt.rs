// Copyright 2025 Irreducible Inc.

//! The two halves of a CRT private operation and their recombination.

use crate::{
	exp::mont_exp_fixed_window,
	m512::{LANES, M512},
	mont::{add_masked, amm, compute_rr, mul_wide, redc_wide, reduce_once, sub_masked, Modulus},
	radix52::{load_le_words, normalize, set_one},
	scratch::ExpBuffers,
};

/// `result = c^d mod prime` per lane, with `c` the full-width input.
///
/// `c` and `t` have `2·n + 1` limbs; `t` is clobbered. On return `bufs.m` and `bufs.rr` hold the
/// prime and its `R^2`, which the recombination reuses.
pub(crate) fn exp_mod_prime(
	result: &mut [M512],
	bufs: &mut ExpBuffers,
	c: &[M512],
	t: &mut [M512],
	prime: [&[u64]; LANES],
	exponent: [&[u64]; LANES],
	exp_bits: usize,
) {
	let n = result.len();

	load_le_words(bufs.m, prime);
	let modulus = Modulus::new(bufs.m);
	compute_rr(bufs.rr, bufs.m);

	// Reduce the input: c·R^{-1}, then two products by R^2 give c·R mod prime.
	t.copy_from_slice(c);
	redc_wide(bufs.x, t, &modulus);
	amm(bufs.tmp, bufs.x, bufs.rr, &modulus);
	amm(&mut bufs.table[n..2 * n], bufs.tmp, bufs.rr, &modulus);

	mont_exp_fixed_window(
		bufs.acc,
		bufs.table,
		bufs.tmp,
		bufs.x,
		exponent,
		exp_bits,
		bufs.rr,
		&modulus,
	);

	set_one(bufs.x);
	amm(result, bufs.acc, bufs.x, &modulus);
	reduce_once(result, bufs.m);
}

/// Garner recombination: `out = m2 + q·(qInv·(m1 - m2) mod p)`.
///
/// `bufs.m` and `bufs.rr` must hold `p` and its `R^2`. `out` has `2·n + 1` limbs.
pub(crate) fn recombine(
	out: &mut [M512],
	bufs: &mut ExpBuffers,
	m1: &[M512],
	m2: &[M512],
	q: [&[u64]; LANES],
	q_inv: [&[u64]; LANES],
) {
	let modulus = Modulus::new(bufs.m);

	// m1 - m2 lies in (-2p, p) for balanced primes; add p back at most twice.
	bufs.x.copy_from_slice(m1);
	let borrow = sub_masked(bufs.x, m2, M512::splat(u64::MAX));
	let mut negative = M512::ZERO - borrow;
	for _ in 0..2 {
		let carry = add_masked(bufs.x, bufs.m, negative);
		negative &= !(M512::ZERO - carry);
	}

	load_le_words(bufs.tmp, q_inv);
	amm(bufs.acc, bufs.x, bufs.tmp, &modulus);
	amm(bufs.x, bufs.acc, bufs.rr, &modulus);
	reduce_once(bufs.x, bufs.m);

	load_le_words(bufs.tmp, q);
	mul_wide(out, bufs.x, bufs.tmp);
	for (o, &v) in out.iter_mut().zip(m2) {
		*o += v;
	}
	normalize(out);
}
