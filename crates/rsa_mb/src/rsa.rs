// Copyright 2025 Irreducible Inc.

//! Batch entry points: eight independent RSA operations per call.
//!
//! Messages and results are big-endian byte strings of `bits / 8` bytes. Moduli, exponents and CRT
//! components are little-endian 64-bit words: `bits / 64` words for `n` and `d`, `bits / 128` for
//! `p`, `q`, `dp`, `dq` and `qInv`. All lanes share one modulus size and one instruction stream.

use ctprim_utils::ensure;
use tracing::instrument;

use crate::{
	crt::{exp_mod_prime, recombine},
	error::Error,
	exp::{mont_exp_fixed_window, mont_exp_public, TABLE_SIZE},
	m512::{LANES, M512},
	method::{RsaMethod, RsaOperation},
	mont::{amm, compute_rr, reduce_once, Modulus},
	radix52::{limbs_for_bits, load_be_bytes, load_le_words, set_one, store_be_bytes},
	scratch::{scratch_limbs, Carve, ExpBuffers},
};

fn check_lanes(
	what: &'static str,
	lengths: impl IntoIterator<Item = usize>,
	expected: usize,
) -> Result<(), Error> {
	for (lane, actual) in lengths.into_iter().enumerate() {
		ensure!(actual != 0, Error::MissingBuffer { lane, what });
		ensure!(
			actual == expected,
			Error::BufferLength {
				lane,
				what,
				expected,
				actual
			}
		);
	}
	Ok(())
}

fn check_messages(
	messages: &[&[u8]; LANES],
	outputs: &[&mut [u8]; LANES],
	bits: usize,
) -> Result<(), Error> {
	check_lanes("message", messages.iter().map(|m| m.len()), bits / 8)?;
	check_lanes("output", outputs.iter().map(|o| o.len()), bits / 8)
}

fn check_words(what: &'static str, words: &[&[u64]; LANES], expected: usize) -> Result<(), Error> {
	check_lanes(what, words.iter().map(|w| w.len()), expected)
}

/// `outputs[i] = messages[i]^e mod moduli[i]` with the method's public exponent.
#[instrument(skip_all, name = "rsa_public_mb8", level = "debug", fields(bits = rsa_bits))]
pub fn rsa_public_mb8(
	messages: [&[u8]; LANES],
	outputs: [&mut [u8]; LANES],
	moduli: [&[u64]; LANES],
	rsa_bits: usize,
	method: &RsaMethod,
	scratch: &mut [u8],
) -> Result<(), Error> {
	method.check(RsaOperation::Public, rsa_bits)?;
	check_messages(&messages, &outputs, rsa_bits)?;
	check_words("modulus", &moduli, rsa_bits / 64)?;
	let limbs = scratch_limbs(scratch, method.scratch_limbs())?;

	let n = limbs_for_bits(rsa_bits);
	let mut carve = Carve::new(limbs);
	let mut bufs = ExpBuffers::carve(&mut carve, n, 0);

	load_le_words(bufs.m, moduli);
	let modulus = Modulus::new(bufs.m);
	compute_rr(bufs.rr, bufs.m);

	load_be_bytes(bufs.tmp, messages);
	amm(bufs.x, bufs.tmp, bufs.rr, &modulus);
	mont_exp_public(bufs.acc, bufs.x, bufs.tmp, method.public_exponent(), &modulus);

	set_one(bufs.x);
	amm(bufs.tmp, bufs.acc, bufs.x, &modulus);
	reduce_once(bufs.tmp, bufs.m);
	store_be_bytes(bufs.tmp, outputs);
	// Only public values pass through this scratch, so it is left as is.

	Ok(())
}

/// `outputs[i] = messages[i]^exponents[i] mod moduli[i]`.
///
/// The ladder shape depends only on `rsa_bits`, never on the exponents.
#[instrument(skip_all, name = "rsa_private_mb8", level = "debug", fields(bits = rsa_bits))]
pub fn rsa_private_mb8(
	messages: [&[u8]; LANES],
	outputs: [&mut [u8]; LANES],
	exponents: [&[u64]; LANES],
	moduli: [&[u64]; LANES],
	rsa_bits: usize,
	method: &RsaMethod,
	scratch: &mut [u8],
) -> Result<(), Error> {
	method.check(RsaOperation::Private, rsa_bits)?;
	check_messages(&messages, &outputs, rsa_bits)?;
	check_words("exponent", &exponents, rsa_bits / 64)?;
	check_words("modulus", &moduli, rsa_bits / 64)?;
	let limbs = scratch_limbs(scratch, method.scratch_limbs())?;

	private_exp(limbs, messages, outputs, exponents, moduli, rsa_bits);
	limbs.fill(M512::ZERO);

	Ok(())
}

fn private_exp(
	limbs: &mut [M512],
	messages: [&[u8]; LANES],
	outputs: [&mut [u8]; LANES],
	exponents: [&[u64]; LANES],
	moduli: [&[u64]; LANES],
	rsa_bits: usize,
) {
	let n = limbs_for_bits(rsa_bits);
	let mut carve = Carve::new(limbs);
	let mut bufs = ExpBuffers::carve(&mut carve, n, TABLE_SIZE);

	load_le_words(bufs.m, moduli);
	let modulus = Modulus::new(bufs.m);
	compute_rr(bufs.rr, bufs.m);

	load_be_bytes(bufs.x, messages);
	amm(&mut bufs.table[n..2 * n], bufs.x, bufs.rr, &modulus);
	mont_exp_fixed_window(
		bufs.acc,
		bufs.table,
		bufs.tmp,
		bufs.x,
		exponents,
		rsa_bits,
		bufs.rr,
		&modulus,
	);

	set_one(bufs.x);
	amm(bufs.tmp, bufs.acc, bufs.x, &modulus);
	reduce_once(bufs.tmp, bufs.m);
	store_be_bytes(bufs.tmp, outputs);
}

/// Private operation from the CRT components of each lane's key.
///
/// `q_inv` is `q^{-1} mod p`.
#[allow(clippy::too_many_arguments)]
#[instrument(skip_all, name = "rsa_private_crt_mb8", level = "debug", fields(bits = rsa_bits))]
pub fn rsa_private_crt_mb8(
	messages: [&[u8]; LANES],
	outputs: [&mut [u8]; LANES],
	p: [&[u64]; LANES],
	q: [&[u64]; LANES],
	dp: [&[u64]; LANES],
	dq: [&[u64]; LANES],
	q_inv: [&[u64]; LANES],
	rsa_bits: usize,
	method: &RsaMethod,
	scratch: &mut [u8],
) -> Result<(), Error> {
	method.check(RsaOperation::PrivateCrt, rsa_bits)?;
	check_messages(&messages, &outputs, rsa_bits)?;
	let half_words = rsa_bits / 128;
	for (what, words) in [("p", &p), ("q", &q), ("dp", &dp), ("dq", &dq), ("qInv", &q_inv)] {
		check_words(what, words, half_words)?;
	}
	let limbs = scratch_limbs(scratch, method.scratch_limbs())?;

	let half_bits = rsa_bits / 2;
	let n = limbs_for_bits(half_bits);
	{
		let mut carve = Carve::new(&mut *limbs);
		let c = carve.take(2 * n + 1);
		let t = carve.take(2 * n + 1);
		let m1 = carve.take(n);
		let m2 = carve.take(n);
		let mut bufs = ExpBuffers::carve(&mut carve, n, TABLE_SIZE);

		load_be_bytes(c, messages);
		// q first, so that p and its R^2 are still loaded for the recombination.
		exp_mod_prime(m2, &mut bufs, c, t, q, dq, half_bits);
		exp_mod_prime(m1, &mut bufs, c, t, p, dp, half_bits);
		recombine(c, &mut bufs, m1, m2, q, q_inv);
		store_be_bytes(c, outputs);
	}
	limbs.fill(M512::ZERO);

	Ok(())
}
