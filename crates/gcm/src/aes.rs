// Copyright 2025 Irreducible Inc.

//! Software AES encryption without secret-dependent memory accesses.
//!
//! The S-box is built once per process from the field inverse in GF(2^8) and stored packed into
//! 64-bit words. Every substitution reads the whole packed table and keeps the wanted word with a
//! mask, so cache lines touched are the same for every byte value.

use ctprim_ct::mask::eq_mask;
use lazy_static::lazy_static;

use crate::{
	block::{Block, BLOCK_SIZE},
	capability::BlockEncryptor,
	error::Error,
};

const MAX_ROUNDS: usize = 14;
const ROUND_CONSTANTS: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

lazy_static! {
	static ref SBOX_WORDS: [u64; 32] = build_sbox_words();
}

/// Multiplication in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
fn gf256_mul(mut a: u8, mut b: u8) -> u8 {
	let mut product = 0u8;
	for _ in 0..8 {
		product ^= a & 0u8.wrapping_sub(b & 1);
		a = xtime(a);
		b >>= 1;
	}
	product
}

#[inline]
fn xtime(a: u8) -> u8 {
	(a << 1) ^ (0x1b & 0u8.wrapping_sub(a >> 7))
}

fn sbox_entry(x: u8) -> u8 {
	// Only runs while the table is built, from public loop indices.
	let inverse = (1..=255u8).find(|&y| gf256_mul(x, y) == 1).unwrap_or(0);
	inverse
		^ inverse.rotate_left(1)
		^ inverse.rotate_left(2)
		^ inverse.rotate_left(3)
		^ inverse.rotate_left(4)
		^ 0x63
}

fn build_sbox_words() -> [u64; 32] {
	let mut words = [0u64; 32];
	for x in 0..=255u8 {
		words[x as usize / 8] |= (sbox_entry(x) as u64) << (8 * (x as usize % 8));
	}
	words
}

#[inline]
fn sub_byte(x: u8) -> u8 {
	let word_index = (x >> 3) as u64;
	let mut word = 0u64;
	for (i, &w) in SBOX_WORDS.iter().enumerate() {
		word |= w & eq_mask(i as u64, word_index);
	}
	(word >> (8 * (x & 7) as u32)) as u8
}

#[inline]
fn sub_word(w: u32) -> u32 {
	u32::from_be_bytes(w.to_be_bytes().map(sub_byte))
}

/// AES block encryptor with a 128, 192 or 256-bit key.
#[derive(Clone)]
pub struct Aes {
	round_keys: [u32; 4 * (MAX_ROUNDS + 1)],
	rounds: usize,
}

impl Aes {
	pub fn new(key: &[u8]) -> Result<Self, Error> {
		let key_words = match key.len() {
			16 | 24 | 32 => key.len() / 4,
			len => return Err(Error::KeyLength(len)),
		};
		let rounds = key_words + 6;

		let mut round_keys = [0u32; 4 * (MAX_ROUNDS + 1)];
		for (w, chunk) in round_keys.iter_mut().zip(key.chunks_exact(4)) {
			*w = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
		}
		for i in key_words..4 * (rounds + 1) {
			let mut temp = round_keys[i - 1];
			if i % key_words == 0 {
				temp = sub_word(temp.rotate_left(8))
					^ ((ROUND_CONSTANTS[i / key_words - 1] as u32) << 24);
			} else if key_words > 6 && i % key_words == 4 {
				temp = sub_word(temp);
			}
			round_keys[i] = round_keys[i - key_words] ^ temp;
		}

		Ok(Self { round_keys, rounds })
	}

	/// Key length in bits.
	pub fn key_bits(&self) -> usize {
		(self.rounds - 6) * 32
	}

	fn add_round_key(&self, state: &mut Block, round: usize) {
		for c in 0..4 {
			let key = self.round_keys[4 * round + c].to_be_bytes();
			for r in 0..4 {
				state[4 * c + r] ^= key[r];
			}
		}
	}
}

impl std::fmt::Debug for Aes {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Aes")
			.field("key_bits", &self.key_bits())
			.finish_non_exhaustive()
	}
}

fn sub_bytes(state: &mut Block) {
	for b in state.iter_mut() {
		*b = sub_byte(*b);
	}
}

fn shift_rows(state: &mut Block) {
	let old = *state;
	for c in 0..4 {
		for r in 1..4 {
			state[4 * c + r] = old[4 * ((c + r) % 4) + r];
		}
	}
}

fn mix_columns(state: &mut Block) {
	for column in state.chunks_exact_mut(4) {
		let [a0, a1, a2, a3] = [column[0], column[1], column[2], column[3]];
		let all = a0 ^ a1 ^ a2 ^ a3;
		column[0] = a0 ^ all ^ xtime(a0 ^ a1);
		column[1] = a1 ^ all ^ xtime(a1 ^ a2);
		column[2] = a2 ^ all ^ xtime(a2 ^ a3);
		column[3] = a3 ^ all ^ xtime(a3 ^ a0);
	}
}

impl BlockEncryptor for Aes {
	fn encrypt_block(&self, block: &Block) -> Block {
		let mut state = *block;
		self.add_round_key(&mut state, 0);
		for round in 1..self.rounds {
			sub_bytes(&mut state);
			shift_rows(&mut state);
			mix_columns(&mut state);
			self.add_round_key(&mut state, round);
		}
		sub_bytes(&mut state);
		shift_rows(&mut state);
		self.add_round_key(&mut state, self.rounds);

		debug_assert_eq!(state.len(), BLOCK_SIZE);
		state
	}
}
