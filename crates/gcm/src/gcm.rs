// Copyright 2025 Irreducible Inc.

use std::fmt::{self, Debug, Formatter};

use ctprim_utils::ensure;
use subtle::ConstantTimeEq;
use tracing::{instrument, trace};

use crate::{
	block::{inc32, length_block, xor_into, Block, BLOCK_SIZE},
	capability::{BlockEncryptor, GhashBackend},
	error::Error,
	state::{GcmState, Phase},
};

/// IV length limit: 2^64 - 1 bits.
pub const MAX_IV_LEN: u64 = (1 << 61) - 1;
/// AAD length limit: 2^64 - 1 bits.
pub const MAX_AAD_LEN: u64 = (1 << 61) - 1;
/// Payload length limit: 2^39 - 256 bits.
pub const MAX_TEXT_LEN: u64 = (1 << 36) - 32;

/// Length of an IV that is used as the counter prefix directly instead of being hashed.
const DIRECT_IV_LEN: u64 = 12;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
	Encrypt,
	Decrypt,
}

/// One AES-GCM session.
///
/// The phases advance `IvProcessing -> AadProcessing -> TextProcessing -> Finalized`. Calls that
/// need a later phase complete the pending transitions themselves; calls that would need an
/// earlier phase fail with [`Error::Sequence`] and leave the state untouched.
pub struct GcmContext<E, G> {
	encryptor: E,
	ghash: G,
	state: GcmState,
}

// The capabilities hold key material; only the redacted state is shown.
impl<E, G> Debug for GcmContext<E, G> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("GcmContext")
			.field("state", &self.state)
			.finish_non_exhaustive()
	}
}

impl<E: BlockEncryptor, G: GhashBackend> GcmContext<E, G> {
	/// Create a context and derive the hash subkey `H = E(0^128)`.
	pub fn new(encryptor: E, ghash: G) -> Self {
		let hash_subkey = encryptor.encrypt_block(&[0u8; BLOCK_SIZE]);
		Self {
			encryptor,
			ghash,
			state: GcmState::new(hash_subkey),
		}
	}

	/// Re-arm the context for a new message under the same key and absorb `iv`.
	pub fn start(&mut self, iv: &[u8]) -> Result<(), Error> {
		self.state.check()?;
		self.state = GcmState::new(self.state.hash_subkey);
		self.process_iv(iv)
	}

	pub fn phase(&self) -> Phase {
		self.state.check().unwrap_or(Phase::Finalized)
	}

	pub fn state(&self) -> &GcmState {
		&self.state
	}

	/// Export the session for later [`Self::from_state_bytes`].
	pub fn state_bytes(&self) -> &[u8] {
		bytemuck::bytes_of(&self.state)
	}

	/// Resume a session exported with [`Self::state_bytes`].
	///
	/// The encryptor must hold the same key: the stored hash subkey is compared against a fresh
	/// `E(0^128)`.
	pub fn from_state_bytes(encryptor: E, ghash: G, bytes: &[u8]) -> Result<Self, Error> {
		let expected = std::mem::size_of::<GcmState>();
		ensure!(
			bytes.len() == expected,
			Error::StateLength {
				expected,
				actual: bytes.len()
			}
		);
		let state: GcmState = bytemuck::pod_read_unaligned(bytes);
		state.check()?;

		let hash_subkey = encryptor.encrypt_block(&[0u8; BLOCK_SIZE]);
		ensure!(
			bool::from(hash_subkey.ct_eq(&state.hash_subkey)),
			Error::ContextMismatch("hash subkey does not match the key")
		);

		Ok(Self {
			encryptor,
			ghash,
			state,
		})
	}

	/// Absorb IV bytes. May be called several times before the first AAD or payload call.
	pub fn process_iv(&mut self, iv: &[u8]) -> Result<(), Error> {
		let phase = self.state.check()?;
		ensure!(phase == Phase::IvProcessing, Error::Sequence(phase));
		ensure!(
			self.state.iv_len.saturating_add(iv.len() as u64) <= MAX_IV_LEN,
			Error::LengthLimit {
				what: "IV",
				limit: MAX_IV_LEN
			}
		);

		let hash_subkey = self.state.hash_subkey;
		let state = &mut self.state;
		absorb(&self.ghash, &mut state.counter, &mut state.buf_len, iv, &hash_subkey);
		state.iv_len += iv.len() as u64;

		Ok(())
	}

	/// Absorb additional authenticated data.
	///
	/// The first call completes the IV: a 12-byte IV becomes the counter prefix with a low word
	/// of 1, any other length is hashed together with its bit length. The encrypted initial
	/// counter is saved for the tag. An empty `aad` only performs that transition.
	pub fn process_aad(&mut self, aad: &[u8]) -> Result<(), Error> {
		let phase = self.state.check()?;
		ensure!(
			matches!(phase, Phase::IvProcessing | Phase::AadProcessing),
			Error::Sequence(phase)
		);
		ensure!(phase != Phase::IvProcessing || self.state.iv_len != 0, Error::MissingIv);
		let aad_len = if phase == Phase::AadProcessing {
			self.state.aad_len
		} else {
			0
		};
		ensure!(
			aad_len.saturating_add(aad.len() as u64) <= MAX_AAD_LEN,
			Error::LengthLimit {
				what: "AAD",
				limit: MAX_AAD_LEN
			}
		);

		if phase == Phase::IvProcessing {
			self.complete_iv();
		}

		let hash_subkey = self.state.hash_subkey;
		let state = &mut self.state;
		absorb(&self.ghash, &mut state.ghash, &mut state.buf_len, aad, &hash_subkey);
		state.aad_len += aad.len() as u64;

		Ok(())
	}

	#[instrument(skip_all, name = "GcmContext::encrypt", level = "debug", fields(len = src.len()))]
	pub fn encrypt(&mut self, src: &[u8], dst: &mut [u8]) -> Result<(), Error> {
		self.process_text(src, dst, Direction::Encrypt)
	}

	#[instrument(skip_all, name = "GcmContext::decrypt", level = "debug", fields(len = src.len()))]
	pub fn decrypt(&mut self, src: &[u8], dst: &mut [u8]) -> Result<(), Error> {
		self.process_text(src, dst, Direction::Decrypt)
	}

	/// Finish the session and write the first `tag.len()` bytes of the tag.
	pub fn get_tag(&mut self, tag: &mut [u8]) -> Result<(), Error> {
		let phase = self.state.check()?;
		ensure!(phase != Phase::Finalized, Error::Sequence(phase));
		ensure!((1..=BLOCK_SIZE).contains(&tag.len()), Error::TagLength(tag.len()));
		ensure!(phase != Phase::IvProcessing || self.state.iv_len != 0, Error::MissingIv);

		self.begin_text(phase);

		let hash_subkey = self.state.hash_subkey;
		let state = &mut self.state;
		if state.buf_len != 0 {
			self.ghash.mul_h(&mut state.ghash, &hash_subkey);
			state.buf_len = 0;
		}
		xor_into(&mut state.ghash, &length_block(state.aad_len, state.txt_len));
		self.ghash.mul_h(&mut state.ghash, &hash_subkey);

		let mut full_tag = state.ghash;
		xor_into(&mut full_tag, &state.encrypted_counter0);
		tag.copy_from_slice(&full_tag[..tag.len()]);

		state.set_phase(Phase::Finalized);
		trace!("GCM session finalized");

		Ok(())
	}

	/// Finish the session and compare its tag with `expected` in constant time.
	pub fn verify_tag(&mut self, expected: &[u8]) -> Result<bool, Error> {
		let mut tag = [0u8; BLOCK_SIZE];
		let tag = tag
			.get_mut(..expected.len())
			.ok_or(Error::TagLength(expected.len()))?;
		self.get_tag(tag)?;
		Ok(bool::from(tag.ct_eq(expected)))
	}

	fn complete_iv(&mut self) {
		let hash_subkey = self.state.hash_subkey;
		let state = &mut self.state;
		if state.iv_len == DIRECT_IV_LEN {
			state.counter[12..].copy_from_slice(&[0, 0, 0, 1]);
		} else {
			if state.buf_len != 0 {
				self.ghash.mul_h(&mut state.counter, &hash_subkey);
			}
			xor_into(&mut state.counter, &length_block(0, state.iv_len));
			self.ghash.mul_h(&mut state.counter, &hash_subkey);
		}

		state.encrypted_counter0 = self.encryptor.encrypt_block(&state.counter);
		state.aad_len = 0;
		state.buf_len = 0;
		state.set_phase(Phase::AadProcessing);
		trace!(iv_len = state.iv_len, "GCM IV complete");
	}

	/// Complete every transition up to the payload phase.
	fn begin_text(&mut self, phase: Phase) {
		if phase == Phase::IvProcessing {
			self.complete_iv();
		}
		if phase <= Phase::AadProcessing {
			let hash_subkey = self.state.hash_subkey;
			let state = &mut self.state;
			if state.buf_len != 0 {
				self.ghash.mul_h(&mut state.ghash, &hash_subkey);
				state.buf_len = 0;
			}
			state.txt_len = 0;
			state.set_phase(Phase::TextProcessing);
			trace!(aad_len = state.aad_len, "GCM AAD complete");
		}
	}

	fn process_text(&mut self, src: &[u8], dst: &mut [u8], direction: Direction) -> Result<(), Error> {
		let phase = self.state.check()?;
		ensure!(phase != Phase::Finalized, Error::Sequence(phase));
		ensure!(
			src.len() == dst.len(),
			Error::BufferLength {
				src: src.len(),
				dst: dst.len()
			}
		);
		ensure!(phase != Phase::IvProcessing || self.state.iv_len != 0, Error::MissingIv);
		let txt_len = if phase == Phase::TextProcessing {
			self.state.txt_len
		} else {
			0
		};
		ensure!(
			txt_len.saturating_add(src.len() as u64) <= MAX_TEXT_LEN,
			Error::LengthLimit {
				what: "payload",
				limit: MAX_TEXT_LEN
			}
		);

		self.begin_text(phase);

		let hash_subkey = self.state.hash_subkey;
		let mut offset = 0;

		// Finish a pending partial block byte by byte.
		while self.state.buf_len != 0 && offset < src.len() {
			dst[offset] = self.text_byte(src[offset], direction, &hash_subkey);
			offset += 1;
		}

		// Whole blocks: keystream first, then one bulk authentication over the ciphertext.
		let bulk_len = (src.len() - offset) & !(BLOCK_SIZE - 1);
		if bulk_len != 0 {
			let src_blocks = &src[offset..offset + bulk_len];
			let dst_blocks = &mut dst[offset..offset + bulk_len];
			for (s, d) in src_blocks
				.chunks_exact(BLOCK_SIZE)
				.zip(dst_blocks.chunks_exact_mut(BLOCK_SIZE))
			{
				inc32(&mut self.state.counter);
				let keystream = self.encryptor.encrypt_block(&self.state.counter);
				d.copy_from_slice(&keystream);
				xor_into(d, s);
			}

			let ciphertext = match direction {
				Direction::Encrypt => &*dst_blocks,
				Direction::Decrypt => src_blocks,
			};
			self.ghash.auth(&mut self.state.ghash, ciphertext, &hash_subkey);
			offset += bulk_len;
		}

		// Tail shorter than a block stays buffered.
		while offset < src.len() {
			dst[offset] = self.text_byte(src[offset], direction, &hash_subkey);
			offset += 1;
		}

		self.state.txt_len += src.len() as u64;
		Ok(())
	}

	/// Process one payload byte at the current partial-block position.
	#[inline]
	fn text_byte(&mut self, input: u8, direction: Direction, hash_subkey: &Block) -> u8 {
		let state = &mut self.state;
		let pos = state.buf_len as usize;
		if pos == 0 {
			inc32(&mut state.counter);
			state.encrypted_counter = self.encryptor.encrypt_block(&state.counter);
		}

		let output = input ^ state.encrypted_counter[pos];
		state.ghash[pos] ^= match direction {
			Direction::Encrypt => output,
			Direction::Decrypt => input,
		};

		if pos + 1 == BLOCK_SIZE {
			self.ghash.mul_h(&mut state.ghash, hash_subkey);
			state.buf_len = 0;
		} else {
			state.buf_len += 1;
		}
		output
	}
}

/// XOR-absorb `data` into `acc`, hashing every completed block. `buf_len` tracks the partial
/// block.
fn absorb<G: GhashBackend>(
	ghash: &G,
	acc: &mut Block,
	buf_len: &mut u32,
	mut data: &[u8],
	hash_subkey: &Block,
) {
	if *buf_len != 0 {
		let pos = *buf_len as usize;
		let take = data.len().min(BLOCK_SIZE - pos);
		xor_into(&mut acc[pos..], &data[..take]);
		*buf_len += take as u32;
		if *buf_len as usize == BLOCK_SIZE {
			ghash.mul_h(acc, hash_subkey);
			*buf_len = 0;
		}
		data = &data[take..];
	}

	let whole = data.len() & !(BLOCK_SIZE - 1);
	if whole != 0 {
		ghash.auth(acc, &data[..whole], hash_subkey);
		data = &data[whole..];
	}

	if !data.is_empty() {
		xor_into(acc, data);
		*buf_len = data.len() as u32;
	}
}
