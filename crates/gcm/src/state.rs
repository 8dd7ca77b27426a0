// Copyright 2025 Irreducible Inc.

use std::fmt::{self, Debug, Formatter};

use bytemuck::{Pod, Zeroable};
use static_assertions::assert_eq_size;

use crate::{
	block::{Block, BLOCK_SIZE},
	error::Error,
};

/// Tag stored in every live state ("GCM1").
pub(crate) const STATE_ID: u32 = 0x4743_4d31;

/// Processing phases. A context only ever moves forward through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum Phase {
	IvProcessing = 1,
	AadProcessing = 2,
	TextProcessing = 3,
	Finalized = 4,
}

impl Phase {
	fn from_raw(raw: u32) -> Option<Self> {
		match raw {
			1 => Some(Self::IvProcessing),
			2 => Some(Self::AadProcessing),
			3 => Some(Self::TextProcessing),
			4 => Some(Self::Finalized),
			_ => None,
		}
	}
}

/// The persistent part of a GCM session, laid out for byte-level export.
///
/// `buf_len` counts bytes folded into the current partial block: IV bytes in `counter` during
/// IV processing, AAD or ciphertext bytes in `ghash` afterwards.
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct GcmState {
	pub(crate) id: u32,
	pub(crate) phase: u32,
	pub(crate) iv_len: u64,
	pub(crate) aad_len: u64,
	pub(crate) txt_len: u64,
	pub(crate) buf_len: u32,
	pub(crate) reserved: u32,
	pub(crate) counter: Block,
	pub(crate) encrypted_counter0: Block,
	pub(crate) encrypted_counter: Block,
	pub(crate) ghash: Block,
	pub(crate) hash_subkey: Block,
}

assert_eq_size!(GcmState, [u8; 120]);

impl GcmState {
	pub(crate) fn new(hash_subkey: Block) -> Self {
		Self {
			id: STATE_ID,
			phase: Phase::IvProcessing as u32,
			hash_subkey,
			..Zeroable::zeroed()
		}
	}

	/// Validate the tag and the phase, as every entry point does first.
	pub(crate) fn check(&self) -> Result<Phase, Error> {
		if self.id != STATE_ID {
			return Err(Error::ContextMismatch("bad state id"));
		}
		let phase = Phase::from_raw(self.phase).ok_or(Error::ContextMismatch("unknown phase"))?;
		if self.buf_len as usize >= BLOCK_SIZE {
			return Err(Error::ContextMismatch("partial block length out of range"));
		}
		Ok(phase)
	}

	pub(crate) fn set_phase(&mut self, phase: Phase) {
		debug_assert!(Phase::from_raw(self.phase).map_or(true, |current| current <= phase));
		self.phase = phase as u32;
	}

	pub fn iv_len(&self) -> u64 {
		self.iv_len
	}

	pub fn aad_len(&self) -> u64 {
		self.aad_len
	}

	pub fn text_len(&self) -> u64 {
		self.txt_len
	}
}

impl Debug for GcmState {
	// Counters, accumulator and subkey are secret-dependent.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("GcmState")
			.field("phase", &Phase::from_raw(self.phase))
			.field("iv_len", &self.iv_len)
			.field("aad_len", &self.aad_len)
			.field("txt_len", &self.txt_len)
			.field("buf_len", &self.buf_len)
			.finish_non_exhaustive()
	}
}
