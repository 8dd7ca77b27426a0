// Copyright 2025 Irreducible Inc.

use ctprim_utils::ensure;

use crate::{
	error::Error,
	exp::{TABLE_SIZE, WINDOW_BITS},
	m512::M512,
	radix52::limbs_for_bits,
	scratch::ExpBuffers,
};

/// Modulus sizes the engine is built for.
pub const SUPPORTED_BITS: [usize; 4] = [1024, 2048, 3072, 4096];

/// The public exponent used by every public-key method.
pub const PUBLIC_EXPONENT: u64 = 65537;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RsaOperation {
	Public,
	Private,
	PrivateCrt,
}

/// Operation strategy chosen once by the caller and passed to every batch call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RsaMethod {
	operation: RsaOperation,
	bits: usize,
}

impl RsaMethod {
	pub fn public(bits: usize) -> Result<Self, Error> {
		Self::new(RsaOperation::Public, bits)
	}

	pub fn private(bits: usize) -> Result<Self, Error> {
		Self::new(RsaOperation::Private, bits)
	}

	pub fn private_crt(bits: usize) -> Result<Self, Error> {
		Self::new(RsaOperation::PrivateCrt, bits)
	}

	fn new(operation: RsaOperation, bits: usize) -> Result<Self, Error> {
		ensure!(SUPPORTED_BITS.contains(&bits), Error::UnsupportedBits(bits));
		Ok(Self { operation, bits })
	}

	pub fn operation(&self) -> RsaOperation {
		self.operation
	}

	pub fn bits(&self) -> usize {
		self.bits
	}

	pub fn public_exponent(&self) -> u64 {
		PUBLIC_EXPONENT
	}

	pub fn window_bits(&self) -> usize {
		WINDOW_BITS
	}

	/// Scratch size in bytes for one call with this method.
	pub fn buffer_size(&self) -> usize {
		self.scratch_limbs() * std::mem::size_of::<M512>()
	}

	/// Scratch size in vector registers. Must agree with the carving done by the batch calls.
	pub(crate) fn scratch_limbs(&self) -> usize {
		match self.operation {
			RsaOperation::Public => ExpBuffers::limbs(limbs_for_bits(self.bits), 0),
			RsaOperation::Private => ExpBuffers::limbs(limbs_for_bits(self.bits), TABLE_SIZE),
			RsaOperation::PrivateCrt => {
				let half = limbs_for_bits(self.bits / 2);
				// Wide input and its reduction copy, both half-results, then the exponentiation.
				2 * (2 * half + 1) + 2 * half + ExpBuffers::limbs(half, TABLE_SIZE)
			}
		}
	}

	/// Check that this method can serve a call of `operation` on `bits`-bit moduli.
	pub(crate) fn check(&self, operation: RsaOperation, bits: usize) -> Result<(), Error> {
		ensure!(SUPPORTED_BITS.contains(&bits), Error::UnsupportedBits(bits));
		ensure!(
			self.operation == operation,
			Error::WrongOperation {
				expected: operation,
				actual: self.operation
			}
		);
		ensure!(
			self.bits == bits,
			Error::BitsMismatch {
				method: self.bits,
				requested: bits
			}
		);
		Ok(())
	}
}
