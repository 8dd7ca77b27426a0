// Copyright 2025 Irreducible Inc.

use ctprim_utils::ensure;

use crate::{error::Error, m512::M512, method::RsaMethod};

/// Reusable, 64-byte aligned working memory for the batch calls.
///
/// One buffer serves one call at a time; concurrent calls need their own buffers.
pub struct ScratchBuffer {
	limbs: Vec<M512>,
}

impl ScratchBuffer {
	pub fn new(method: &RsaMethod) -> Self {
		Self::for_methods([method])
	}

	/// A buffer large enough for every method in `methods`.
	pub fn for_methods<'a>(methods: impl IntoIterator<Item = &'a RsaMethod>) -> Self {
		let len = methods
			.into_iter()
			.map(RsaMethod::scratch_limbs)
			.max()
			.unwrap_or(0);
		Self {
			limbs: vec![M512::ZERO; len],
		}
	}

	/// Size in bytes.
	pub fn len(&self) -> usize {
		std::mem::size_of_val(self.limbs.as_slice())
	}

	pub fn is_empty(&self) -> bool {
		self.limbs.is_empty()
	}

	pub fn as_bytes_mut(&mut self) -> &mut [u8] {
		bytemuck::cast_slice_mut(&mut self.limbs)
	}
}

impl std::fmt::Debug for ScratchBuffer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ScratchBuffer")
			.field("len", &self.len())
			.finish_non_exhaustive()
	}
}

/// View the first `limbs` vector registers of a caller's byte buffer.
pub(crate) fn scratch_limbs(bytes: &mut [u8], limbs: usize) -> Result<&mut [M512], Error> {
	let required = limbs * std::mem::size_of::<M512>();
	ensure!(
		bytes.len() >= required,
		Error::ScratchTooSmall {
			required,
			actual: bytes.len()
		}
	);
	bytemuck::try_cast_slice_mut(&mut bytes[..required]).map_err(|_| Error::ScratchMisaligned)
}

/// Hands out consecutive, non-overlapping pieces of a scratch region.
pub(crate) struct Carve<'a> {
	rest: &'a mut [M512],
}

impl<'a> Carve<'a> {
	pub fn new(limbs: &'a mut [M512]) -> Self {
		Self { rest: limbs }
	}

	pub fn take(&mut self, len: usize) -> &'a mut [M512] {
		debug_assert!(len <= self.rest.len());

		let rest = std::mem::take(&mut self.rest);
		let (head, tail) = rest.split_at_mut(len);
		self.rest = tail;
		head
	}
}

/// Working set of one modular exponentiation over `n`-limb numbers.
pub(crate) struct ExpBuffers<'a> {
	pub m: &'a mut [M512],
	pub rr: &'a mut [M512],
	pub x: &'a mut [M512],
	pub acc: &'a mut [M512],
	pub tmp: &'a mut [M512],
	pub table: &'a mut [M512],
}

impl<'a> ExpBuffers<'a> {
	const SINGLE_BUFFERS: usize = 5;

	/// Vector registers needed for `n`-limb numbers and a table of `table_entries` powers.
	pub const fn limbs(n: usize, table_entries: usize) -> usize {
		(Self::SINGLE_BUFFERS + table_entries) * n
	}

	pub fn carve(carve: &mut Carve<'a>, n: usize, table_entries: usize) -> Self {
		Self {
			m: carve.take(n),
			rr: carve.take(n),
			x: carve.take(n),
			acc: carve.take(n),
			tmp: carve.take(n),
			table: carve.take(table_entries * n),
		}
	}
}
