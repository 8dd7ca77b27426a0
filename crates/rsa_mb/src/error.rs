// Copyright 2025 Irreducible Inc.

use ctprim_utils::ErrorKind;

use crate::method::RsaOperation;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("lane {lane}: the {what} buffer is empty")]
	MissingBuffer { lane: usize, what: &'static str },
	#[error("lane {lane}: the {what} buffer must hold {expected} elements, got {actual}")]
	BufferLength {
		lane: usize,
		what: &'static str,
		expected: usize,
		actual: usize,
	},
	#[error("unsupported modulus size: {0} bits")]
	UnsupportedBits(usize),
	#[error("the method performs {actual:?} operations, the call needs {expected:?}")]
	WrongOperation {
		expected: RsaOperation,
		actual: RsaOperation,
	},
	#[error("the method is built for {method}-bit moduli, the call uses {requested} bits")]
	BitsMismatch { method: usize, requested: usize },
	#[error("scratch buffer needs {required} bytes, got {actual}")]
	ScratchTooSmall { required: usize, actual: usize },
	#[error("scratch buffer is not 64-byte aligned")]
	ScratchMisaligned,
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::MissingBuffer { .. } => ErrorKind::NullPointer,
			Self::BufferLength { .. } | Self::ScratchTooSmall { .. } => ErrorKind::Length,
			Self::UnsupportedBits(_) | Self::ScratchMisaligned => ErrorKind::BadArgument,
			Self::WrongOperation { .. } | Self::BitsMismatch { .. } => ErrorKind::ContextMismatch,
		}
	}
}
