// Copyright 2025 Irreducible Inc.

use ctprim_utils::ErrorKind;

use crate::state::Phase;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("AES key must be 16, 24 or 32 bytes, got {0}")]
	KeyLength(usize),
	#[error("operation is not allowed in the {0:?} phase")]
	Sequence(Phase),
	#[error("the IV must be supplied before it can be completed")]
	MissingIv,
	#[error("{what} would exceed the limit of {limit} bytes")]
	LengthLimit { what: &'static str, limit: u64 },
	#[error("source has {src} bytes but destination has {dst}")]
	BufferLength { src: usize, dst: usize },
	#[error("tag length {0} is outside 1..=16")]
	TagLength(usize),
	#[error("serialized state must be {expected} bytes, got {actual}")]
	StateLength { expected: usize, actual: usize },
	#[error("state failed validation: {0}")]
	ContextMismatch(&'static str),
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Sequence(_) | Self::MissingIv => ErrorKind::BadArgument,
			Self::KeyLength(_)
			| Self::LengthLimit { .. }
			| Self::BufferLength { .. }
			| Self::TagLength(_)
			| Self::StateLength { .. } => ErrorKind::Length,
			Self::ContextMismatch(_) => ErrorKind::ContextMismatch,
		}
	}
}
