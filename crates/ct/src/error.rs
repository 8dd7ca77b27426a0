// Copyright 2025 Irreducible Inc.

use ctprim_utils::ErrorKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("point table must hold {expected} limbs, got {actual}")]
	TableLength { expected: usize, actual: usize },
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::TableLength { .. } => ErrorKind::Length,
		}
	}
}
