// Copyright 2025 Irreducible Inc.

/// The closed set of failure reasons every primitive reports.
///
/// Each crate keeps its own descriptive `Error` type and maps it onto one of these kinds, so a
/// protocol layer can dispatch on the failure class without knowing the primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
	/// A required buffer is missing.
	#[error("null pointer")]
	NullPointer,
	/// A length is negative in the caller's model or structurally impossible.
	#[error("invalid length")]
	Length,
	/// The call violates the operation sequence or asks for an unsupported mode.
	#[error("bad argument")]
	BadArgument,
	/// A state object failed its validity check or belongs to another configuration.
	#[error("context mismatch")]
	ContextMismatch,
}
