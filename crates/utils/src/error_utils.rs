// Copyright 2024-2025 Irreducible Inc.

//! Precondition macros used at the entry of every public operation.
//!
//! Only public inputs (pointers, lengths, phases, widths) may be checked with these macros.
//! Anything derived from secret material must go through the masked primitives instead.

#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}
