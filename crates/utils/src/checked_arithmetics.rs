// Copyright 2024 Irreducible Inc.

/// Number of `b`-sized chunks needed to hold `a` units.
pub const fn div_ceil(a: usize, b: usize) -> usize {
	(a + b - 1) / b
}
