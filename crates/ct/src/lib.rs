// Copyright 2025 Irreducible Inc.

//! Constant-time building blocks.
//!
//! [`mask`] is the single place where branch-free comparisons and selections are implemented;
//! every higher level routine in the workspace composes from it. [`ec_select`] uses it to fetch a
//! precomputed elliptic curve point by a secret window index.

pub mod ec_select;
pub mod error;
pub mod mask;

pub use ec_select::*;
pub use error::*;
