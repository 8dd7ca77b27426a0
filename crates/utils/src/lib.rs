// Copyright 2024-2025 Irreducible Inc.

//! Ambient helpers shared by the constant-time primitive crates.

pub mod checked_arithmetics;
pub mod env;
pub mod error_kind;
pub mod error_utils;
pub mod tracing;

pub use error_kind::ErrorKind;
