// Copyright 2025 Irreducible Inc.

//! Multi-buffer RSA: eight independent modular exponentiations computed in lockstep.
//!
//! Numbers are held in a redundant radix-2^52 representation, transposed so that one 512-bit
//! vector carries the same limb of all eight lanes. Products use 52-bit multiply-add halves,
//! reductions are almost-Montgomery, and private exponents go through a fixed-window ladder whose
//! shape depends only on the modulus size. The caller supplies the scratch memory; see
//! [`RsaMethod::buffer_size`] and [`ScratchBuffer`].

mod crt;
mod error;
mod exp;
mod m512;
mod method;
mod mont;
mod radix52;
mod rsa;
mod scratch;

pub use error::Error;
pub use exp::WINDOW_BITS;
pub use m512::LANES;
pub use method::{RsaMethod, RsaOperation, PUBLIC_EXPONENT, SUPPORTED_BITS};
pub use rsa::{rsa_private_crt_mb8, rsa_private_mb8, rsa_public_mb8};
pub use scratch::ScratchBuffer;
