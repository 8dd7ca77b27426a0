// Copyright 2025 Irreducible Inc.

//! AES-GCM as an incremental state machine.
//!
//! A [`GcmContext`] absorbs the IV, then the additional authenticated data, then the payload, and
//! finally produces the tag. The block cipher and the GHASH multiplication are capabilities
//! injected at construction ([`BlockEncryptor`], [`GhashBackend`]); [`Aes`] and [`PortableGhash`]
//! are constant-time software implementations of both.

mod aes;
mod block;
mod capability;
mod error;
mod gcm;
mod ghash;
mod state;

pub use aes::Aes;
pub use block::{Block, BLOCK_SIZE};
pub use capability::{BlockEncryptor, GhashBackend};
pub use error::Error;
pub use gcm::{GcmContext, MAX_AAD_LEN, MAX_IV_LEN, MAX_TEXT_LEN};
pub use ghash::{gf128_mul, PortableGhash};
pub use state::{GcmState, Phase};
